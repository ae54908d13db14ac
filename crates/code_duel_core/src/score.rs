//! Guess scoring and feedback wording.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::code::{CODE_LENGTH, Code};

/// Result of comparing a guess with a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    /// Digits correct in both value and position.
    pub bulls: u8,
    /// Digits present in the secret but guessed in the wrong position.
    pub cows: u8,
}

impl Score {
    /// Digits present in the secret regardless of position.
    pub fn correct_digits(&self) -> u8 {
        self.bulls + self.cows
    }

    /// True when every digit is in its place.
    pub fn is_solved(&self) -> bool {
        usize::from(self.bulls) == CODE_LENGTH
    }

    /// True when no digit of the guess appears in the secret.
    pub fn is_miss(&self) -> bool {
        self.bulls == 0 && self.cows == 0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}B{}C", self.bulls, self.cows)
    }
}

/// Scores `guess` against `secret`.
#[instrument(level = "debug", ret)]
pub fn score(secret: &Code, guess: &Code) -> Score {
    score_digits(&secret.digits(), &guess.digits())
}

/// Scores raw digit arrays.
///
/// Exact matches are counted first and both positions consumed; each
/// remaining guess digit then consumes at most one unconsumed secret
/// position. Repeated digits are therefore never double counted, even
/// though [`Code`] itself forbids them.
pub fn score_digits(secret: &[u8; CODE_LENGTH], guess: &[u8; CODE_LENGTH]) -> Score {
    let mut secret_used = [false; CODE_LENGTH];
    let mut guess_used = [false; CODE_LENGTH];
    let mut result = Score::default();

    for i in 0..CODE_LENGTH {
        if guess[i] == secret[i] {
            result.bulls += 1;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for (i, digit) in guess.iter().enumerate() {
        if guess_used[i] {
            continue;
        }
        let hit = (0..CODE_LENGTH).find(|&j| !secret_used[j] && secret[j] == *digit);
        if let Some(j) = hit {
            result.cows += 1;
            secret_used[j] = true;
        }
    }

    result
}

/// Wording used to describe a score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackStyle {
    /// Positional wording used between two players.
    #[default]
    Duel,
    /// Digit-count wording used against the scripted opponent.
    Versus,
}

impl FeedbackStyle {
    /// Renders the feedback message for a score.
    #[instrument(level = "debug")]
    pub fn message(self, score: Score) -> String {
        if score.is_solved() {
            return "Correct! You cracked the code!".to_string();
        }

        match self {
            FeedbackStyle::Duel if score.is_miss() => "All incorrect.".to_string(),
            FeedbackStyle::Duel => format!(
                "{} correct position, {} wrong position.",
                score.bulls, score.cows
            ),
            FeedbackStyle::Versus if score.is_miss() => "No digits are correct.".to_string(),
            FeedbackStyle::Versus => {
                format!(
                    "You have {} correct {}, with {} in the correct position.",
                    score.correct_digits(),
                    noun(score.correct_digits().into(), "digit", "digits"),
                    score.bulls
                )
            }
        }
    }
}

/// Picks the singular or plural form for `count`.
pub(crate) fn noun(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}
