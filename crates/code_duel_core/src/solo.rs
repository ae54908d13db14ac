//! Single-player game against a scripted opponent.
//!
//! The opponent only picks a secret; the player has a fixed guess budget to
//! crack it. The secret stays hidden until the game is finished.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::GuessError;
use crate::code::Code;
use crate::contracts::{Contract, SoloGuessContract};
use crate::generator::random_code;
use crate::phases::SoloOutcome;
use crate::record::{GuessLog, GuessRecord};
use crate::rules::Rules;
use crate::score::{FeedbackStyle, noun};

/// Solo game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloInProgress {
    pub(crate) rules: Rules,
    pub(crate) style: FeedbackStyle,
    pub(crate) secret: Code,
    pub(crate) guesses_remaining: u8,
    pub(crate) history: GuessLog,
}

impl SoloInProgress {
    /// Starts a game against a known secret.
    #[instrument(skip(secret))]
    pub fn new(rules: Rules, secret: Code) -> Self {
        info!(max_guesses = rules.max_guesses, "Solo game started");
        Self {
            rules,
            style: FeedbackStyle::Versus,
            secret,
            guesses_remaining: rules.max_guesses,
            history: GuessLog::new(),
        }
    }

    /// Starts a game against a freshly drawn secret.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rules: Rules, rng: &mut R) -> Self {
        Self::new(rules, random_code(rng))
    }

    /// Overrides the feedback wording.
    pub fn with_style(mut self, style: FeedbackStyle) -> Self {
        self.style = style;
        self
    }

    /// Scores a guess, consuming self and transitioning to the next state.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::GameOver`] if no guesses remain, or
    /// [`GuessError::InvariantViolation`] if a postcondition fails in a
    /// debug build.
    #[instrument(skip(self), fields(remaining = self.guesses_remaining))]
    pub fn guess(self, guess: Code) -> Result<SoloResult, GuessError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        SoloGuessContract::pre(&self, &guess)?;

        let mut game = self;
        let record = GuessRecord::scored(&game.secret, guess, game.style);
        let solved = record.score().is_solved();
        debug!(
            bulls = record.score().bulls,
            cows = record.score().cows,
            "Guess scored"
        );
        game.history.record(record);
        game.guesses_remaining -= 1;

        if solved {
            info!(guesses = game.history.len(), "Secret cracked");
            return Ok(SoloResult::Finished(game.finish(SoloOutcome::Won)));
        }
        if game.guesses_remaining == 0 {
            info!("Out of guesses");
            return Ok(SoloResult::Finished(game.finish(SoloOutcome::Lost)));
        }

        #[cfg(debug_assertions)]
        SoloGuessContract::post(&before, &game)?;

        Ok(SoloResult::InProgress(game))
    }

    /// Returns the guesses left.
    pub fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    /// Returns the guesses made, newest first.
    pub fn history(&self) -> &GuessLog {
        &self.history
    }

    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    fn finish(self, outcome: SoloOutcome) -> SoloFinished {
        SoloFinished {
            rules: self.rules,
            style: self.style,
            secret: self.secret,
            guesses_remaining: self.guesses_remaining,
            outcome,
            history: self.history,
        }
    }
}

/// Finished solo game. The secret is revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloFinished {
    rules: Rules,
    style: FeedbackStyle,
    secret: Code,
    guesses_remaining: u8,
    outcome: SoloOutcome,
    history: GuessLog,
}

impl SoloFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &SoloOutcome {
        &self.outcome
    }

    /// Returns the opponent's secret.
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// Returns the guesses left when the game ended.
    pub fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    /// Returns the guesses made, newest first.
    pub fn history(&self) -> &GuessLog {
        &self.history
    }

    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub(crate) fn style(&self) -> FeedbackStyle {
        self.style
    }

    /// Describes the result for the game-over banner.
    pub fn summary(&self) -> String {
        match self.outcome {
            SoloOutcome::Won => format!(
                "You cracked the code ({}) in {} {}.",
                self.secret,
                self.history.len(),
                noun(self.history.len() as u32, "guess", "guesses")
            ),
            SoloOutcome::Lost => format!(
                "You ran out of guesses. The code was {}.",
                self.secret
            ),
        }
    }

    /// Starts a new game against a fresh secret (consumes finished).
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng>(self, rng: &mut R) -> SoloInProgress {
        SoloInProgress::random(self.rules, rng).with_style(self.style)
    }
}

/// Result of a solo guess.
#[derive(Debug, Clone)]
pub enum SoloResult {
    /// Game continues.
    InProgress(SoloInProgress),
    /// Game finished.
    Finished(SoloFinished),
}
