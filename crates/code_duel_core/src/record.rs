//! Scored guesses and per-player guess history.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::code::Code;
use crate::score::{FeedbackStyle, Score, score};

/// A guess together with how it scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GuessRecord {
    guess: Code,
    score: Score,
    feedback: String,
}

impl GuessRecord {
    /// Scores `guess` against `secret` and renders the feedback.
    #[instrument(level = "debug")]
    pub fn scored(secret: &Code, guess: Code, style: FeedbackStyle) -> Self {
        let score = score(secret, &guess);
        Self::new(guess, score, style.message(score))
    }
}

/// Guess history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuessLog {
    records: Vec<GuessRecord>,
}

impl GuessLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record in front of the older ones.
    pub fn record(&mut self, record: GuessRecord) {
        self.records.insert(0, record);
    }

    /// Most recent record.
    pub fn latest(&self) -> Option<&GuessRecord> {
        self.records.first()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }

    /// Number of recorded guesses.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been guessed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a GuessLog {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
