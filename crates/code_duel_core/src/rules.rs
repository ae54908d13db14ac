//! Game limits.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Turns each player gets in a two-player duel.
pub const MAX_TURNS: u8 = 10;

/// Guesses allowed against the scripted opponent.
pub const MAX_GUESSES: u8 = 10;

/// Limits that bound a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Turns per player in a duel before it ends in a draw.
    pub max_turns: u8,
    /// Guesses in a solo game before it is lost.
    pub max_guesses: u8,
}

/// Rejected limit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// A duel needs at least one turn.
    #[display("max_turns must be at least 1")]
    NoTurns,
    /// A solo game needs at least one guess.
    #[display("max_guesses must be at least 1")]
    NoGuesses,
}

impl std::error::Error for RulesError {}

impl Rules {
    /// Creates validated rules.
    #[instrument]
    pub fn new(max_turns: u8, max_guesses: u8) -> Result<Self, RulesError> {
        let rules = Self {
            max_turns,
            max_guesses,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Checks that both limits allow at least one move.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.max_turns == 0 {
            return Err(RulesError::NoTurns);
        }
        if self.max_guesses == 0 {
            return Err(RulesError::NoGuesses);
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_turns: MAX_TURNS,
            max_guesses: MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = Rules::default();
        assert_eq!(rules.max_turns, 10);
        assert_eq!(rules.max_guesses, 10);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_zero_limits_rejected() {
        assert_eq!(Rules::new(0, 5), Err(RulesError::NoTurns));
        assert_eq!(Rules::new(5, 0), Err(RulesError::NoGuesses));
        assert!(Rules::new(1, 1).is_ok());
    }
}
