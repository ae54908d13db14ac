//! Outcomes of finished games.

use serde::{Deserialize, Serialize};

use crate::action::Seat;

/// Outcome of a finished duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelOutcome {
    /// This seat cracked the other's code.
    Winner(Seat),
    /// Nobody cracked a code within the turn limit.
    Draw,
}

impl DuelOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            DuelOutcome::Winner(seat) => Some(*seat),
            DuelOutcome::Draw => None,
        }
    }

    /// Returns true if the duel was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, DuelOutcome::Draw)
    }
}

impl std::fmt::Display for DuelOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuelOutcome::Winner(seat) => write!(f, "{} Wins!", seat),
            DuelOutcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Outcome of a finished game against the scripted opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoloOutcome {
    /// The secret was cracked.
    Won,
    /// Guesses ran out.
    Lost,
}

impl std::fmt::Display for SoloOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoloOutcome::Won => write!(f, "You Win!"),
            SoloOutcome::Lost => write!(f, "Game Over"),
        }
    }
}
