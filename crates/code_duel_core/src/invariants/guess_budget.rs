//! Guess budget invariant: spent plus remaining guesses equals the limit.

use super::Invariant;
use crate::solo::SoloInProgress;

/// Invariant: `history.len() + guesses_remaining == max_guesses`, and a
/// running game always has at least one guess left.
pub struct GuessBudgetInvariant;

impl Invariant<SoloInProgress> for GuessBudgetInvariant {
    fn holds(game: &SoloInProgress) -> bool {
        let spent = game.history.len();
        game.guesses_remaining > 0
            && spent + usize::from(game.guesses_remaining) == usize::from(game.rules.max_guesses)
    }

    fn description() -> &'static str {
        "Spent and remaining guesses add up to the guess limit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rules, SoloResult};

    #[test]
    fn test_holds_through_play() {
        let secret = "123".parse().unwrap();
        let mut game = SoloInProgress::new(Rules::default(), secret);
        for guess in ["456", "789", "312"] {
            assert!(GuessBudgetInvariant::holds(&game));
            match game.guess(guess.parse().unwrap()).unwrap() {
                SoloResult::InProgress(next) => game = next,
                SoloResult::Finished(_) => panic!("no guess here solves"),
            }
        }
        assert_eq!(game.guesses_remaining(), 7);
    }

    #[test]
    fn test_drift_violates() {
        let mut game = SoloInProgress::new(Rules::default(), "123".parse().unwrap());
        game.guesses_remaining = 9;
        assert!(!GuessBudgetInvariant::holds(&game));
    }
}
