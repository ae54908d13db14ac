//! Contract-based validation for guesses.
//!
//! Contracts pair preconditions on `(state, action)` with postconditions
//! on `(before, after)`, in the Hoare style {P} action {Q}.

use tracing::{instrument, warn};

use crate::action::{Attempt, GuessError};
use crate::code::Code;
use crate::duel::DuelInProgress;
use crate::invariants::{DuelInvariants, InvariantSet, InvariantViolation, SoloInvariants};
use crate::solo::SoloInProgress;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

fn violation_error(violations: Vec<InvariantViolation>) -> GuessError {
    let descriptions = violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    warn!(%descriptions, "Postcondition failed");
    GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
}

// ─────────────────────────────────────────────────────────────
//  Duel
// ─────────────────────────────────────────────────────────────

/// Precondition: the guessing seat must be the seat to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the attempt's seat.
    #[instrument(skip(game))]
    pub fn check(attempt: &Attempt, game: &DuelInProgress) -> Result<(), GuessError> {
        if attempt.seat != game.to_move() {
            Err(GuessError::WrongPlayer(attempt.seat))
        } else {
            Ok(())
        }
    }
}

/// Contract for duel guesses.
///
/// Preconditions:
/// - It must be the guessing seat's turn
///
/// Postconditions:
/// - Turn stays within the limit
/// - Seats still alternate
/// - Recorded scores still match their guesses
pub struct DuelGuessContract;

impl Contract<DuelInProgress, Attempt> for DuelGuessContract {
    fn pre(game: &DuelInProgress, attempt: &Attempt) -> Result<(), GuessError> {
        PlayersTurn::check(attempt, game)
    }

    fn post(_before: &DuelInProgress, after: &DuelInProgress) -> Result<(), GuessError> {
        DuelInvariants::check_all(after).map_err(violation_error)
    }
}

// ─────────────────────────────────────────────────────────────
//  Solo
// ─────────────────────────────────────────────────────────────

/// Precondition: at least one guess must remain.
pub struct GuessesRemain;

impl GuessesRemain {
    /// Checks the remaining budget.
    #[instrument(skip(game))]
    pub fn check(game: &SoloInProgress) -> Result<(), GuessError> {
        if game.guesses_remaining() == 0 {
            Err(GuessError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Contract for solo guesses.
///
/// Postconditions additionally require the budget to shrink by exactly one.
pub struct SoloGuessContract;

impl Contract<SoloInProgress, Code> for SoloGuessContract {
    fn pre(game: &SoloInProgress, _guess: &Code) -> Result<(), GuessError> {
        GuessesRemain::check(game)
    }

    fn post(before: &SoloInProgress, after: &SoloInProgress) -> Result<(), GuessError> {
        SoloInvariants::check_all(after).map_err(violation_error)?;
        if after.guesses_remaining() + 1 != before.guesses_remaining() {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: a guess must spend exactly one from the budget".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DuelResult, DuelSetup, Rules, Seat, SoloResult};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    fn duel() -> DuelInProgress {
        DuelSetup::default()
            .set_first_secret(code("123"))
            .set_second_secret(code("456"))
    }

    #[test]
    fn test_precondition_right_seat() {
        let attempt = Attempt::new(Seat::PlayerOne, code("789"));
        assert!(DuelGuessContract::pre(&duel(), &attempt).is_ok());
    }

    #[test]
    fn test_precondition_wrong_seat() {
        let attempt = Attempt::new(Seat::PlayerTwo, code("789"));
        assert_eq!(
            DuelGuessContract::pre(&duel(), &attempt),
            Err(GuessError::WrongPlayer(Seat::PlayerTwo))
        );
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = duel();
        let attempt = Attempt::new(Seat::PlayerOne, code("789"));
        let DuelResult::InProgress(after) = before.clone().guess(attempt).unwrap() else {
            panic!("expected in progress");
        };
        assert!(DuelGuessContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = duel();
        let attempt = Attempt::new(Seat::PlayerOne, code("789"));
        let DuelResult::InProgress(mut after) = before.clone().guess(attempt).unwrap() else {
            panic!("expected in progress");
        };
        after.to_move = Seat::PlayerOne;
        assert!(matches!(
            DuelGuessContract::post(&before, &after),
            Err(GuessError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_solo_postcondition_requires_spending_one() {
        let before = SoloInProgress::new(Rules::default(), code("123"));
        let SoloResult::InProgress(after) = before.clone().guess(code("456")).unwrap() else {
            panic!("expected in progress");
        };
        assert!(SoloGuessContract::post(&before, &after).is_ok());
        assert!(SoloGuessContract::post(&before, &before).is_err());
    }
}
