//! History balance invariant: guesses alternate Player 1, Player 2, ...

use super::Invariant;
use crate::action::Seat;
use crate::duel::DuelInProgress;

/// Invariant: each seat has guessed exactly as often as the turn counter
/// and the seat to move imply.
///
/// On turn `t`, Player 2 has made `t - 1` guesses. Player 1 has made
/// `t - 1` if it is their move and `t` if Player 2 is to move.
pub struct HistoryBalancedInvariant;

impl Invariant<DuelInProgress> for HistoryBalancedInvariant {
    fn holds(game: &DuelInProgress) -> bool {
        let Some(completed) = usize::from(game.turn).checked_sub(1) else {
            return false;
        };

        let p1_expected = match game.to_move {
            Seat::PlayerOne => completed,
            Seat::PlayerTwo => completed + 1,
        };

        game.p1_history.len() == p1_expected && game.p2_history.len() == completed
    }

    fn description() -> &'static str {
        "Players alternate guesses (Player 1, Player 2, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attempt, DuelResult, DuelSetup, GuessRecord, FeedbackStyle};

    fn start() -> DuelInProgress {
        DuelSetup::default()
            .set_first_secret("123".parse().unwrap())
            .set_second_secret("456".parse().unwrap())
    }

    #[test]
    fn test_holds_mid_turn() {
        let miss = "789".parse().unwrap();
        let DuelResult::InProgress(game) =
            start().guess(Attempt::new(Seat::PlayerOne, miss)).unwrap()
        else {
            panic!("expected in progress");
        };
        assert!(HistoryBalancedInvariant::holds(&game));
    }

    #[test]
    fn test_extra_guess_violates() {
        let mut game = start();
        let secret = "456".parse().unwrap();
        game.p2_history
            .record(GuessRecord::scored(&secret, "789".parse().unwrap(), FeedbackStyle::Duel));
        assert!(!HistoryBalancedInvariant::holds(&game));
    }
}
