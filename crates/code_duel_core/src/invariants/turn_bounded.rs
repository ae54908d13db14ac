//! Turn bound invariant: the turn counter stays within the duel's limit.

use super::Invariant;
use crate::duel::DuelInProgress;

/// Invariant: `1 <= turn <= max_turns` while a duel is in progress.
pub struct TurnBoundedInvariant;

impl Invariant<DuelInProgress> for TurnBoundedInvariant {
    fn holds(game: &DuelInProgress) -> bool {
        game.turn >= 1 && game.turn <= game.rules.max_turns
    }

    fn description() -> &'static str {
        "Turn counter stays between 1 and the turn limit"
    }
}
