//! History scoring invariant: every recorded score matches a re-score.

use super::Invariant;
use crate::action::Seat;
use crate::code::Code;
use crate::duel::DuelInProgress;
use crate::record::GuessLog;
use crate::score::score;
use crate::solo::SoloInProgress;

/// Invariant: each recorded score equals the score of its guess against
/// the secret it was aimed at, and no recorded guess is solved while the
/// game is still running.
pub struct HistoryScoredInvariant;

fn log_consistent(log: &GuessLog, secret: &Code) -> bool {
    log.iter().all(|record| {
        let rescored = score(secret, record.guess());
        rescored == *record.score() && !rescored.is_solved()
    })
}

impl Invariant<DuelInProgress> for HistoryScoredInvariant {
    fn holds(game: &DuelInProgress) -> bool {
        log_consistent(game.history(Seat::PlayerOne), game.secret_of(Seat::PlayerTwo))
            && log_consistent(game.history(Seat::PlayerTwo), game.secret_of(Seat::PlayerOne))
    }

    fn description() -> &'static str {
        "Recorded scores match their guesses and none is a solve"
    }
}

impl Invariant<SoloInProgress> for HistoryScoredInvariant {
    fn holds(game: &SoloInProgress) -> bool {
        log_consistent(game.history(), &game.secret)
    }

    fn description() -> &'static str {
        "Recorded scores match their guesses and none is a solve"
    }
}
