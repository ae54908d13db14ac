//! Phase-specific typestate structs for the two-player duel.
//!
//! Each phase is its own type carrying only the fields that exist in that
//! phase: the second secret does not exist while the first player is still
//! choosing, and a finished duel ALWAYS has an outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{Attempt, GuessError, Seat};
use crate::code::Code;
use crate::contracts::{Contract, DuelGuessContract};
use crate::phases::DuelOutcome;
use crate::record::{GuessLog, GuessRecord};
use crate::rules::Rules;
use crate::score::{FeedbackStyle, noun};

// ─────────────────────────────────────────────────────────────
//  Setting Player 1's secret
// ─────────────────────────────────────────────────────────────

/// Duel waiting for Player 1's secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelSetup {
    rules: Rules,
    pub(crate) style: FeedbackStyle,
}

impl DuelSetup {
    /// Creates a duel with the given limits.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            style: FeedbackStyle::Duel,
        }
    }

    /// Overrides the feedback wording.
    pub fn with_style(mut self, style: FeedbackStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Stores Player 1's secret (consumes setup).
    #[instrument(skip(self, secret))]
    pub fn set_first_secret(self, secret: Code) -> DuelAwaitingSecond {
        debug!("Player 1 secret stored");
        DuelAwaitingSecond {
            rules: self.rules,
            style: self.style,
            p1_secret: secret,
        }
    }
}

impl Default for DuelSetup {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  Setting Player 2's secret
// ─────────────────────────────────────────────────────────────

/// Duel waiting for Player 2's secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelAwaitingSecond {
    rules: Rules,
    pub(crate) style: FeedbackStyle,
    p1_secret: Code,
}

impl DuelAwaitingSecond {
    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Stores Player 2's secret and starts play with Player 1 on turn 1.
    #[instrument(skip(self, secret))]
    pub fn set_second_secret(self, secret: Code) -> DuelInProgress {
        info!(max_turns = self.rules.max_turns, "Duel started");
        DuelInProgress {
            rules: self.rules,
            style: self.style,
            p1_secret: self.p1_secret,
            p2_secret: secret,
            turn: 1,
            to_move: Seat::PlayerOne,
            p1_history: GuessLog::new(),
            p2_history: GuessLog::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Playing
// ─────────────────────────────────────────────────────────────

/// Duel in progress, accepting guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelInProgress {
    pub(crate) rules: Rules,
    pub(crate) style: FeedbackStyle,
    pub(crate) p1_secret: Code,
    pub(crate) p2_secret: Code,
    pub(crate) turn: u8,
    pub(crate) to_move: Seat,
    pub(crate) p1_history: GuessLog,
    pub(crate) p2_history: GuessLog,
}

impl DuelInProgress {
    /// Scores a guess, consuming self and transitioning to the next state.
    ///
    /// A correct guess ends the duel at once. After Player 2 misses on the
    /// final turn the duel is a draw.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::WrongPlayer`] if it is not `attempt.seat`'s turn.
    #[instrument(skip(self), fields(turn = self.turn, to_move = %self.to_move))]
    pub fn guess(self, attempt: Attempt) -> Result<DuelResult, GuessError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        DuelGuessContract::pre(&self, &attempt)?;

        let mut game = self;
        let secret = *game.secret_of(attempt.seat.opponent());
        let record = GuessRecord::scored(&secret, attempt.guess, game.style);
        let solved = record.score().is_solved();
        debug!(
            seat = %attempt.seat,
            bulls = record.score().bulls,
            cows = record.score().cows,
            "Guess scored"
        );
        game.history_mut(attempt.seat).record(record);

        if solved {
            info!(winner = %attempt.seat, turn = game.turn, "Code cracked");
            return Ok(DuelResult::Finished(game.finish(DuelOutcome::Winner(attempt.seat))));
        }

        match attempt.seat {
            Seat::PlayerOne => game.to_move = Seat::PlayerTwo,
            Seat::PlayerTwo if game.turn >= game.rules.max_turns => {
                info!(turn = game.turn, "Turn limit reached");
                return Ok(DuelResult::Finished(game.finish(DuelOutcome::Draw)));
            }
            Seat::PlayerTwo => {
                game.to_move = Seat::PlayerOne;
                game.turn += 1;
            }
        }

        #[cfg(debug_assertions)]
        DuelGuessContract::post(&before, &game)?;

        Ok(DuelResult::InProgress(game))
    }

    /// Rebuilds a duel from its secrets and an alternating guess sequence
    /// starting with Player 1.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::GameOver`] if guesses remain after the duel
    /// has finished.
    #[instrument(skip(guesses), fields(guess_count = guesses.len()))]
    pub fn replay(
        rules: Rules,
        p1_secret: Code,
        p2_secret: Code,
        guesses: &[Code],
    ) -> Result<DuelResult, GuessError> {
        let mut game = DuelSetup::new(rules)
            .set_first_secret(p1_secret)
            .set_second_secret(p2_secret);

        let mut remaining = guesses.iter();
        while let Some(guess) = remaining.next() {
            let attempt = Attempt::new(game.to_move, *guess);
            match game.guess(attempt)? {
                DuelResult::InProgress(next) => game = next,
                DuelResult::Finished(done) => {
                    if remaining.next().is_some() {
                        return Err(GuessError::GameOver);
                    }
                    return Ok(DuelResult::Finished(done));
                }
            }
        }

        Ok(DuelResult::InProgress(game))
    }

    /// Returns the seat to guess next.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Returns the current turn, starting at 1.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns a seat's guesses, newest first.
    pub fn history(&self, seat: Seat) -> &GuessLog {
        match seat {
            Seat::PlayerOne => &self.p1_history,
            Seat::PlayerTwo => &self.p2_history,
        }
    }

    pub(crate) fn secret_of(&self, seat: Seat) -> &Code {
        match seat {
            Seat::PlayerOne => &self.p1_secret,
            Seat::PlayerTwo => &self.p2_secret,
        }
    }

    fn history_mut(&mut self, seat: Seat) -> &mut GuessLog {
        match seat {
            Seat::PlayerOne => &mut self.p1_history,
            Seat::PlayerTwo => &mut self.p2_history,
        }
    }

    fn finish(self, outcome: DuelOutcome) -> DuelFinished {
        DuelFinished {
            rules: self.rules,
            style: self.style,
            p1_secret: self.p1_secret,
            p2_secret: self.p2_secret,
            turn: self.turn,
            outcome,
            p1_history: self.p1_history,
            p2_history: self.p2_history,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Over
// ─────────────────────────────────────────────────────────────

/// Finished duel. The outcome is always present and both secrets are
/// revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelFinished {
    rules: Rules,
    pub(crate) style: FeedbackStyle,
    p1_secret: Code,
    p2_secret: Code,
    turn: u8,
    outcome: DuelOutcome,
    p1_history: GuessLog,
    p2_history: GuessLog,
}

impl DuelFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &DuelOutcome {
        &self.outcome
    }

    /// Returns the turn the duel ended on.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns a seat's secret.
    pub fn secret(&self, seat: Seat) -> &Code {
        match seat {
            Seat::PlayerOne => &self.p1_secret,
            Seat::PlayerTwo => &self.p2_secret,
        }
    }

    /// Returns a seat's guesses, newest first.
    pub fn history(&self, seat: Seat) -> &GuessLog {
        match seat {
            Seat::PlayerOne => &self.p1_history,
            Seat::PlayerTwo => &self.p2_history,
        }
    }

    /// Describes the result for the game-over banner.
    pub fn summary(&self) -> String {
        match self.outcome {
            DuelOutcome::Winner(seat) => format!(
                "Congratulations! You cracked {}'s code ({}) in {} {}.",
                seat.opponent(),
                self.secret(seat.opponent()),
                self.turn,
                noun(self.turn.into(), "turn", "turns")
            ),
            DuelOutcome::Draw => format!(
                "Neither player guessed the code within {} {}.",
                self.rules.max_turns,
                noun(self.rules.max_turns.into(), "turn", "turns")
            ),
        }
    }

    /// Starts a new duel with the same limits (consumes finished).
    #[instrument(skip(self))]
    pub fn restart(self) -> DuelSetup {
        DuelSetup::new(self.rules).with_style(self.style)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result type
// ─────────────────────────────────────────────────────────────

/// Result of a guess.
#[derive(Debug, Clone)]
pub enum DuelResult {
    /// Duel continues.
    InProgress(DuelInProgress),
    /// Duel finished.
    Finished(DuelFinished),
}
