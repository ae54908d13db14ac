//! Serializable game wrappers for typestate phases.
//!
//! Front ends hold one value that may be in any phase and feed it raw
//! text. Input is parsed before any transition, and a failed transition
//! restores the previous phase, so rejected input never changes the game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::action::{Attempt, GuessError, Seat};
use crate::code::Code;
use crate::duel::{DuelAwaitingSecond, DuelFinished, DuelInProgress, DuelResult, DuelSetup};
use crate::phases::{DuelOutcome, SoloOutcome};
use crate::record::{GuessLog, GuessRecord};
use crate::rules::Rules;
use crate::score::FeedbackStyle;
use crate::solo::{SoloFinished, SoloInProgress, SoloResult};

/// Coarse status of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum DuelPhase {
    /// Player 1 is choosing a secret.
    #[strum(to_string = "setting Player 1's secret")]
    SettingFirst,
    /// Player 2 is choosing a secret.
    #[strum(to_string = "setting Player 2's secret")]
    SettingSecond,
    /// Players are guessing.
    #[strum(to_string = "playing")]
    Playing,
    /// The duel has an outcome.
    #[strum(to_string = "over")]
    Over,
}

/// What a successful duel submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelEvent {
    /// A seat's secret was stored.
    SecretSet(Seat),
    /// A guess was scored and play continues.
    Scored {
        /// Who guessed.
        seat: Seat,
        /// The scored guess.
        record: GuessRecord,
    },
    /// A guess was scored and ended the duel.
    Finished {
        /// Who guessed last.
        seat: Seat,
        /// The final scored guess.
        record: GuessRecord,
        /// How the duel ended.
        outcome: DuelOutcome,
    },
}

/// A duel in any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyDuel {
    /// Waiting for Player 1's secret.
    SettingFirst(DuelSetup),
    /// Waiting for Player 2's secret.
    SettingSecond(DuelAwaitingSecond),
    /// Guessing.
    Playing(DuelInProgress),
    /// Finished.
    Over(DuelFinished),
}

impl From<DuelSetup> for AnyDuel {
    fn from(game: DuelSetup) -> Self {
        AnyDuel::SettingFirst(game)
    }
}

impl From<DuelAwaitingSecond> for AnyDuel {
    fn from(game: DuelAwaitingSecond) -> Self {
        AnyDuel::SettingSecond(game)
    }
}

impl From<DuelInProgress> for AnyDuel {
    fn from(game: DuelInProgress) -> Self {
        AnyDuel::Playing(game)
    }
}

impl From<DuelFinished> for AnyDuel {
    fn from(game: DuelFinished) -> Self {
        AnyDuel::Over(game)
    }
}

impl From<DuelResult> for AnyDuel {
    fn from(result: DuelResult) -> Self {
        match result {
            DuelResult::InProgress(g) => g.into(),
            DuelResult::Finished(g) => g.into(),
        }
    }
}

impl AnyDuel {
    /// Creates a fresh duel waiting for Player 1's secret.
    #[instrument]
    pub fn new(rules: Rules, style: FeedbackStyle) -> Self {
        DuelSetup::new(rules).with_style(style).into()
    }

    /// Returns the coarse phase.
    pub fn phase(&self) -> DuelPhase {
        match self {
            AnyDuel::SettingFirst(_) => DuelPhase::SettingFirst,
            AnyDuel::SettingSecond(_) => DuelPhase::SettingSecond,
            AnyDuel::Playing(_) => DuelPhase::Playing,
            AnyDuel::Over(_) => DuelPhase::Over,
        }
    }

    /// Returns the seat that must act next, if any.
    ///
    /// During setup this is the seat choosing a secret.
    pub fn active_seat(&self) -> Option<Seat> {
        match self {
            AnyDuel::SettingFirst(_) => Some(Seat::PlayerOne),
            AnyDuel::SettingSecond(_) => Some(Seat::PlayerTwo),
            AnyDuel::Playing(game) => Some(game.to_move()),
            AnyDuel::Over(_) => None,
        }
    }

    /// Returns the current turn (1 during setup).
    pub fn turn(&self) -> u8 {
        match self {
            AnyDuel::Playing(game) => game.turn(),
            AnyDuel::Over(game) => game.turn(),
            AnyDuel::SettingFirst(_) | AnyDuel::SettingSecond(_) => 1,
        }
    }

    /// Returns the limits.
    pub fn rules(&self) -> &Rules {
        match self {
            AnyDuel::SettingFirst(game) => game.rules(),
            AnyDuel::SettingSecond(game) => game.rules(),
            AnyDuel::Playing(game) => game.rules(),
            AnyDuel::Over(game) => game.rules(),
        }
    }

    /// Returns a seat's guesses, newest first (empty during setup).
    pub fn history(&self, seat: Seat) -> Option<&GuessLog> {
        match self {
            AnyDuel::Playing(game) => Some(game.history(seat)),
            AnyDuel::Over(game) => Some(game.history(seat)),
            AnyDuel::SettingFirst(_) | AnyDuel::SettingSecond(_) => None,
        }
    }

    /// Returns the outcome once the duel is over.
    pub fn outcome(&self) -> Option<DuelOutcome> {
        match self {
            AnyDuel::Over(game) => Some(*game.outcome()),
            _ => None,
        }
    }

    /// Returns true if the duel is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyDuel::Over(_))
    }

    /// Applies raw input for whichever seat must act.
    ///
    /// During setup the input is that seat's secret; during play it is a
    /// guess.
    ///
    /// # Errors
    ///
    /// Returns an error without changing the duel if the input is not a
    /// valid code or the duel is over.
    #[instrument(skip(self, input), fields(phase = %self.phase()))]
    pub fn submit(&mut self, input: &str) -> Result<DuelEvent, GuessError> {
        let seat = self.active_seat().ok_or(GuessError::GameOver)?;
        self.submit_as(seat, input)
    }

    /// Applies raw input on behalf of `seat`.
    ///
    /// # Errors
    ///
    /// As [`AnyDuel::submit`], plus [`GuessError::WrongPlayer`] if it is
    /// not `seat`'s turn.
    #[instrument(skip(self, input), fields(phase = %self.phase()))]
    pub fn submit_as(&mut self, seat: Seat, input: &str) -> Result<DuelEvent, GuessError> {
        let code: Code = input.parse().map_err(|e| {
            debug!(error = %e, "Rejected input");
            GuessError::from(e)
        })?;

        if self.active_seat() != Some(seat) {
            return Err(match self {
                AnyDuel::Over(_) => GuessError::GameOver,
                _ => GuessError::WrongPlayer(seat),
            });
        }

        let (next, event) = match self.clone() {
            AnyDuel::SettingFirst(game) => (
                game.set_first_secret(code).into(),
                DuelEvent::SecretSet(Seat::PlayerOne),
            ),
            AnyDuel::SettingSecond(game) => (
                game.set_second_secret(code).into(),
                DuelEvent::SecretSet(Seat::PlayerTwo),
            ),
            AnyDuel::Playing(game) => match game.guess(Attempt::new(seat, code)) {
                Ok(DuelResult::InProgress(next)) => {
                    let record = latest_record(next.history(seat))?;
                    (next.into(), DuelEvent::Scored { seat, record })
                }
                Ok(DuelResult::Finished(done)) => {
                    let record = latest_record(done.history(seat))?;
                    let outcome = *done.outcome();
                    (
                        done.into(),
                        DuelEvent::Finished {
                            seat,
                            record,
                            outcome,
                        },
                    )
                }
                Err(e) => {
                    warn!(error = %e, "Guess rejected, duel unchanged");
                    return Err(e);
                }
            },
            AnyDuel::Over(_) => return Err(GuessError::GameOver),
        };

        *self = next;
        Ok(event)
    }

    /// Applies raw input as a guess on behalf of `seat`.
    ///
    /// # Errors
    ///
    /// As [`AnyDuel::submit_as`], plus [`GuessError::NotPlaying`] while
    /// secrets are still being set.
    #[instrument(skip(self, input), fields(phase = %self.phase()))]
    pub fn guess_as(&mut self, seat: Seat, input: &str) -> Result<DuelEvent, GuessError> {
        match self {
            AnyDuel::SettingFirst(_) | AnyDuel::SettingSecond(_) => Err(GuessError::NotPlaying),
            AnyDuel::Playing(_) | AnyDuel::Over(_) => self.submit_as(seat, input),
        }
    }

    /// Discards the current duel and starts over with the same limits.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let rules = *self.rules();
        let style = self.style();
        *self = AnyDuel::new(rules, style);
    }

    fn style(&self) -> FeedbackStyle {
        match self {
            AnyDuel::SettingFirst(game) => game.style,
            AnyDuel::SettingSecond(game) => game.style,
            AnyDuel::Playing(game) => game.style,
            AnyDuel::Over(game) => game.style,
        }
    }
}

fn latest_record(log: &GuessLog) -> Result<GuessRecord, GuessError> {
    log.latest().cloned().ok_or_else(|| {
        GuessError::InvariantViolation("guess was not recorded in history".to_string())
    })
}

/// What a successful solo submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoloEvent {
    /// A guess was scored and play continues.
    Scored(GuessRecord),
    /// A guess was scored and ended the game.
    Finished {
        /// The final scored guess.
        record: GuessRecord,
        /// How the game ended.
        outcome: SoloOutcome,
        /// The revealed secret.
        secret: Code,
    },
}

/// A solo game in any phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnySolo {
    /// Guessing.
    Playing(SoloInProgress),
    /// Finished.
    Finished(SoloFinished),
}

impl From<SoloResult> for AnySolo {
    fn from(result: SoloResult) -> Self {
        match result {
            SoloResult::InProgress(g) => AnySolo::Playing(g),
            SoloResult::Finished(g) => AnySolo::Finished(g),
        }
    }
}

impl AnySolo {
    /// Starts a game against a random secret.
    #[instrument(skip(rng))]
    pub fn random<R: Rng>(rules: Rules, style: FeedbackStyle, rng: &mut R) -> Self {
        AnySolo::Playing(SoloInProgress::random(rules, rng).with_style(style))
    }

    /// Returns the guesses left.
    pub fn guesses_remaining(&self) -> u8 {
        match self {
            AnySolo::Playing(game) => game.guesses_remaining(),
            AnySolo::Finished(game) => game.guesses_remaining(),
        }
    }

    /// Returns the guesses made, newest first.
    pub fn history(&self) -> &GuessLog {
        match self {
            AnySolo::Playing(game) => game.history(),
            AnySolo::Finished(game) => game.history(),
        }
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<SoloOutcome> {
        match self {
            AnySolo::Finished(game) => Some(*game.outcome()),
            AnySolo::Playing(_) => None,
        }
    }

    /// Returns the secret, but only once the game is over.
    pub fn revealed_secret(&self) -> Option<&Code> {
        match self {
            AnySolo::Finished(game) => Some(game.secret()),
            AnySolo::Playing(_) => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnySolo::Finished(_))
    }

    /// Scores raw input as a guess.
    ///
    /// # Errors
    ///
    /// Returns an error without changing the game if the input is not a
    /// valid code or the game is over.
    #[instrument(skip(self, input), fields(remaining = self.guesses_remaining()))]
    pub fn submit(&mut self, input: &str) -> Result<SoloEvent, GuessError> {
        let code: Code = input.parse().map_err(|e| {
            debug!(error = %e, "Rejected input");
            GuessError::from(e)
        })?;

        let AnySolo::Playing(game) = self.clone() else {
            return Err(GuessError::GameOver);
        };

        let (next, event) = match game.guess(code)? {
            SoloResult::InProgress(next) => {
                let record = latest_record(next.history())?;
                (AnySolo::Playing(next), SoloEvent::Scored(record))
            }
            SoloResult::Finished(done) => {
                let record = latest_record(done.history())?;
                let event = SoloEvent::Finished {
                    record,
                    outcome: *done.outcome(),
                    secret: *done.secret(),
                };
                (AnySolo::Finished(done), event)
            }
        };

        *self = next;
        Ok(event)
    }

    /// Starts a fresh game with the same limits and wording.
    #[instrument(skip(self, rng))]
    pub fn new_game<R: Rng>(&mut self, rng: &mut R) {
        let (rules, style) = match self {
            AnySolo::Playing(game) => (*game.rules(), game.style),
            AnySolo::Finished(game) => (*game.rules(), game.style()),
        };
        *self = AnySolo::random(rules, style, rng);
    }
}
