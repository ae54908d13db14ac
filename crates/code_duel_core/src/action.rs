//! First-class guess actions and the errors they can raise.
//!
//! A guess is a domain event: who guessed and what they guessed. It can be
//! validated against a game before it is applied, logged, and replayed.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::code::{Code, CodeError};

/// One of the two seats in a duel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Seat {
    /// Sets the first secret and guesses first.
    #[strum(to_string = "Player 1")]
    PlayerOne,
    /// Sets the second secret and guesses second.
    #[strum(to_string = "Player 2")]
    PlayerTwo,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }
}

/// A seat guessing its opponent's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attempt {
    /// Who is guessing.
    pub seat: Seat,
    /// The guessed code.
    pub guess: Code,
}

impl Attempt {
    /// Creates a new attempt.
    #[instrument]
    pub fn new(seat: Seat, guess: Code) -> Self {
        Self { seat, guess }
    }
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.seat, self.guess)
    }
}

/// Error raised when input cannot be applied to a game.
///
/// The game is never modified when one of these is returned, so the
/// current turn can simply be retried.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GuessError {
    /// The input was not a valid code.
    #[display("Invalid input: {}", _0)]
    #[from]
    InvalidCode(CodeError),

    /// It is the other seat's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Seat),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A guess was made before both secrets were set.
    #[display("Secrets are still being set")]
    NotPlaying,

    /// A transition broke a game invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_labels() {
        assert_eq!(Seat::PlayerOne.to_string(), "Player 1");
        assert_eq!(Seat::PlayerTwo.to_string(), "Player 2");
        assert_eq!(Seat::PlayerOne.opponent(), Seat::PlayerTwo);
    }

    #[test]
    fn test_code_error_converts() {
        let err: GuessError = CodeError::RepeatedDigit('1').into();
        assert!(matches!(err, GuessError::InvalidCode(CodeError::RepeatedDigit('1'))));
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn test_attempt_display() {
        let attempt = Attempt::new(Seat::PlayerTwo, "905".parse().unwrap());
        assert_eq!(attempt.to_string(), "Player 2 -> 905");
    }
}
