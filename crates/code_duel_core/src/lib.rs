//! Code Duel game logic.
//!
//! A Mastermind-style code-breaking duel over 3-digit codes with unique
//! digits. Each guess is scored in bulls (right digit, right place) and
//! cows (right digit, wrong place).
//!
//! # Architecture
//!
//! - **Codes**: [`Code`] is parsed and validated once; everything else
//!   takes a `Code`, so invalid input never reaches a state machine
//! - **Scoring**: [`score`] counts exact matches first, then misplaced
//!   digits, without double counting
//! - **Duel**: typestate phases [`DuelSetup`] → [`DuelAwaitingSecond`] →
//!   [`DuelInProgress`] → [`DuelFinished`]
//! - **Solo**: [`SoloInProgress`] → [`SoloFinished`] against a secret from
//!   [`random_code`]
//! - **Wrappers**: [`AnyDuel`] and [`AnySolo`] take raw text and leave the
//!   game untouched on rejection
//!
//! # Example
//!
//! ```
//! use code_duel_core::{AnyDuel, DuelEvent, FeedbackStyle, Rules, Seat};
//!
//! let mut duel = AnyDuel::new(Rules::default(), FeedbackStyle::Duel);
//! duel.submit("123").unwrap();
//! duel.submit("456").unwrap();
//!
//! assert!(duel.submit("112").is_err());
//! match duel.submit("465").unwrap() {
//!     DuelEvent::Scored { seat, record } => {
//!         assert_eq!(seat, Seat::PlayerOne);
//!         assert_eq!(record.score().bulls, 1);
//!     }
//!     other => panic!("unexpected event: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod code;
pub mod contracts;
mod duel;
mod feedback;
mod generator;
pub mod invariants;
mod phases;
mod record;
mod rules;
mod score;
mod solo;
mod wrapper;

pub use action::{Attempt, GuessError, Seat};
pub use code::{CODE_LENGTH, Code, CodeError};
pub use duel::{DuelAwaitingSecond, DuelFinished, DuelInProgress, DuelResult, DuelSetup};
pub use feedback::{FeedbackRequest, FeedbackResponse, evaluate_feedback, feedback_schema};
pub use generator::random_code;
pub use phases::{DuelOutcome, SoloOutcome};
pub use record::{GuessLog, GuessRecord};
pub use rules::{MAX_GUESSES, MAX_TURNS, Rules, RulesError};
pub use score::{FeedbackStyle, Score, score, score_digits};
pub use solo::{SoloFinished, SoloInProgress, SoloResult};
pub use wrapper::{AnyDuel, AnySolo, DuelEvent, DuelPhase, SoloEvent};
