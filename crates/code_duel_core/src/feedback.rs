//! Stateless scoring service for the single-player flow.
//!
//! The request/response pair describes one guess against the opponent's
//! secret: the caller supplies the budget before the guess and gets back
//! the feedback and the budget after it. This is a pure function of its
//! input, so it runs locally.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::code::{Code, CodeError};
use crate::score::{FeedbackStyle, score};

/// One guess against a known secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// The opponent's secret 3-digit code.
    pub secret_code: String,
    /// The player's 3-digit guess.
    pub guess: String,
    /// Guesses remaining before this one.
    pub guesses_remaining: u32,
}

/// Result of scoring a [`FeedbackRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    /// Feedback on the guess: correct digits and how many are in place.
    pub feedback: String,
    /// Guesses remaining after this one.
    pub guesses_remaining: u32,
    /// Whether the guess matched the secret exactly.
    pub is_correct_guess: bool,
    /// True when the player has run out of guesses without a match.
    pub has_lost: bool,
}

/// Scores a request with the single-player wording.
///
/// # Errors
///
/// Returns a [`CodeError`] if either the secret or the guess is not a
/// valid code.
#[instrument(fields(remaining = request.guesses_remaining), skip(request))]
pub fn evaluate_feedback(request: &FeedbackRequest) -> Result<FeedbackResponse, CodeError> {
    let secret: Code = request.secret_code.parse()?;
    let guess: Code = request.guess.parse()?;

    let result = score(&secret, &guess);
    let guesses_remaining = request.guesses_remaining.saturating_sub(1);
    let is_correct_guess = result.is_solved();
    debug!(bulls = result.bulls, cows = result.cows, guesses_remaining, "Feedback computed");

    Ok(FeedbackResponse {
        feedback: FeedbackStyle::Versus.message(result),
        guesses_remaining,
        is_correct_guess,
        has_lost: guesses_remaining == 0 && !is_correct_guess,
    })
}

/// JSON schemas for the request and response, keyed `request` and
/// `response`.
pub fn feedback_schema() -> serde_json::Value {
    serde_json::json!({
        "request": schemars::schema_for!(FeedbackRequest),
        "response": schemars::schema_for!(FeedbackResponse),
    })
}
