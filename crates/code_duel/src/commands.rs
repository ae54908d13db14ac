//! One-shot commands that print a result and exit.

use anyhow::{Context, Result};
use code_duel_core::{
    Code, FeedbackRequest, FeedbackStyle, evaluate_feedback, feedback_schema, score,
};
use tracing::{info, instrument};

/// Scores `guess` against `secret` and describes the result.
///
/// Surrounding whitespace from the shell is dropped before parsing.
///
/// # Errors
///
/// Fails if either argument is not a valid code.
#[instrument]
pub fn score_report(secret: &str, guess: &str, style: FeedbackStyle) -> Result<String> {
    let secret: Code = secret.trim().parse().context("Invalid secret")?;
    let guess: Code = guess.trim().parse().context("Invalid guess")?;
    let result = score(&secret, &guess);
    info!(bulls = result.bulls, cows = result.cows, "Scored");
    Ok(format!(
        "bulls: {}\ncows: {}\n{}",
        result.bulls,
        result.cows,
        style.message(result)
    ))
}

/// Evaluates a JSON [`FeedbackRequest`] and returns the response as JSON.
///
/// # Errors
///
/// Fails if the JSON is malformed or either code is invalid.
#[instrument(skip(json))]
pub fn feedback_report(json: &str) -> Result<String> {
    let request: FeedbackRequest =
        serde_json::from_str(json).context("Failed to parse feedback request")?;
    let response = evaluate_feedback(&request).context("Failed to evaluate feedback")?;
    serde_json::to_string_pretty(&response).context("Failed to serialize feedback response")
}

/// Returns the request and response JSON schemas.
///
/// # Errors
///
/// Fails only if the schema cannot be serialized.
#[instrument]
pub fn schema_report() -> Result<String> {
    serde_json::to_string_pretty(&feedback_schema()).context("Failed to serialize schema")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_report() {
        let report = score_report("123", "213", FeedbackStyle::Duel).unwrap();
        assert_eq!(report, "bulls: 1\ncows: 2\n1 correct position, 2 wrong position.");
    }

    #[test]
    fn test_score_report_rejects_bad_guess() {
        let err = score_report("123", "112", FeedbackStyle::Duel).unwrap_err();
        assert!(err.to_string().contains("Invalid guess"));
    }

    #[test]
    fn test_score_report_trims_arguments() {
        let report = score_report(" 123", "213\n", FeedbackStyle::Duel).unwrap();
        assert!(report.starts_with("bulls: 1\ncows: 2"));
    }

    #[test]
    fn test_feedback_report_rejects_padded_secret() {
        let err = feedback_report(r#"{"secretCode":" 123","guess":"213","guessesRemaining":3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to evaluate feedback"));
    }

    #[test]
    fn test_feedback_report() {
        let out =
            feedback_report(r#"{"secretCode":"123","guess":"456","guessesRemaining":1}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["hasLost"], true);
        assert_eq!(value["guessesRemaining"], 0);
        assert_eq!(value["feedback"], "No digits are correct.");
    }

    #[test]
    fn test_feedback_report_rejects_missing_field() {
        assert!(feedback_report(r#"{"secretCode":"123"}"#).is_err());
    }

    #[test]
    fn test_schema_report_is_json() {
        let out = schema_report().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("request").is_some());
    }
}
