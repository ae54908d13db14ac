//! Tests for loading `code_duel.toml` from disk.

use std::io::Write;
use std::path::PathBuf;

use code_duel::{AppConfig, DEFAULT_LOG_FILE, LobbySettings};
use code_duel_core::{FeedbackStyle, MAX_GUESSES, MAX_TURNS};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(dir.path().join("code_duel.toml"))
        .expect("Defaults should load");
    assert_eq!(config.rules().max_turns, MAX_TURNS);
    assert_eq!(config.rules().max_guesses, MAX_GUESSES);
    assert_eq!(config.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn test_full_file_loads() {
    let file = write_config(
        r#"
feedback_style = "versus"
log_file = "/tmp/duel.log"

[rules]
max_turns = 6
max_guesses = 4
"#,
    );
    let config = AppConfig::load_or_default(file.path()).expect("Config should load");
    assert_eq!(config.rules().max_turns, 6);
    assert_eq!(config.rules().max_guesses, 4);
    assert_eq!(config.feedback_style(), &Some(FeedbackStyle::Versus));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/duel.log"));

    let settings = LobbySettings::from_config(&config, None);
    assert_eq!(settings.duel_style, FeedbackStyle::Versus);
}

#[test]
fn test_zero_turns_rejected() {
    let file = write_config("[rules]\nmax_turns = 0\n");
    let err = AppConfig::from_file(file.path()).expect_err("Zero turns should fail");
    assert!(err.message.contains("max_turns"));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_config("[rules\nmax_turns = 3\n");
    let err = AppConfig::from_file(file.path()).expect_err("Bad TOML should fail");
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("[rules]\nmax_turns = 6\n");
    let config = AppConfig::load_or_default(file.path())
        .and_then(|c| c.with_overrides(Some(2), Some(3)))
        .expect("Overrides should apply");
    assert_eq!(config.rules().max_turns, 2);
    assert_eq!(config.rules().max_guesses, 3);
}
