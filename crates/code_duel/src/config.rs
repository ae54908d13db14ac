//! Application configuration loaded from `code_duel.toml`.

use std::path::{Path, PathBuf};

use code_duel_core::{FeedbackStyle, Rules};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "code_duel.toml";

/// Default log file for interactive sessions.
pub const DEFAULT_LOG_FILE: &str = "code_duel.log";

/// Settings for a code_duel session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Turn and guess limits.
    rules: Rules,

    /// Feedback wording for every game. When unset, duels use the
    /// positional wording and solo games the digit-count wording.
    feedback_style: Option<FeedbackStyle>,

    /// Where interactive sessions write their logs.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            feedback_style: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .rules
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid rules: {}", e)))?;

        info!(
            max_turns = config.rules.max_turns,
            max_guesses = config.rules.max_guesses,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line limits on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        max_turns: Option<u8>,
        max_guesses: Option<u8>,
    ) -> Result<Self, ConfigError> {
        if let Some(turns) = max_turns {
            self.rules.max_turns = turns;
        }
        if let Some(guesses) = max_guesses {
            self.rules.max_guesses = guesses;
        }
        self.rules
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid rules: {}", e)))?;
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
