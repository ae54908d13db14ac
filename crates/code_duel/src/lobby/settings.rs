//! Lobby settings derived from the application config.

use code_duel_core::{FeedbackStyle, Rules};
use tracing::instrument;

use crate::AppConfig;

/// Settings every game started from the lobby uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LobbySettings {
    /// Turn and guess limits.
    pub rules: Rules,
    /// Feedback wording in two-player duels.
    pub duel_style: FeedbackStyle,
    /// Feedback wording against the scripted opponent.
    pub solo_style: FeedbackStyle,
    /// Seed for opponent secrets; random when unset.
    pub seed: Option<u64>,
}

impl Default for LobbySettings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            duel_style: FeedbackStyle::Duel,
            solo_style: FeedbackStyle::Versus,
            seed: None,
        }
    }
}

impl LobbySettings {
    /// Builds settings from the loaded config and an optional seed.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig, seed: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            rules: *config.rules(),
            duel_style: config.feedback_style().unwrap_or(defaults.duel_style),
            solo_style: config.feedback_style().unwrap_or(defaults.solo_style),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_differ_by_mode() {
        let settings = LobbySettings::from_config(&AppConfig::default(), Some(5));
        assert_eq!(settings.duel_style, FeedbackStyle::Duel);
        assert_eq!(settings.solo_style, FeedbackStyle::Versus);
        assert_eq!(settings.seed, Some(5));
    }

    #[test]
    fn test_config_style_applies_to_both_modes() {
        let config: AppConfig = toml::from_str("feedback_style = \"duel\"\n").unwrap();
        let settings = LobbySettings::from_config(&config, None);
        assert_eq!(settings.solo_style, FeedbackStyle::Duel);
    }
}
