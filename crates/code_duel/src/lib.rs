//! Code Duel terminal application.
//!
//! Wires the pure game logic in `code_duel_core` to a command line, a
//! config file, tracing, and a ratatui front end.

#![warn(missing_docs)]

mod cli;
mod commands;
mod config;
mod lobby;
mod logging;
mod terminal;

pub use cli::{Cli, Command};
pub use commands::{feedback_report, schema_report, score_report};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE};
pub use lobby::{
    CodeEntry, DuelScreen, EntryAction, LobbyController, LobbySettings, MainMenuScreen, Screen,
    ScreenTransition, SoloScreen,
};
pub use logging::{init_file_logging, init_stderr_logging};
pub use terminal::{run_restoring, run_tui};
