//! Code Duel - unified CLI
//!
//! Interactive play in the terminal plus one-shot scoring commands.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use code_duel::{
    AppConfig, Cli, Command, LobbyController, LobbySettings, ScreenTransition, feedback_report,
    init_file_logging, init_stderr_logging, run_tui, schema_report, score_report,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Menu);

    if !command.is_interactive() {
        init_stderr_logging();
    }

    let config = AppConfig::load_or_default(&cli.config)?
        .with_overrides(cli.max_turns, cli.max_guesses)?;

    match command {
        Command::Score {
            secret,
            guess,
            style,
        } => {
            println!("{}", score_report(&secret, &guess, style)?);
            Ok(())
        }
        Command::Feedback { schema: true, .. } => {
            println!("{}", schema_report()?);
            Ok(())
        }
        Command::Feedback { json, .. } => {
            let json = match json {
                Some(json) => json,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read feedback request from stdin")?;
                    buf
                }
            };
            println!("{}", feedback_report(&json)?);
            Ok(())
        }
        Command::Menu => run_interactive(&config, cli.seed, ScreenTransition::GoToMenu),
        Command::Duel => run_interactive(&config, cli.seed, ScreenTransition::GoToDuel),
        Command::Solo => run_interactive(&config, cli.seed, ScreenTransition::GoToSolo),
    }
}

/// Runs the TUI, restoring the terminal even when the loop fails.
#[instrument(skip(config))]
fn run_interactive(config: &AppConfig, seed: Option<u64>, start: ScreenTransition) -> Result<()> {
    init_file_logging(config.log_file())?;
    info!("Starting Code Duel TUI");

    let mut controller = LobbyController::new(LobbySettings::from_config(config, seed));

    run_tui(&mut controller, start)
}
