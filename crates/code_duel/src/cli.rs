//! Command-line interface for code_duel.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use code_duel_core::FeedbackStyle;

/// Code Duel - crack your opponent's 3-digit code
#[derive(Parser, Debug)]
#[command(name = "code_duel")]
#[command(about = "Mastermind-style code-breaking duel in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (missing file means defaults)
    #[arg(long, global = true, default_value = "code_duel.toml")]
    pub config: PathBuf,

    /// Turns per player in a duel
    #[arg(long, global = true)]
    pub max_turns: Option<u8>,

    /// Guesses against the scripted opponent
    #[arg(long, global = true)]
    pub max_guesses: Option<u8>,

    /// Seed for the opponent's secret
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to the menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the main menu
    Menu,

    /// Play a two-player duel on one terminal
    Duel,

    /// Play against a scripted opponent
    Solo,

    /// Score a guess against a secret and print the feedback
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,

        /// Feedback wording (duel or versus)
        #[arg(long, default_value = "duel")]
        style: FeedbackStyle,
    },

    /// Evaluate a JSON feedback request (reads stdin when omitted)
    Feedback {
        /// Request as JSON: {"secretCode", "guess", "guessesRemaining"}
        json: Option<String>,

        /// Print the request and response JSON schemas instead
        #[arg(long)]
        schema: bool,
    },
}

impl Command {
    /// Returns true for commands that take over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Command::Menu | Command::Duel | Command::Solo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["code_duel"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("code_duel.toml"));
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["code_duel", "solo", "--seed", "7", "--max-guesses", "3"])
                .unwrap();
        assert_eq!(cli.command, Some(Command::Solo));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.max_guesses, Some(3));
    }

    #[test]
    fn test_score_style_parses() {
        let cli = Cli::try_parse_from(["code_duel", "score", "123", "213", "--style", "versus"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Score {
                secret: "123".to_string(),
                guess: "213".to_string(),
                style: FeedbackStyle::Versus,
            })
        );
    }

    #[test]
    fn test_bad_style_rejected() {
        assert!(Cli::try_parse_from(["code_duel", "score", "1", "2", "--style", "loud"]).is_err());
    }

    #[test]
    fn test_interactive_commands() {
        assert!(Command::Duel.is_interactive());
        assert!(
            !Command::Feedback {
                json: None,
                schema: true
            }
            .is_interactive()
        );
    }
}
