//! Terminal session setup and teardown for the TUI.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, instrument, warn};

use crate::lobby::{LobbyController, ScreenTransition};

/// Runs the lobby in raw mode on the alternate screen.
///
/// The terminal is restored whether setup, the event loop, or neither
/// failed.
#[instrument(skip(controller))]
pub fn run_tui(controller: &mut LobbyController, start: ScreenTransition) -> Result<()> {
    enable_raw_mode()?;
    run_restoring(|| run_in_terminal(controller, start), restore_terminal)
}

/// Runs `session`, then always runs `restore`.
///
/// A session error wins over a restore error; the restore error is still
/// logged.
pub fn run_restoring<T>(
    session: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = session();
    let restored = restore();
    match (res, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), restored) => {
            error!(error = %e, "Terminal session failed");
            if let Err(restore_err) = restored {
                warn!(error = %restore_err, "Failed to restore terminal");
            }
            Err(e)
        }
    }
}

fn run_in_terminal(controller: &mut LobbyController, start: ScreenTransition) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    controller.run(&mut terminal, start)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
