//! Lobby controller: the state machine driving the multi-screen TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::lobby::screen::{Screen, ScreenTransition};
use crate::lobby::screens::{DuelScreen, MainMenuScreen, SoloScreen};
use crate::lobby::settings::LobbySettings;

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    Duel(DuelScreen),
    Solo(SoloScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::Duel(s) => s,
            ActiveScreen::Solo(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::Duel(s) => s,
            ActiveScreen::Solo(s) => s,
        }
    }
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct LobbyController {
    settings: LobbySettings,
    #[getter(skip)]
    rng: StdRng,
}

impl LobbyController {
    /// Creates a controller. A seed in `settings` makes every opponent
    /// secret of the session reproducible.
    #[instrument]
    pub fn new(settings: LobbySettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!("Creating LobbyController");
        Self { settings, rng }
    }

    /// Runs the event loop until the user quits.
    ///
    /// `start` picks the first screen; anything other than a game mode
    /// opens the main menu.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        start: ScreenTransition,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        let mut screen = match self.apply_transition(start, None) {
            Some(screen) => screen,
            None => return Ok(()),
        };

        loop {
            terminal.draw(|f| screen.as_screen().render(f))?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = if is_interrupt(&key) {
                    ScreenTransition::Quit
                } else {
                    screen.as_screen_mut().handle_key(key)
                };

                screen = match self.apply_transition(transition, Some(screen)) {
                    Some(next) => next,
                    None => {
                        info!("Lobby quitting");
                        return Ok(());
                    }
                };
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: Option<ActiveScreen>,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match (transition, current) {
            (ScreenTransition::Stay, Some(current)) => Some(current),

            (ScreenTransition::Stay, None) | (ScreenTransition::GoToMenu, _) => {
                info!("Navigating to MainMenu");
                Some(ActiveScreen::MainMenu(MainMenuScreen::new()))
            }

            (ScreenTransition::GoToDuel, _) => {
                info!(max_turns = self.settings.rules.max_turns, "Navigating to Duel");
                Some(ActiveScreen::Duel(DuelScreen::new(
                    self.settings.rules,
                    self.settings.duel_style,
                )))
            }

            (ScreenTransition::GoToSolo, _) => {
                info!(
                    max_guesses = self.settings.rules.max_guesses,
                    "Navigating to Solo"
                );
                let rng = StdRng::seed_from_u64(self.rng.random());
                Some(ActiveScreen::Solo(SoloScreen::new(
                    self.settings.rules,
                    self.settings.solo_style,
                    rng,
                )))
            }

            (ScreenTransition::Quit, _) => None,
        }
    }
}

/// Ctrl-C arrives as a key event in raw mode.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
