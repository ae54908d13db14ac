//! Lobby system: multi-screen TUI with a main menu and the two game modes.

mod controller;
mod input;
mod screen;
mod screens;
mod settings;

pub use controller::LobbyController;
pub use input::{CodeEntry, EntryAction};
pub use screen::{Screen, ScreenTransition};
pub use screens::{DuelScreen, MainMenuScreen, SoloScreen};
pub use settings::LobbySettings;
