//! Screen implementations for the lobby state machine.

mod duel;
mod main_menu;
mod solo;

pub use duel::DuelScreen;
pub use main_menu::MainMenuScreen;
pub use solo::SoloScreen;

use code_duel_core::GuessLog;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Renders a guess history, newest first.
fn history_list<'a>(title: &'a str, log: Option<&GuessLog>) -> List<'a> {
    let items: Vec<ListItem> = log
        .into_iter()
        .flat_map(|log| log.iter())
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", record.guess()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(record.feedback().clone()),
            ]))
        })
        .collect();

    List::new(items).block(Block::default().borders(Borders::ALL).title(title))
}
