//! Two-player duel screen: both players share one keyboard.

use code_duel_core::{AnyDuel, DuelEvent, DuelPhase, FeedbackStyle, Rules, Seat};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use super::history_list;
use crate::lobby::input::{CodeEntry, EntryAction};
use crate::lobby::screen::{Screen, ScreenTransition};

/// State for the duel screen.
#[derive(Debug)]
pub struct DuelScreen {
    duel: AnyDuel,
    entry: CodeEntry,
    status: String,
}

impl DuelScreen {
    /// Starts a fresh duel waiting for Player 1's secret.
    #[instrument]
    pub fn new(rules: Rules, style: FeedbackStyle) -> Self {
        let mut screen = Self {
            duel: AnyDuel::new(rules, style),
            entry: CodeEntry::new(),
            status: String::new(),
        };
        screen.reset_prompt();
        screen
    }

    /// Returns the duel being played.
    pub fn duel(&self) -> &AnyDuel {
        &self.duel
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    fn reset_prompt(&mut self) {
        self.entry.set_masked(self.setting_secret());
        self.status = match &self.duel {
            AnyDuel::SettingFirst(_) => secret_prompt(Seat::PlayerOne),
            AnyDuel::SettingSecond(_) => secret_prompt(Seat::PlayerTwo),
            AnyDuel::Playing(game) => guess_prompt(game.to_move()),
            AnyDuel::Over(game) => format!("{} {}", game.outcome(), game.summary()),
        };
    }

    fn setting_secret(&self) -> bool {
        matches!(
            self.duel.phase(),
            DuelPhase::SettingFirst | DuelPhase::SettingSecond
        )
    }

    #[instrument(skip(self, input))]
    fn submit(&mut self, input: &str) {
        match self.duel.submit(input) {
            Ok(DuelEvent::SecretSet(seat)) => {
                info!(seat = %seat, "Secret set");
                self.reset_prompt();
            }
            Ok(DuelEvent::Scored { seat, record }) => {
                debug!(seat = %seat, score = %record.score(), "Guess scored");
                self.entry.set_masked(false);
                self.status = format!(
                    "{} guessed {}: {} {}",
                    seat,
                    record.guess(),
                    record.feedback(),
                    guess_prompt(seat.opponent())
                );
            }
            Ok(DuelEvent::Finished { seat, outcome, .. }) => {
                info!(seat = %seat, outcome = %outcome, "Duel finished");
                self.reset_prompt();
            }
            Err(e) => {
                warn!(error = %e, "Input rejected");
                self.status = e.to_string();
            }
        }
    }

    #[instrument(skip(self))]
    fn new_game(&mut self) {
        self.duel.new_game();
        self.entry.clear();
        self.reset_prompt();
    }
}

fn secret_prompt(seat: Seat) -> String {
    format!("{}, enter your secret code.", seat)
}

fn guess_prompt(seat: Seat) -> String {
    format!("{}'s turn. Make a guess.", seat)
}

impl Screen for DuelScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Code Duel - Two Players")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let banner = match self.duel.phase() {
            DuelPhase::Over => "Game over".to_string(),
            phase => format!(
                "Turn {} of {} | {}",
                self.duel.turn(),
                self.duel.rules().max_turns,
                phase
            ),
        };
        let banner = Paragraph::new(banner)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[1]);

        let entry_title = match (self.duel.phase(), self.duel.active_seat()) {
            (DuelPhase::Over, _) | (_, None) => "Input".to_string(),
            (DuelPhase::Playing, Some(seat)) => format!("{}'s guess", seat),
            (_, Some(seat)) => format!("{}'s secret (hidden)", seat),
        };
        let entry = Paragraph::new(self.entry.display())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title(entry_title));
        frame.render_widget(entry, chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        frame.render_widget(
            history_list("Player 1's guesses", self.duel.history(Seat::PlayerOne)),
            columns[0],
        );
        frame.render_widget(
            history_list("Player 2's guesses", self.duel.history(Seat::PlayerTwo)),
            columns[1],
        );

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[4]);

        let help_text = if self.duel.is_over() {
            "n: New game | q/Esc: Menu"
        } else {
            "0-9: Type | Backspace: Delete | Enter: Submit | Esc: Menu"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if key.code == KeyCode::Esc {
            return ScreenTransition::GoToMenu;
        }

        if self.duel.is_over() {
            return match key.code {
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.new_game();
                    ScreenTransition::Stay
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::GoToMenu,
                _ => ScreenTransition::Stay,
            };
        }

        if let EntryAction::Submit(input) = self.entry.handle_key(key.code) {
            self.submit(&input);
        }
        ScreenTransition::Stay
    }
}
