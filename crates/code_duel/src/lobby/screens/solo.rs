//! Single-player screen against a scripted opponent.

use code_duel_core::{AnySolo, FeedbackStyle, Rules, SoloEvent};
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
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

/// State for the solo screen.
#[derive(Debug)]
pub struct SoloScreen {
    game: AnySolo,
    entry: CodeEntry,
    status: String,
    rng: StdRng,
}

impl SoloScreen {
    /// Starts a game against a secret drawn from `rng`.
    #[instrument(skip(rng))]
    pub fn new(rules: Rules, style: FeedbackStyle, mut rng: StdRng) -> Self {
        Self {
            game: AnySolo::random(rules, style, &mut rng),
            entry: CodeEntry::new(),
            status: opening_prompt(rules.max_guesses),
            rng,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &AnySolo {
        &self.game
    }

    /// Returns the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    #[instrument(skip(self, input))]
    fn submit(&mut self, input: &str) {
        match self.game.submit(input) {
            Ok(SoloEvent::Scored(record)) => {
                debug!(score = %record.score(), "Guess scored");
                let remaining = self.game.guesses_remaining();
                self.status = format!(
                    "{}: {} {} {} left.",
                    record.guess(),
                    record.feedback(),
                    remaining,
                    guesses_noun(remaining)
                );
            }
            Ok(SoloEvent::Finished { outcome, .. }) => {
                info!(outcome = %outcome, "Solo game finished");
                if let AnySolo::Finished(game) = &self.game {
                    self.status = format!("{} {}", outcome, game.summary());
                }
            }
            Err(e) => {
                warn!(error = %e, "Input rejected");
                self.status = e.to_string();
            }
        }
    }

    #[instrument(skip(self))]
    fn new_game(&mut self) {
        self.game.new_game(&mut self.rng);
        self.entry.clear();
        self.status = opening_prompt(self.game.guesses_remaining());
    }
}

fn opening_prompt(guesses: u8) -> String {
    format!(
        "The opponent picked a secret code. You have {} {}.",
        guesses,
        guesses_noun(guesses)
    )
}

fn guesses_noun(count: u8) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

impl Screen for SoloScreen {
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

        let title = Paragraph::new("Code Duel - Single Player")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let banner = match self.game.revealed_secret() {
            Some(secret) => format!("The code was {}", secret),
            None => format!("Guesses remaining: {}", self.game.guesses_remaining()),
        };
        let banner = Paragraph::new(banner)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[1]);

        let entry = Paragraph::new(self.entry.display())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Your guess"));
        frame.render_widget(entry, chunks[2]);

        frame.render_widget(
            history_list("Your guesses", Some(self.game.history())),
            chunks[3],
        );

        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[4]);

        let help_text = if self.game.is_over() {
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

        if self.game.is_over() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use code_duel_core::SoloInProgress;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(max_guesses: u8) -> SoloScreen {
        let rules = Rules::new(10, max_guesses).unwrap();
        SoloScreen::new(rules, FeedbackStyle::Versus, StdRng::seed_from_u64(42))
    }

    fn screen_with_secret(max_guesses: u8, secret: &str) -> SoloScreen {
        let rules = Rules::new(10, max_guesses).unwrap();
        SoloScreen {
            game: AnySolo::Playing(SoloInProgress::new(rules, secret.parse().unwrap())),
            entry: CodeEntry::new(),
            status: opening_prompt(max_guesses),
            rng: StdRng::seed_from_u64(42),
        }
    }

    fn type_code(screen: &mut SoloScreen, code: &str) {
        for c in code.chars() {
            screen.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        screen.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    fn rendered(screen: &SoloScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_invalid_guess_keeps_budget() {
        let mut screen = screen(10);
        type_code(&mut screen, "1");
        assert_eq!(screen.game().guesses_remaining(), 10);
        assert!(screen.status().starts_with("Invalid input"));
    }

    #[test]
    fn test_one_guess_game_ends_and_reveals() {
        let mut screen = screen(1);
        assert!(rendered(&screen).contains("Guesses remaining: 1"));

        type_code(&mut screen, "012");
        assert!(screen.game().is_over());
        let secret = screen.game().revealed_secret().copied().unwrap();
        assert!(rendered(&screen).contains(&format!("The code was {}", secret)));

        screen.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(!screen.game().is_over());
        assert_eq!(screen.game().guesses_remaining(), 1);
    }

    #[test]
    fn test_miss_reports_remaining() {
        let mut screen = screen_with_secret(10, "123");
        type_code(&mut screen, "012");
        assert!(!screen.game().is_over());
        assert_eq!(screen.game().guesses_remaining(), 9);
        assert_eq!(
            screen.status(),
            "012: You have 2 correct digits, with 0 in the correct position. 9 guesses left."
        );
    }

    #[test]
    fn test_last_guess_is_singular() {
        let mut screen = screen_with_secret(2, "123");
        assert_eq!(
            screen.status(),
            "The opponent picked a secret code. You have 2 guesses."
        );
        type_code(&mut screen, "456");
        assert!(screen.status().ends_with("1 guess left."));
    }

    #[test]
    fn test_win_status_reveals_secret() {
        let mut screen = screen_with_secret(10, "123");
        type_code(&mut screen, "123");
        assert_eq!(
            screen.status(),
            "You Win! You cracked the code (123) in 1 guess."
        );
        assert!(rendered(&screen).contains("The code was 123"));
    }
}
