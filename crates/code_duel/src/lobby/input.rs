//! Digit entry buffer for codes typed at the keyboard.

use code_duel_core::CODE_LENGTH;
use crossterm::event::KeyCode;

/// What a key did to a [`CodeEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// The buffer changed (or the key was absorbed).
    Edited,
    /// Enter was pressed; carries the buffer, which is now empty.
    Submit(String),
    /// The key is not for the entry box.
    Ignored,
}

/// Holds up to three typed digits, optionally masked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntry {
    buffer: String,
    masked: bool,
}

impl CodeEntry {
    /// Creates an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides typed digits behind `*` when set.
    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Applies a key press.
    ///
    /// Only digits are accepted and the buffer stops at three. Validation
    /// of the whole code is left to the game.
    pub fn handle_key(&mut self, code: KeyCode) -> EntryAction {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.buffer.len() < CODE_LENGTH {
                    self.buffer.push(c);
                }
                EntryAction::Edited
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                EntryAction::Edited
            }
            KeyCode::Enter => EntryAction::Submit(std::mem::take(&mut self.buffer)),
            _ => EntryAction::Ignored,
        }
    }

    /// Returns the text to draw.
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.buffer.len())
        } else {
            self.buffer.clone()
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> CodeEntry {
        let mut entry = CodeEntry::new();
        for c in keys.chars() {
            entry.handle_key(KeyCode::Char(c));
        }
        entry
    }

    #[test]
    fn test_only_digits_accepted() {
        assert_eq!(typed("1a2-3").display(), "123");
    }

    #[test]
    fn test_caps_at_three() {
        assert_eq!(typed("12345").display(), "123");
    }

    #[test]
    fn test_backspace() {
        let mut entry = typed("12");
        entry.handle_key(KeyCode::Backspace);
        assert_eq!(entry.display(), "1");
        entry.handle_key(KeyCode::Backspace);
        entry.handle_key(KeyCode::Backspace);
        assert_eq!(entry.display(), "");
    }

    #[test]
    fn test_masked_display() {
        let mut entry = typed("98");
        entry.set_masked(true);
        assert_eq!(entry.display(), "**");
    }

    #[test]
    fn test_enter_takes_buffer() {
        let mut entry = typed("45");
        assert_eq!(
            entry.handle_key(KeyCode::Enter),
            EntryAction::Submit("45".to_string())
        );
        assert_eq!(entry.display(), "");
    }

    #[test]
    fn test_letters_ignored() {
        let mut entry = CodeEntry::new();
        assert_eq!(entry.handle_key(KeyCode::Char('n')), EntryAction::Ignored);
        assert_eq!(entry.handle_key(KeyCode::Esc), EntryAction::Ignored);
    }
}
