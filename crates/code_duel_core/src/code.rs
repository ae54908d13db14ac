//! Secret codes and guesses.
//!
//! A code is exactly three decimal digits with no digit repeated. Secrets
//! and guesses share the same shape, so both are a [`Code`]. Parsing is the
//! only way to build one from user input, which means every code that
//! reaches the scorer or a state machine has already been validated.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of digits in every code.
pub const CODE_LENGTH: usize = 3;

/// Reasons a string is rejected as a code.
///
/// Checked in order: length, characters, uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CodeError {
    /// Input did not have exactly three characters.
    #[display("Please enter a 3-digit code (got {} characters)", _0)]
    InvalidLength(usize),

    /// Input contained something other than a decimal digit.
    #[display("'{}' is not a digit", _0)]
    InvalidCharacter(char),

    /// A digit appeared more than once.
    #[display("Digits must be unique ('{}' is repeated)", _0)]
    RepeatedDigit(char),
}

impl std::error::Error for CodeError {}

/// Three distinct digits, used both as a secret and as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code {
    digits: [u8; CODE_LENGTH],
}

impl Code {
    /// Builds a code from digits already known to be in range and distinct.
    pub(crate) fn from_digits_unchecked(digits: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(digits.iter().all(|d| *d <= 9), "digit out of range");
        debug_assert!(first_repeat(&digits).is_none(), "digits must be distinct");
        Self { digits }
    }

    /// Returns the digits in position order.
    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        self.digits
    }

    /// Returns the digit at `position`, if in range.
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }

    /// Checks whether the code contains `digit` anywhere.
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

/// Returns the first digit that appears twice.
fn first_repeat(digits: &[u8]) -> Option<u8> {
    digits
        .iter()
        .enumerate()
        .find(|&(i, d)| digits[..i].contains(d))
        .map(|(_, d)| *d)
}

fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

impl FromStr for Code {
    type Err = CodeError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CODE_LENGTH {
            debug!(len = chars.len(), "Rejected code with wrong length");
            return Err(CodeError::InvalidLength(chars.len()));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, c) in digits.iter_mut().zip(&chars) {
            let value = c.to_digit(10).ok_or(CodeError::InvalidCharacter(*c))?;
            *slot = value as u8;
        }

        if let Some(repeated) = first_repeat(&digits) {
            debug!(repeated, "Rejected code with repeated digit");
            return Err(CodeError::RepeatedDigit(digit_char(repeated)));
        }

        Ok(Self { digits })
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits {
            write!(f, "{}", digit_char(digit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_code() {
        let code: Code = "307".parse().unwrap();
        assert_eq!(code.digits(), [3, 0, 7]);
        assert_eq!(code.to_string(), "307");
    }

    #[test]
    fn test_leading_zero_kept() {
        let code: Code = "012".parse().unwrap();
        assert_eq!(code.to_string(), "012");
        assert_eq!(code.digit(0), Some(0));
    }

    #[test]
    fn test_padding_counts_toward_length() {
        assert_eq!(" 123".parse::<Code>(), Err(CodeError::InvalidLength(4)));
        assert_eq!("123\n".parse::<Code>(), Err(CodeError::InvalidLength(4)));
        assert_eq!(" 12".parse::<Code>(), Err(CodeError::InvalidCharacter(' ')));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!("12".parse::<Code>(), Err(CodeError::InvalidLength(2)));
        assert_eq!("1234".parse::<Code>(), Err(CodeError::InvalidLength(4)));
        assert_eq!("".parse::<Code>(), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn test_non_digit_rejected() {
        assert_eq!("1a3".parse::<Code>(), Err(CodeError::InvalidCharacter('a')));
        assert_eq!("-12".parse::<Code>(), Err(CodeError::InvalidCharacter('-')));
    }

    #[test]
    fn test_repeated_digit_rejected() {
        assert_eq!("112".parse::<Code>(), Err(CodeError::RepeatedDigit('1')));
        assert_eq!("909".parse::<Code>(), Err(CodeError::RepeatedDigit('9')));
    }

    #[test]
    fn test_length_checked_before_uniqueness() {
        assert_eq!("1111".parse::<Code>(), Err(CodeError::InvalidLength(4)));
    }

    #[test]
    fn test_serde_as_string() {
        let code: Code = "482".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"482\"");
        assert!(serde_json::from_str::<Code>("\"448\"").is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CodeError::RepeatedDigit('4').to_string(),
            "Digits must be unique ('4' is repeated)"
        );
        assert!(CodeError::InvalidLength(2).to_string().contains("3-digit"));
    }
}
