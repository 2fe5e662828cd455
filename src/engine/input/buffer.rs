// Bounded buffer for the digits of a typed answer

use std::fmt;

/// Maximum number of digits an answer may hold
pub const MAX_DIGITS: usize = 9;

/// Digits typed so far for the current answer
///
/// Always empty or a valid non-negative integer literal of at most
/// `MAX_DIGITS` digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerBuffer {
    digits: Vec<u8>,
}

impl AnswerBuffer {
    /// Create an empty answer buffer
    pub fn new() -> Self {
        Self {
            digits: Vec::with_capacity(MAX_DIGITS),
        }
    }

    /// Append a digit (0-9). No-op when full or when `digit` is not a digit.
    pub fn append(&mut self, digit: u8) {
        if digit <= 9 && !self.is_full() {
            self.digits.push(b'0' + digit);
        }
    }

    /// Drop every typed digit
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Value of the typed digits, 0 when empty
    pub fn as_integer(&self) -> u32 {
        self.digits
            .iter()
            .fold(0, |acc, &d| acc * 10 + u32::from(d - b'0'))
    }

    /// Typed digits as text
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever pushed
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.digits.len() >= MAX_DIGITS
    }
}

impl fmt::Display for AnswerBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
