// Semantic actions produced by interpreting key presses

use crate::engine::audio::{notes, Tone};

/// Click played when a digit is accepted
pub const DIGIT_TONE: Tone = Tone::new(notes::A4, 50);

/// Click played when the answer is cleared, lower than the digit click
pub const CLEAR_TONE: Tone = Tone::new(notes::A3, 50);

/// Click played when an answer is submitted
pub const SUBMIT_TONE: Tone = Tone::new(notes::E5, 50);

/// What a single key press means for the answer being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Append this digit (0-9)
    Digit(u8),
    /// Evaluate the typed answer
    Submit,
    /// Submit pressed with nothing typed
    SubmitEmpty,
    /// Erase the typed answer
    Clear,
    /// Unmapped key, or a digit that does not fit
    Ignored,
}

impl KeyAction {
    /// Confirmation click for this action, if any
    pub fn confirmation_tone(&self) -> Option<Tone> {
        match self {
            Self::Digit(_) => Some(DIGIT_TONE),
            Self::Clear => Some(CLEAR_TONE),
            Self::Submit => Some(SUBMIT_TONE),
            Self::SubmitEmpty | Self::Ignored => None,
        }
    }

    /// Whether the press was acted on and needs the debounce settle time
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
