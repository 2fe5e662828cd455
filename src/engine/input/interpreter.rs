// Maps key presses to answer-entry actions

use super::action::KeyAction;
use super::buffer::AnswerBuffer;
use super::keypad::{KeyPosition, CLEAR_KEY, SUBMIT_KEY};

/// Interpret a key press against the current answer.
///
/// Pure: the caller applies the action and handles debounce.
pub fn interpret(key: KeyPosition, buffer: &AnswerBuffer) -> KeyAction {
    let Some(legend) = key.legend() else {
        return KeyAction::Ignored;
    };

    match legend {
        '0'..='9' if buffer.is_full() => KeyAction::Ignored,
        '0'..='9' => KeyAction::Digit(legend as u8 - b'0'),
        SUBMIT_KEY if buffer.is_empty() => KeyAction::SubmitEmpty,
        SUBMIT_KEY => KeyAction::Submit,
        CLEAR_KEY => KeyAction::Clear,
        _ => KeyAction::Ignored,
    }
}
