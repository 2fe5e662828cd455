// Keypad input handling
//
// ## Architecture
//
// - `keypad`: Key matrix legend and the scanner interface
// - `action`: Semantic actions and their confirmation clicks
// - `buffer`: Bounded buffer for the answer being typed
// - `interpreter`: Key press -> action mapping
//
// ## Usage Example
//
// ```rust
// if let Some(key) = keypad.scan() {
//     let action = interpret(key, &buffer);
//     if let KeyAction::Digit(d) = action {
//         buffer.append(d);
//     }
// }
// ```

pub mod action;
pub mod buffer;
pub mod interpreter;
pub mod keypad;

// Re-export commonly used types
pub use action::KeyAction;
pub use buffer::AnswerBuffer;
pub use interpreter::interpret;
pub use keypad::{KeyPosition, KeyScanner};
