// Drill logic
//
// This module contains everything above the peripherals:
// - Problem generation and answer checking
// - Result feedback sequences
// - The round state machine and the controller driving it

pub mod config;
pub mod controller;
pub mod evaluator;
pub mod feedback;
pub mod question;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, DrillConfig};
pub use controller::GameController;
pub use question::{Problem, ProblemSource, QuestionGenerator};
pub use state::GameState;
