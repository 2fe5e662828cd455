// Engine modules: peripherals, input, loop pacing

pub mod audio;
pub mod clock;
pub mod console;
pub mod display;
pub mod game_loop;
pub mod indicator;
pub mod input;

#[cfg(test)]
pub mod recorder;

use audio::Buzzer;
use clock::Clock;
use display::Display;
use indicator::Indicator;
use input::KeyScanner;

/// Peripheral driver errors
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Keypad unavailable: {0}")]
    Keypad(#[source] std::io::Error),

    #[error("Display output failed: {0}")]
    Display(#[source] std::io::Error),
}

/// Every peripheral the game drives, owned by the controller
pub struct Peripherals {
    pub keypad: Box<dyn KeyScanner>,
    pub display: Box<dyn Display>,
    pub buzzer: Box<dyn Buzzer>,
    pub indicator: Box<dyn Indicator>,
    pub clock: Box<dyn Clock>,
}
