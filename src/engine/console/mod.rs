// Host-side peripherals
//
// Stands in for the board drivers when the drill runs on a workstation:
// keys are read from stdin using the keypad legend, the framebuffer is
// printed as text whenever it changes, and tones and lights are reported
// through the logger.

mod buzzer;
mod display;
mod indicator;
mod keypad;

pub use buzzer::ConsoleBuzzer;
pub use display::ConsoleDisplay;
pub use indicator::ConsoleIndicator;
pub use keypad::ConsoleKeypad;

use super::clock::SystemClock;
use super::{DeviceError, Peripherals};

/// Build the full set of console peripherals
pub fn peripherals() -> Result<Peripherals, DeviceError> {
    Ok(Peripherals {
        keypad: Box::new(ConsoleKeypad::spawn(std::io::stdin())?),
        display: Box::new(ConsoleDisplay::new(std::io::stdout())),
        buzzer: Box::new(ConsoleBuzzer),
        indicator: Box::new(ConsoleIndicator::new()),
        clock: Box::new(SystemClock),
    })
}
