// Result and power-on feedback sequences
//
// Each sequence is a fixed, blocking series of light, screen and sound
// steps. Nothing runs concurrently and a sequence cannot be interrupted.

use std::time::Duration;

use log::debug;

use crate::engine::audio::{notes, Tone};
use crate::engine::indicator::Channel;
use crate::engine::Peripherals;

pub const CORRECT_TEXT: &str = "Correct! :)";
pub const INCORRECT_TEXT: &str = "Wrong! :(";

/// Ascending major triad played for a right answer
pub const CHIME: [Tone; 3] = [
    Tone::new(notes::C5, 150),
    Tone::new(notes::E5, 150),
    Tone::new(notes::G5, 150),
];

/// Silence between chime notes
pub const CHIME_GAP: Duration = Duration::from_millis(100);

/// Low tone played for a wrong answer
pub const ERROR_TONE: Tone = Tone::new(notes::C4, 500);

pub const ERROR_BLINKS: u32 = 3;
pub const ERROR_BLINK_INTERVAL: Duration = Duration::from_millis(150);

/// How long the result stays on screen
pub const RESULT_DWELL: Duration = Duration::from_millis(2000);

/// Rising jingle played once at power-on
pub const WELCOME_JINGLE: [Tone; 4] = [
    Tone::new(notes::C5, 100),
    Tone::new(notes::E5, 100),
    Tone::new(notes::G5, 100),
    Tone::new(notes::C6, 200),
];

pub const WELCOME_BLINK_INTERVAL: Duration = Duration::from_millis(100);

/// Full brightness used for result colors
const RESULT_LEVEL: u8 = u8::MAX;

/// Text line showing the expected answer
pub fn answer_text(correct_answer: u32) -> String {
    format!("Answer: {}", correct_answer)
}

/// Drives the peripherals through one feedback sequence
pub struct FeedbackSequencer<'a> {
    devices: &'a mut Peripherals,
}

impl<'a> FeedbackSequencer<'a> {
    pub fn new(devices: &'a mut Peripherals) -> Self {
        Self { devices }
    }

    /// Green light, "correct" screen, ascending chime, dwell
    pub fn run_correct(&mut self) {
        debug!("Feedback: correct");
        self.show_color(Channel::Green);

        let display = &mut self.devices.display;
        display.clear();
        display.draw_text_centered(CORRECT_TEXT, 24);
        display.present();

        for (i, tone) in CHIME.iter().enumerate() {
            if i > 0 {
                self.devices.clock.sleep(CHIME_GAP);
            }
            self.devices.buzzer.play_tone(*tone);
        }

        self.finish();
    }

    /// Red light, "wrong" screen with the expected answer, blinks, low tone, dwell
    pub fn run_incorrect(&mut self, correct_answer: u32) {
        debug!("Feedback: incorrect, expected {}", correct_answer);
        self.show_color(Channel::Red);

        let display = &mut self.devices.display;
        display.clear();
        display.draw_text_centered(INCORRECT_TEXT, 16);
        display.draw_text_centered(&answer_text(correct_answer), 32);
        display.present();

        self.devices
            .indicator
            .blink(Channel::Red, ERROR_BLINKS, ERROR_BLINK_INTERVAL);
        self.devices.buzzer.play_tone(ERROR_TONE);

        self.finish();
    }

    /// Single red blink and the welcome jingle
    pub fn run_power_on(&mut self) {
        self.devices
            .indicator
            .blink(Channel::Red, 1, WELCOME_BLINK_INTERVAL);
        for tone in WELCOME_JINGLE {
            self.devices.buzzer.play_tone(tone);
        }
    }

    fn show_color(&mut self, channel: Channel) {
        let indicator = &mut self.devices.indicator;
        indicator.off();
        indicator.set_brightness(channel, RESULT_LEVEL);
    }

    fn finish(&mut self) {
        self.devices.clock.sleep(RESULT_DWELL);
        self.devices.indicator.off();
    }
}
