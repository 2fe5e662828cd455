// Buzzer reported through the logger

use log::info;

use crate::engine::audio::{Buzzer, Tone};

/// Logs each tone and blocks for its duration
#[derive(Debug, Default)]
pub struct ConsoleBuzzer;

impl Buzzer for ConsoleBuzzer {
    fn play_tone(&mut self, tone: Tone) {
        info!(
            "Tone {} Hz for {} ms",
            tone.frequency_hz,
            tone.duration.as_millis()
        );
        std::thread::sleep(tone.duration);
    }
}
