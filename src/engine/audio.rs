// Buzzer interface and the note table used by the game

use std::time::Duration;

/// A single square-wave tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration: Duration,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// Note frequencies (Hz)
pub mod notes {
    pub const C4: u32 = 261;
    pub const A3: u32 = 220;
    pub const A4: u32 = 440;
    pub const C5: u32 = 523;
    pub const E5: u32 = 659;
    pub const G5: u32 = 784;
    pub const C6: u32 = 1047;
}

/// Piezo buzzer
pub trait Buzzer {
    /// Play `tone`, returning once it has finished
    fn play_tone(&mut self, tone: Tone);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_duration() {
        let tone = Tone::new(notes::A4, 50);
        assert_eq!(tone.frequency_hz, 440);
        assert_eq!(tone.duration, Duration::from_millis(50));
    }
}
