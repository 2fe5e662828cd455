// RGB indicator LED interface and the idle breathing curve

use std::time::Duration;

use crate::core::math::{clamp, lerp};

/// Ticks for one full breathing cycle
pub const BREATH_PERIOD_TICKS: u64 = 200;

/// Peak brightness of the breathing effect
pub const BREATH_MAX: u8 = 64;

/// Color channel of the indicator LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// PWM-driven indicator LED
pub trait Indicator {
    /// Set one channel's brightness (0 = off)
    fn set_brightness(&mut self, channel: Channel, level: u8);

    /// Flash a channel on and off `times` times, leaving it off
    fn blink(&mut self, channel: Channel, times: u32, interval: Duration);

    /// Switch every channel off
    fn off(&mut self) {
        for channel in Channel::ALL {
            self.set_brightness(channel, 0);
        }
    }
}

/// Breathing brightness for the given loop tick (triangle wave)
pub fn breath_level(tick: u64) -> u8 {
    let phase = (tick % BREATH_PERIOD_TICKS) as f32 / BREATH_PERIOD_TICKS as f32;
    let wave = 1.0 - (2.0 * phase - 1.0).abs();
    let level = lerp(0.0, f32::from(BREATH_MAX), wave).round();
    clamp(level, 0.0, f32::from(BREATH_MAX)) as u8
}
