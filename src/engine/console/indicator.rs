// Indicator LED reported through the logger

use std::time::Duration;

use log::{debug, trace};

use crate::engine::indicator::{Channel, Indicator};

/// Tracks channel levels and logs changes
#[derive(Debug, Default)]
pub struct ConsoleIndicator {
    levels: [u8; 3],
}

impl ConsoleIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current brightness of a channel
    pub fn level(&self, channel: Channel) -> u8 {
        self.levels[Self::index(channel)]
    }

    fn index(channel: Channel) -> usize {
        match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl Indicator for ConsoleIndicator {
    fn set_brightness(&mut self, channel: Channel, level: u8) {
        let slot = &mut self.levels[Self::index(channel)];
        if *slot != level {
            trace!("LED {:?} -> {}", channel, level);
            *slot = level;
        }
    }

    fn blink(&mut self, channel: Channel, times: u32, interval: Duration) {
        debug!("LED {:?} blinking {} times", channel, times);
        for _ in 0..times {
            self.set_brightness(channel, u8::MAX);
            std::thread::sleep(interval);
            self.set_brightness(channel, 0);
            std::thread::sleep(interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_tracked_per_channel() {
        let mut led = ConsoleIndicator::new();
        led.set_brightness(Channel::Green, 200);
        assert_eq!(led.level(Channel::Green), 200);
        assert_eq!(led.level(Channel::Red), 0);
    }

    #[test]
    fn test_blink_leaves_channel_off() {
        let mut led = ConsoleIndicator::new();
        led.blink(Channel::Red, 2, Duration::from_millis(1));
        assert_eq!(led.level(Channel::Red), 0);
    }

    #[test]
    fn test_off_clears_all_channels() {
        let mut led = ConsoleIndicator::new();
        for channel in Channel::ALL {
            led.set_brightness(channel, 90);
        }
        led.off();
        for channel in Channel::ALL {
            assert_eq!(led.level(channel), 0);
        }
    }
}
