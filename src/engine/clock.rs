// Blocking delays

use std::time::Duration;

/// Source of blocking delays
///
/// Every wait in the game loop goes through this so tests can substitute a
/// virtual clock.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock delays backed by `std::thread::sleep`
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_system_clock_sleeps() {
        let mut clock = SystemClock;
        let start = Instant::now();
        clock.sleep(Duration::from_millis(10));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_zero_sleep_returns() {
        let mut clock = SystemClock;
        clock.sleep(Duration::ZERO);
    }
}
