/// Main loop pacing
///
/// The drill runs a cooperative polling loop: one scan, one update and one
/// render pass per tick, followed by a fixed sleep. The pacer counts ticks so
/// time-based effects (indicator breathing, transient prompts) can be driven
/// from the tick number instead of a wall clock.
use std::time::Duration;

use super::clock::Clock;

/// Default delay between loop iterations
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Loop tick counter and pacing
#[derive(Debug)]
pub struct Pacer {
    /// Delay slept at the end of each tick
    tick_interval: Duration,

    /// Ticks completed since start
    ticks: u64,
}

impl Pacer {
    /// Create a pacer sleeping `tick_interval` per tick
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            ticks: 0,
        }
    }

    /// Finish the current tick: sleep the tick interval and advance the count
    pub fn end_tick(&mut self, clock: &mut dyn Clock) {
        clock.sleep(self.tick_interval);
        self.ticks += 1;
    }

    /// Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Delay slept per tick
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
