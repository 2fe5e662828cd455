// Drill tuning parameters
//
// Two presets cover the shipped variants of the device: single-digit
// operands with a slow keypad settle, and three-digit operands with a fast
// one.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::engine::game_loop::DEFAULT_TICK_INTERVAL;
use crate::engine::input::buffer::MAX_DIGITS;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Empty operand range: {min}..={max}")]
    EmptyOperandRange { min: u32, max: u32 },

    #[error("Sum of operands up to {max} does not fit in {digits} digits")]
    AnswerTooLong { max: u32, digits: usize },

    #[error("Tick interval must be non-zero")]
    ZeroTickInterval,

    #[error("Typing offset {typing} must sit above idle offset {idle}")]
    InvertedOffsets { idle: f32, typing: f32 },
}

/// Tunable parameters of the drill
#[derive(Debug, Clone, PartialEq)]
pub struct DrillConfig {
    /// Smallest operand drawn
    pub operand_min: u32,
    /// Largest operand drawn
    pub operand_max: u32,
    /// Settle time after an accepted key press
    pub debounce: Duration,
    /// Delay between loop iterations
    pub tick_interval: Duration,
    /// Question text row while nothing is typed (pixels)
    pub idle_offset: f32,
    /// Question text row while typing (pixels)
    pub typing_offset: f32,
    /// Maximum offset change per tick (pixels)
    pub offset_step: f32,
    /// Ticks the "type an answer" prompt stays up
    pub prompt_ticks: u32,
}

impl DrillConfig {
    /// Operands 0-9, 30 ms key settle
    pub fn single_digit() -> Self {
        Self {
            operand_min: 0,
            operand_max: 9,
            debounce: Duration::from_millis(30),
            tick_interval: DEFAULT_TICK_INTERVAL,
            idle_offset: 28.0,
            typing_offset: 16.0,
            offset_step: 0.5,
            prompt_ticks: 100,
        }
    }

    /// Operands 0-999, 6 ms key settle
    pub fn three_digit() -> Self {
        Self {
            operand_max: 999,
            debounce: Duration::from_millis(6),
            ..Self::single_digit()
        }
    }

    pub fn operand_range(&self) -> RangeInclusive<u32> {
        self.operand_min..=self.operand_max
    }

    /// Check the parameters are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operand_min > self.operand_max {
            return Err(ConfigError::EmptyOperandRange {
                min: self.operand_min,
                max: self.operand_max,
            });
        }

        let largest_answer = u64::from(self.operand_max) * 2;
        if largest_answer.to_string().len() > MAX_DIGITS {
            return Err(ConfigError::AnswerTooLong {
                max: self.operand_max,
                digits: MAX_DIGITS,
            });
        }

        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        // Smaller offsets are higher on screen
        if self.typing_offset > self.idle_offset {
            return Err(ConfigError::InvertedOffsets {
                idle: self.idle_offset,
                typing: self.typing_offset,
            });
        }

        Ok(())
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self::single_digit()
    }
}
