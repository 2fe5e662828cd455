// Addition problems and their generator

use std::fmt;
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One addition problem
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Problem {
    pub operand1: u32,
    pub operand2: u32,
    pub correct_answer: u32,
}

impl Problem {
    pub fn new(operand1: u32, operand2: u32) -> Self {
        Self {
            operand1,
            operand2,
            correct_answer: operand1 + operand2,
        }
    }

    /// Question text shown before the typed answer, e.g. `"3 + 4 = "`
    pub fn prompt(&self) -> String {
        format!("{} + {} = ", self.operand1, self.operand2)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.operand1, self.operand2)
    }
}

/// Supplies the problem for each round
pub trait ProblemSource {
    fn next_problem(&mut self) -> Problem;
}

/// Draws uniformly random problems from an operand range
#[derive(Debug)]
pub struct QuestionGenerator {
    range: RangeInclusive<u32>,
    rng: StdRng,
}

impl QuestionGenerator {
    /// Generator with a fixed seed
    pub fn new(range: RangeInclusive<u32>, seed: u64) -> Self {
        Self {
            range,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the wall clock, different on every run
    pub fn from_clock(range: RangeInclusive<u32>) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(range, seed)
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Draw a new problem
    pub fn generate(&mut self) -> Problem {
        let operand1 = self.rng.gen_range(self.range.clone());
        let operand2 = self.rng.gen_range(self.range.clone());
        Problem::new(operand1, operand2)
    }
}

impl ProblemSource for QuestionGenerator {
    fn next_problem(&mut self) -> Problem {
        self.generate()
    }
}
