// Answer checking and the in-memory tally

use super::question::Problem;

/// Outcome of a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Compare a submitted answer with the problem's sum
pub fn evaluate(problem: &Problem, submitted: u32) -> Verdict {
    if submitted == problem.correct_answer {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Running count of answered rounds, kept only for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub answered: u64,
    pub correct: u64,
}

impl Tally {
    pub fn record(&mut self, verdict: Verdict) {
        self.answered += 1;
        if verdict == Verdict::Correct {
            self.correct += 1;
        }
    }
}
