use crate::quiz::{Direction, Problem, Verdict};

/// `None` means nothing has been picked yet.
pub fn check(problem: &Problem, submitted: Option<Direction>) -> Verdict {
    match submitted {
        None => Verdict::Unanswered,
        Some(direction) if direction == problem.correct() => Verdict::Correct,
        Some(_) => Verdict::Incorrect,
    }
}
