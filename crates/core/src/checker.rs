//! Answer evaluation.

use crate::model::OPTION_COUNT;

/// Result of comparing a selection against the correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Compare a selected option index with the correct one.
///
/// A missing selection (the timer ran out) or an index outside the option
/// range is always `Incorrect`; it is never treated as an error.
#[must_use]
pub fn check(selected: Option<usize>, correct: usize) -> Verdict {
    match selected {
        Some(index) if index < OPTION_COUNT && index == correct => Verdict::Correct,
        _ => Verdict::Incorrect,
    }
}
