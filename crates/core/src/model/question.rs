use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::checker::{Verdict, check};
use crate::model::record::{ChosenAnswer, Outcome};

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("correct index {index} is out of range for {OPTION_COUNT} options")]
    CorrectIndexOutOfRange { index: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Immutable once built; `correct_index` is guaranteed to index into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
    image: Option<PathBuf>,
}

impl Question {
    /// Build a question, validating the prompt and the correct index.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt.
    /// Returns `QuestionError::CorrectIndexOutOfRange` if `correct_index` is not in `0..4`.
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if correct_index >= OPTION_COUNT {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_index,
            image: None,
        })
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    /// Option text at `index`, if it exists.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// Score a selection against this question.
    ///
    /// Returns what the player chose (or `NoAnswer`) together with the outcome.
    #[must_use]
    pub fn evaluate(&self, selection: Option<usize>) -> (ChosenAnswer, Outcome) {
        let chosen = selection
            .and_then(|index| self.option(index))
            .map_or(ChosenAnswer::NoAnswer, |text| {
                ChosenAnswer::Option(text.to_owned())
            });

        let outcome = match check(selection, self.correct_index) {
            Verdict::Correct => Outcome::Correct,
            Verdict::Incorrect => Outcome::Incorrect {
                correct_text: self.correct_text().to_owned(),
            },
        };

        (chosen, outcome)
    }
}
