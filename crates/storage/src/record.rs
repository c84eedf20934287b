use std::path::Path;

use quiz_core::model::{OPTION_COUNT, Question};
use serde::Deserialize;

use crate::bank::LoadError;

/// On-disk shape of a question.
///
/// Kept separate from the domain `Question` so file-format details such as
/// field names and relative image paths stay in this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: usize,
    #[serde(default)]
    pub image: Option<String>,
}

impl QuestionRecord {
    /// Convert the record into a domain `Question`.
    ///
    /// `index` is the record's position in the source and only feeds error
    /// messages. Relative image paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::OptionCount` unless there are exactly four options.
    /// Returns `LoadError::InvalidQuestion` if the prompt or answer index is invalid.
    pub fn into_question(
        self,
        index: usize,
        base_dir: Option<&Path>,
    ) -> Result<Question, LoadError> {
        let found = self.options.len();
        let options: [String; OPTION_COUNT] = self
            .options
            .try_into()
            .map_err(|_| LoadError::OptionCount { index, found })?;

        let question = Question::new(self.question, options, self.answer)
            .map_err(|source| LoadError::InvalidQuestion { index, source })?;

        let Some(image) = self.image.filter(|image| !image.trim().is_empty()) else {
            return Ok(question);
        };
        let image = Path::new(&image);
        let resolved = match base_dir {
            Some(dir) if image.is_relative() => dir.join(image),
            _ => image.to_path_buf(),
        };
        Ok(question.with_image(resolved))
    }
}
