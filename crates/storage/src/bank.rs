use std::path::PathBuf;

use async_trait::async_trait;
use quiz_core::model::{Question, QuestionError};
use thiserror::Error;

/// Errors raised while loading a question source.
///
/// All of them are fatal: a session never starts from a partially loaded bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("cannot read question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question {index} has {found} options, expected 4")]
    OptionCount { index: usize, found: usize },

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question source contains no questions")]
    Empty,
}

/// Read-only source of quiz questions.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Load the full ordered question sequence.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is unreadable, malformed, or empty.
    async fn load(&self) -> Result<Vec<Question>, LoadError>;

    /// Human-readable label for the source (a path, or "in-memory").
    fn describe(&self) -> String;
}
