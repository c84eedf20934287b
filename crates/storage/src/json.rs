use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::Question;
use tracing::{debug, info};

use crate::bank::{LoadError, QuestionBank};
use crate::record::QuestionRecord;

/// Question bank backed by a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileBank {
    path: PathBuf,
}

impl JsonFileBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionBank for JsonFileBank {
    async fn load(&self) -> Result<Vec<Question>, LoadError> {
        let io_error = |source| LoadError::Io {
            path: self.path.clone(),
            source,
        };
        // Absolute, so relative image paths resolve to something the webview can open.
        let path = tokio::fs::canonicalize(&self.path)
            .await
            .map_err(io_error)?;
        debug!(path = %path.display(), "reading question file");
        let raw = tokio::fs::read_to_string(&path).await.map_err(io_error)?;

        let questions = parse_questions(&raw, &path)?;
        info!(
            path = %path.display(),
            count = questions.len(),
            "loaded questions"
        );
        Ok(questions)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a JSON question array read from `path`.
///
/// Relative image paths are resolved against the file's directory.
///
/// # Errors
///
/// Returns `LoadError::Parse` for invalid JSON or missing fields, `LoadError::Empty`
/// for an empty array, and the record conversion errors otherwise.
pub fn parse_questions(raw: &str, path: &Path) -> Result<Vec<Question>, LoadError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let base_dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_question(index, base_dir))
        .collect()
}
