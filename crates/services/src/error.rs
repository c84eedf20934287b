//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SummaryError;
use storage::LoadError;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("session is not finished")]
    NotFinished,
    #[error("session was cancelled before it finished")]
    Cancelled,
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
