use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::AnsweredRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("history has {history} records for {total} questions")]
    HistoryMismatch { history: usize, total: usize },

    #[error("score {score} does not match {correct} correct records")]
    ScoreMismatch { score: u32, correct: u32 },
}

/// Final result of a finished quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: u32,
    total: usize,
    history: Vec<AnsweredRecord>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from the answer history of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `finished_at` is before `started_at`.
    /// Returns `SummaryError::HistoryMismatch` if there is not one record per question.
    /// Returns `SummaryError::ScoreMismatch` if `score` disagrees with the history.
    pub fn new(
        score: u32,
        total: usize,
        history: Vec<AnsweredRecord>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if finished_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if history.len() != total {
            return Err(SummaryError::HistoryMismatch {
                history: history.len(),
                total,
            });
        }

        let correct = history
            .iter()
            .filter(|record| record.outcome.is_correct())
            .fold(0_u32, |acc, _| acc.saturating_add(1));
        if correct != score {
            return Err(SummaryError::ScoreMismatch { score, correct });
        }

        Ok(Self {
            score,
            total,
            history,
            started_at,
            finished_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn history(&self) -> &[AnsweredRecord] {
        &self.history
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Wall-clock time between the first question and the end of the session.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }
}
