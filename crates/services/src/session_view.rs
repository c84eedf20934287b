use std::path::PathBuf;

use quiz_core::model::{OPTION_COUNT, Outcome, QuizSummary};

use crate::session::{QuizSession, SessionPhase};

/// Display payload for the question on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position in the session.
    pub number: usize,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub image: Option<PathBuf>,
}

/// Read-only copy of session state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub question: Option<QuestionView>,
    pub remaining: u32,
    pub feedback: Option<Outcome>,
    pub accepting_input: bool,
    pub score: u32,
    pub total: usize,
    pub summary: Option<QuizSummary>,
}

impl SessionSnapshot {
    /// Snapshot published before the questions are loaded.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            phase: SessionPhase::Loading,
            question: None,
            remaining: 0,
            feedback: None,
            accepting_input: false,
            score: 0,
            total: 0,
            summary: None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }
}

impl From<&QuizSession> for SessionSnapshot {
    fn from(session: &QuizSession) -> Self {
        let state = session.state();
        let question = session.current_question().map(|question| QuestionView {
            number: state.question_index() + 1,
            prompt: question.prompt().to_owned(),
            options: question.options().clone(),
            image: session.image().map(PathBuf::from),
        });

        Self {
            phase: session.phase(),
            question,
            remaining: session.remaining(),
            feedback: session.feedback().cloned(),
            accepting_input: state.accepting_input(),
            score: state.score(),
            total: session.total(),
            summary: session.summary().ok(),
        }
    }
}
