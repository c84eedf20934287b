use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use quiz_core::model::{AnsweredRecord, Outcome, Question, QuizSummary};
use rand::rng;
use rand::seq::SliceRandom;
use storage::QuestionBank;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use tracing::{debug, info, trace};

use crate::Clock;
use crate::error::SessionError;
use crate::timer::{CountdownTimer, TimerEvent};

/// Time units a player has to answer each question.
pub const QUESTION_UNITS: u32 = 30;
/// Time units the feedback message stays up before the next question.
pub const FEEDBACK_UNITS: u32 = 3;
/// Length of one time unit.
pub const TIME_UNIT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    ShowingQuestion,
    AwaitingAnswer,
    Feedback,
    Finished,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub clock: Clock,
    pub shuffle: bool,
}

/// Mutable progress of a session, owned by `QuizSession`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    question_index: usize,
    score: u32,
    accepting_input: bool,
    history: Vec<AnsweredRecord>,
}

impl SessionState {
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    #[must_use]
    pub fn history(&self) -> &[AnsweredRecord] {
        &self.history
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz-flow state machine.
///
/// All state changes go through `&mut self` entry points driven by a single
/// control loop, so the `accepting_input` guard is checked and cleared without
/// any interleaving between an explicit submission and a timer expiry.
pub struct QuizSession {
    questions: Arc<[Question]>,
    state: SessionState,
    phase: SessionPhase,
    remaining: u32,
    feedback: Option<Outcome>,
    image: Option<PathBuf>,
    timer: Option<CountdownTimer>,
    timer_events: UnboundedSender<TimerEvent>,
    advance_at: Option<Instant>,
    clock: Clock,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Load questions from `bank` and show the first one.
    ///
    /// Timer ticks and expiry for every question are sent to `timer_events`;
    /// the caller feeds them back through `handle_timer_event`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the bank cannot be read or is empty.
    pub async fn start(
        bank: &dyn QuestionBank,
        options: SessionOptions,
        timer_events: UnboundedSender<TimerEvent>,
    ) -> Result<Self, SessionError> {
        let mut questions = bank.load().await?;
        if options.shuffle {
            questions.shuffle(&mut rng());
        }
        info!(
            source = %bank.describe(),
            count = questions.len(),
            shuffle = options.shuffle,
            "starting quiz session"
        );

        let mut session = Self {
            questions: questions.into(),
            state: SessionState::default(),
            phase: SessionPhase::Loading,
            remaining: 0,
            feedback: None,
            image: None,
            timer: None,
            timer_events,
            advance_at: None,
            clock: options.clock,
            started_at: options.clock.now(),
            finished_at: None,
        };
        session.show_question().await;
        Ok(session)
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Number of questions in the session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question on screen, or `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.state.question_index)
    }

    /// Remaining time units on the active question.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Outcome shown during the feedback hold.
    #[must_use]
    pub fn feedback(&self) -> Option<&Outcome> {
        self.feedback.as_ref()
    }

    /// Image of the current question, when the file exists.
    #[must_use]
    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// When the pending feedback hold ends, if one is pending.
    #[must_use]
    pub fn advance_deadline(&self) -> Option<Instant> {
        self.advance_at
    }

    /// Commit an answer for the current question.
    ///
    /// `None` means no answer was given. Returns the new history record, or
    /// `None` if input is closed (already answered, expired, or finished).
    pub async fn submit(&mut self, selection: Option<usize>) -> Option<&AnsweredRecord> {
        if !self.state.accepting_input {
            debug!(
                question = self.state.question_index,
                ?selection,
                "submission ignored, input closed"
            );
            return None;
        }
        self.state.accepting_input = false;

        if let Some(timer) = self.timer.take() {
            timer.cancel().await;
        }

        let index = self.state.question_index;
        let question = self.questions.get(index)?;
        let (chosen, outcome) = question.evaluate(selection);
        if outcome.is_correct() {
            self.state.score = self.state.score.saturating_add(1);
        }
        info!(
            question = index,
            chosen = %chosen,
            correct = outcome.is_correct(),
            score = self.state.score,
            "answer recorded"
        );

        self.feedback = Some(outcome.clone());
        self.state
            .history
            .push(AnsweredRecord::new(question.prompt(), chosen, outcome));
        self.phase = SessionPhase::Feedback;
        self.advance_at = Some(Instant::now() + TIME_UNIT * FEEDBACK_UNITS);

        self.state.history.last()
    }

    /// Record "no answer" for the current question, unless it was already answered.
    pub async fn on_timer_expired(&mut self) -> Option<&AnsweredRecord> {
        self.submit(None).await
    }

    /// Apply a countdown event.
    ///
    /// Events from a timer for another question, or arriving after the
    /// question was answered, are dropped.
    pub async fn handle_timer_event(&mut self, event: TimerEvent) {
        if event.question() != self.state.question_index
            || self.phase != SessionPhase::AwaitingAnswer
        {
            trace!(?event, phase = ?self.phase, "stale timer event dropped");
            return;
        }

        match event {
            TimerEvent::Tick { remaining, .. } => self.remaining = remaining,
            TimerEvent::Expired { question } => {
                info!(question, "time expired");
                self.on_timer_expired().await;
            }
        }
    }

    /// Leave the feedback hold: show the next question or finish.
    ///
    /// No-op outside `Feedback`.
    pub async fn advance(&mut self) {
        if self.phase != SessionPhase::Feedback {
            return;
        }
        self.advance_at = None;
        self.state.question_index += 1;
        self.show_question().await;
    }

    /// Final result, available once the session is finished.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the last question is done.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        let Some(finished_at) = self.finished_at else {
            return Err(SessionError::NotFinished);
        };
        let summary = QuizSummary::new(
            self.state.score,
            self.questions.len(),
            self.state.history.clone(),
            self.started_at,
            finished_at,
        )?;
        Ok(summary)
    }

    /// Stop the active countdown and drop any pending transition.
    pub async fn shutdown(&mut self) {
        self.state.accepting_input = false;
        self.advance_at = None;
        if let Some(timer) = self.timer.take() {
            timer.cancel().await;
        }
    }

    async fn show_question(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel().await;
        }

        let index = self.state.question_index;
        let Some(question) = self.questions.get(index) else {
            self.finish();
            return;
        };
        self.phase = SessionPhase::ShowingQuestion;

        self.image = match question.image() {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => {
                debug!(
                    question = index,
                    path = %path.display(),
                    "image not found, showing without it"
                );
                None
            }
            None => None,
        };
        self.feedback = None;
        self.remaining = QUESTION_UNITS;
        self.state.accepting_input = true;
        self.timer = Some(CountdownTimer::start(
            index,
            QUESTION_UNITS,
            TIME_UNIT,
            self.timer_events.clone(),
        ));
        self.phase = SessionPhase::AwaitingAnswer;
        debug!(question = index, total = self.questions.len(), "question shown");
    }

    fn finish(&mut self) {
        self.phase = SessionPhase::Finished;
        self.state.accepting_input = false;
        self.feedback = None;
        self.image = None;
        self.remaining = 0;
        self.finished_at = Some(self.clock.now());
        info!(
            score = self.state.score,
            total = self.questions.len(),
            "quiz finished"
        );
    }
}
