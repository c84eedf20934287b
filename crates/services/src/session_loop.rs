use std::sync::Arc;

use quiz_core::model::{OPTION_COUNT, QuizSummary};
use storage::QuestionBank;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::Clock;
use crate::error::SessionError;
use crate::session::{QuizSession, SessionOptions};
use crate::session_view::SessionSnapshot;

/// Input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Select(usize),
    Quit,
}

/// Presentation-side end of a running session.
///
/// Selections go in through `select`; every state change comes back out as a
/// `SessionSnapshot` on the watch channel. Dropping every handle cancels the
/// session.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Forward a selection for the question on screen.
    ///
    /// Indices outside the option range are dropped here. Returns `false` if
    /// the selection was dropped or the session has already ended.
    pub fn select(&self, index: usize) -> bool {
        if index >= OPTION_COUNT {
            debug!(index, "selection out of range, dropped");
            return false;
        }
        self.commands.send(SessionCommand::Select(index)).is_ok()
    }

    /// Abort the session.
    pub fn quit(&self) {
        let _ = self.commands.send(SessionCommand::Quit);
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }
}

/// Primary control loop for quiz sessions.
///
/// Owns the `QuizSession` while it runs and is the only caller of its entry
/// points: selections, countdown events, and the feedback deadline are handled
/// one at a time, in arrival order.
#[derive(Clone)]
pub struct SessionLoop {
    bank: Arc<dyn QuestionBank>,
    options: SessionOptions,
}

impl SessionLoop {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<dyn QuestionBank>) -> Self {
        Self {
            bank,
            options: SessionOptions {
                clock,
                shuffle: false,
            },
        }
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.options.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn bank(&self) -> Arc<dyn QuestionBank> {
        Arc::clone(&self.bank)
    }

    /// Start a session on a new tokio task.
    ///
    /// The join handle resolves to the final summary once the last question is
    /// scored.
    #[must_use]
    pub fn spawn(&self) -> (SessionHandle, JoinHandle<Result<QuizSummary, SessionError>>) {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshots_tx, snapshots_rx) = watch::channel(SessionSnapshot::loading());
        let handle = SessionHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
        };

        let this = self.clone();
        let task = tokio::spawn(async move { this.run(commands_rx, snapshots_tx).await });
        (handle, task)
    }

    /// Run one session to completion on the current task.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if questions cannot be loaded and
    /// `SessionError::Cancelled` if the presentation quits or goes away.
    pub async fn run(
        &self,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        snapshots: watch::Sender<SessionSnapshot>,
    ) -> Result<QuizSummary, SessionError> {
        snapshots.send_replace(SessionSnapshot::loading());

        let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
        let mut session = QuizSession::start(self.bank.as_ref(), self.options, timer_tx).await?;
        snapshots.send_replace(SessionSnapshot::from(&session));

        while !session.is_finished() {
            let deadline = session.advance_deadline();
            tokio::select! {
                Some(event) = timer_rx.recv() => session.handle_timer_event(event).await,
                command = commands.recv() => match command {
                    Some(SessionCommand::Select(index)) => {
                        session.submit(Some(index)).await;
                    }
                    Some(SessionCommand::Quit) | None => {
                        info!(
                            question = session.state().question_index(),
                            "session cancelled"
                        );
                        session.shutdown().await;
                        return Err(SessionError::Cancelled);
                    }
                },
                () = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                    if deadline.is_some() => session.advance().await,
            }
            snapshots.send_replace(SessionSnapshot::from(&session));
        }

        session.summary()
    }
}
