#![forbid(unsafe_code)]

pub mod error;
pub mod session;
pub mod session_loop;
pub mod session_view;
pub mod timer;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use session::{
    FEEDBACK_UNITS, QUESTION_UNITS, QuizSession, SessionOptions, SessionPhase, SessionState,
    TIME_UNIT,
};
pub use session_loop::{SessionCommand, SessionHandle, SessionLoop};
pub use session_view::{QuestionView, SessionSnapshot};
pub use timer::{CountdownTimer, TimerEvent};
