mod question;
mod record;
mod summary;

pub use question::{OPTION_COUNT, Question, QuestionError};
pub use record::{AnsweredRecord, ChosenAnswer, NO_ANSWER, Outcome};
pub use summary::{QuizSummary, SummaryError};
