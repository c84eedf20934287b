use quiz_core::model::{OPTION_COUNT, Outcome};
use services::SessionSnapshot;

use crate::vm::time_fmt::format_remaining;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub timer_label: String,
    pub progress_label: String,
    pub score_label: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub image_src: Option<String>,
    pub accepting_input: bool,
    pub feedback_label: String,
    pub feedback_class: &'static str,
}

impl From<&SessionSnapshot> for QuizVm {
    fn from(snapshot: &SessionSnapshot) -> Self {
        let question = snapshot.question.as_ref();
        let (feedback_label, feedback_class) = match &snapshot.feedback {
            Some(Outcome::Correct) => ("Correct!".to_string(), "feedback correct"),
            Some(Outcome::Incorrect { correct_text }) => (
                format!("Incorrect. Correct: {correct_text}"),
                "feedback incorrect",
            ),
            None => (String::new(), "feedback"),
        };

        Self {
            timer_label: format_remaining(snapshot.remaining),
            progress_label: question.map_or_else(String::new, |q| {
                format!("Question {} of {}", q.number, snapshot.total)
            }),
            score_label: format!("Score: {}", snapshot.score),
            prompt: question.map_or_else(String::new, |q| q.prompt.clone()),
            options: question.map_or_else(Vec::new, |q| q.options.to_vec()),
            image_src: question
                .and_then(|q| q.image.as_ref())
                .map(|path| path.display().to_string()),
            accepting_input: snapshot.accepting_input,
            feedback_label,
            feedback_class,
        }
    }
}

/// Map the keys "1" to "4" onto option indices.
#[must_use]
pub fn option_for_key(key: &str) -> Option<usize> {
    let digit: usize = key.parse().ok()?;
    (1..=OPTION_COUNT).contains(&digit).then(|| digit - 1)
}
