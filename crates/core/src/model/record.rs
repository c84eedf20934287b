use std::fmt;

/// Text shown in place of a choice when the timer ran out.
pub const NO_ANSWER: &str = "No Answer";

/// What the player picked for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChosenAnswer {
    Option(String),
    NoAnswer,
}

impl ChosenAnswer {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ChosenAnswer::Option(text) => text,
            ChosenAnswer::NoAnswer => NO_ANSWER,
        }
    }
}

impl fmt::Display for ChosenAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Scored result of a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { correct_text: String },
}

impl Outcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => f.write_str("Correct"),
            Outcome::Incorrect { correct_text } => write!(f, "Correct: {correct_text}"),
        }
    }
}

/// History entry for one answered (or timed out) question.
///
/// Created once per question, in question order, and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredRecord {
    pub prompt: String,
    pub chosen: ChosenAnswer,
    pub outcome: Outcome,
}

impl AnsweredRecord {
    #[must_use]
    pub fn new(prompt: impl Into<String>, chosen: ChosenAnswer, outcome: Outcome) -> Self {
        Self {
            prompt: prompt.into(),
            chosen,
            outcome,
        }
    }

    #[must_use]
    pub fn chosen_text(&self) -> &str {
        self.chosen.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_answer_renders_sentinel() {
        assert_eq!(ChosenAnswer::NoAnswer.to_string(), NO_ANSWER);
    }

    #[test]
    fn incorrect_outcome_names_correct_option() {
        let outcome = Outcome::Incorrect {
            correct_text: "4".into(),
        };
        assert_eq!(outcome.to_string(), "Correct: 4");
        assert!(!outcome.is_correct());
    }
}
