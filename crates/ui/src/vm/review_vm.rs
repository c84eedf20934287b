use quiz_core::model::QuizSummary;

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub prompt: String,
    pub answer: String,
    pub result: String,
    pub result_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub score_label: String,
    pub elapsed_label: String,
    pub items: Vec<ReviewItemVm>,
}

impl From<&QuizSummary> for ReviewVm {
    fn from(summary: &QuizSummary) -> Self {
        let items = summary
            .history()
            .iter()
            .enumerate()
            .map(|(index, record)| ReviewItemVm {
                number: index + 1,
                prompt: record.prompt.clone(),
                answer: record.chosen_text().to_string(),
                result: record.outcome.to_string(),
                result_class: if record.outcome.is_correct() {
                    "result correct"
                } else {
                    "result incorrect"
                },
            })
            .collect();

        Self {
            score_label: format!(
                "Game Over! Final Score: {} / {}",
                summary.score(),
                summary.total()
            ),
            elapsed_label: format_elapsed(summary.elapsed()),
            items,
        }
    }
}
