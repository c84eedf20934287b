mod home;
mod quiz;
mod review;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::{QuestionPanel, QuizView};
pub use review::ReviewPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
