mod quiz_vm;
mod review_vm;
mod time_fmt;

pub use quiz_vm::{QuizVm, option_for_key};
pub use review_vm::{ReviewItemVm, ReviewVm};
pub use time_fmt::{format_elapsed, format_remaining};
