#![forbid(unsafe_code)]

pub mod checker;
pub mod model;
pub mod time;

pub use checker::{Verdict, check};
pub use time::Clock;
