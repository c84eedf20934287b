#![forbid(unsafe_code)]

pub mod bank;
pub mod json;
pub mod memory;
mod record;

pub use bank::{LoadError, QuestionBank};
pub use json::JsonFileBank;
pub use memory::InMemoryBank;
pub use record::QuestionRecord;
