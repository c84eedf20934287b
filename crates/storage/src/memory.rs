use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::Question;

use crate::bank::{LoadError, QuestionBank};

/// In-memory question bank for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryBank {
    questions: Arc<Vec<Question>>,
}

impl InMemoryBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }
}

#[async_trait]
impl QuestionBank for InMemoryBank {
    async fn load(&self) -> Result<Vec<Question>, LoadError> {
        if self.questions.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(self.questions.as_ref().clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
