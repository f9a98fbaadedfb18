//! ListAnswersHandler - Command handler for listing saved answer sets.

use std::sync::Arc;

use crate::ports::{AnswerStore, AnswerStoreError, SavedEntry};

/// Handler for listing saved answer sets, most recent first.
pub struct ListAnswersHandler {
    store: Arc<dyn AnswerStore>,
}

impl ListAnswersHandler {
    pub fn new(store: Arc<dyn AnswerStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<SavedEntry>, AnswerStoreError> {
        self.store.list().await
    }
}
