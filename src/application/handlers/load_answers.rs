//! LoadAnswersHandler - Command handler for loading a saved answer set.

use std::sync::Arc;

use crate::ports::{AnswerStore, AnswerStoreError, SavedAnswerSet};

/// Command to load the answer set saved under a filename key.
#[derive(Debug, Clone)]
pub struct LoadAnswersCommand {
    pub file_name: String,
}

/// Handler for loading answer sets.
pub struct LoadAnswersHandler {
    store: Arc<dyn AnswerStore>,
}

impl LoadAnswersHandler {
    pub fn new(store: Arc<dyn AnswerStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        command: LoadAnswersCommand,
    ) -> Result<SavedAnswerSet, AnswerStoreError> {
        let set = self.store.load(&command.file_name).await?;
        tracing::info!(
            file_name = %command.file_name,
            answers = set.answers.len(),
            "answer set loaded"
        );
        Ok(set)
    }
}
