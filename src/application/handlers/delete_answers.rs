//! DeleteAnswersHandler - Command handler for deleting a saved answer set.

use std::sync::Arc;

use crate::ports::{AnswerStore, AnswerStoreError};

/// Command to delete the answer set saved under a filename key.
#[derive(Debug, Clone)]
pub struct DeleteAnswersCommand {
    pub file_name: String,
}

/// Handler for deleting answer sets.
pub struct DeleteAnswersHandler {
    store: Arc<dyn AnswerStore>,
}

impl DeleteAnswersHandler {
    pub fn new(store: Arc<dyn AnswerStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, command: DeleteAnswersCommand) -> Result<(), AnswerStoreError> {
        self.store.delete(&command.file_name).await?;
        tracing::info!(file_name = %command.file_name, "answer set deleted");
        Ok(())
    }
}
