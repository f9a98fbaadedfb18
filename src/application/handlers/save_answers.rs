//! SaveAnswersHandler - Command handler for saving an answer set.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::answers::AnswerMap;
use crate::ports::{AnswerStore, AnswerStoreError, ClientInfo, SavedAnswerSet};

/// Command to save the current answers under a filename key.
#[derive(Debug, Clone)]
pub struct SaveAnswersCommand {
    pub file_name: String,
    pub client: ClientInfo,
    pub answers: AnswerMap,
}

/// Handler for saving answer sets.
pub struct SaveAnswersHandler {
    store: Arc<dyn AnswerStore>,
}

impl SaveAnswersHandler {
    pub fn new(store: Arc<dyn AnswerStore>) -> Self {
        Self { store }
    }

    /// Stamps the set with the current time and persists it.
    pub async fn execute(&self, command: SaveAnswersCommand) -> Result<(), AnswerStoreError> {
        let set = SavedAnswerSet {
            client: command.client,
            answers: command.answers,
            saved_at: Utc::now(),
        };

        self.store.save(&command.file_name, &set).await?;
        tracing::info!(file_name = %command.file_name, "answer set saved");
        Ok(())
    }
}
