//! Answer Store Port - Interface for persisting answer sets.
//!
//! Answer sets are keyed by an opaque filename string chosen by the caller.
//! The engine itself never persists state; it hands the current answer map
//! to this collaborator and reads it back unchanged.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::answers::AnswerMap;

/// Client metadata attached to a saved answer set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub client_name: String,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
}

/// A persisted answer set with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAnswerSet {
    pub client: ClientInfo,
    pub answers: AnswerMap,
    pub saved_at: DateTime<Utc>,
}

/// A directory entry describing one saved answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    /// Opaque filename key used to load or delete the set.
    pub file_name: String,
    pub client_name: String,
    pub saved_at: DateTime<Utc>,
}

/// Errors that can occur during answer store operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerStoreError {
    #[error("No saved answers named '{0}'")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Failed to serialize answers: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize answers: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for saving and loading answer sets.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Saves (or overwrites) the answer set under `file_name`.
    async fn save(&self, file_name: &str, set: &SavedAnswerSet) -> Result<(), AnswerStoreError>;

    /// Loads the answer set saved under `file_name`.
    ///
    /// # Errors
    /// Returns `AnswerStoreError::NotFound` if no such set exists.
    async fn load(&self, file_name: &str) -> Result<SavedAnswerSet, AnswerStoreError>;

    /// Lists all saved answer sets, most recently saved first.
    async fn list(&self) -> Result<Vec<SavedEntry>, AnswerStoreError>;

    /// Deletes the answer set saved under `file_name`.
    async fn delete(&self, file_name: &str) -> Result<(), AnswerStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_names_the_file() {
        let err = AnswerStoreError::NotFound("smith_intake".to_string());
        assert!(err.to_string().contains("smith_intake"));
    }

    #[test]
    fn saved_answer_set_round_trips_through_json() {
        let set = SavedAnswerSet {
            client: ClientInfo {
                client_name: "Jane Smith".to_string(),
                case_number: Some("2024-118".to_string()),
                case_type: None,
            },
            answers: AnswerMap::new(),
            saved_at: Utc::now(),
        };

        let json = serde_json::to_string(&set).unwrap();
        let back: SavedAnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
