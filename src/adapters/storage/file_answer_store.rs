//! File-based Answer Store Adapter
//!
//! Stores each answer set as a JSON file in a flat directory, keyed by the
//! caller-supplied filename. The filename is sanitized to a single path
//! component so a key can never escape the base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{AnswerStore, AnswerStoreError, SavedAnswerSet, SavedEntry};

/// File-backed storage for saved answer sets.
#[derive(Debug, Clone)]
pub struct FileAnswerStore {
    base_path: PathBuf,
}

impl FileAnswerStore {
    /// Creates a store rooted at `base_path`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Validates a key and maps it to its JSON file path.
    fn file_path(&self, file_name: &str) -> Result<PathBuf, AnswerStoreError> {
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name.starts_with('.')
        {
            return Err(AnswerStoreError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.base_path.join(format!("{file_name}.json")))
    }

    async fn ensure_base_dir(&self) -> Result<(), AnswerStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| AnswerStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl AnswerStore for FileAnswerStore {
    async fn save(&self, file_name: &str, set: &SavedAnswerSet) -> Result<(), AnswerStoreError> {
        self.ensure_base_dir().await?;
        let path = self.file_path(file_name)?;

        let json = serde_json::to_string_pretty(set)
            .map_err(|e| AnswerStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&path, json)
            .await
            .map_err(|e| AnswerStoreError::Io(e.to_string()))?;

        tracing::debug!(file_name, "saved answer set");
        Ok(())
    }

    async fn load(&self, file_name: &str) -> Result<SavedAnswerSet, AnswerStoreError> {
        let path = self.file_path(file_name)?;
        if !path.exists() {
            return Err(AnswerStoreError::NotFound(file_name.to_string()));
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| AnswerStoreError::Io(e.to_string()))?;

        serde_json::from_str(&json)
            .map_err(|e| AnswerStoreError::DeserializationFailed(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<SavedEntry>, AnswerStoreError> {
        let mut entries = Vec::new();

        let mut dir = match fs::read_dir(&self.base_path).await {
            Ok(dir) => dir,
            // A store that was never written to lists as empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(AnswerStoreError::Io(e.to_string())),
        };

        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| AnswerStoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            // Unreadable or corrupt files are skipped, not fatal.
            match self.load(stem).await {
                Ok(set) => entries.push(SavedEntry {
                    file_name: stem.to_string(),
                    client_name: set.client.client_name,
                    saved_at: set.saved_at,
                }),
                Err(err) => {
                    tracing::warn!(file = stem, error = %err, "skipping unreadable answer set");
                }
            }
        }

        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(entries)
    }

    async fn delete(&self, file_name: &str) -> Result<(), AnswerStoreError> {
        let path = self.file_path(file_name)?;
        if !path.exists() {
            return Err(AnswerStoreError::NotFound(file_name.to_string()));
        }
        fs::remove_file(&path)
            .await
            .map_err(|e| AnswerStoreError::Io(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_rejects_traversal_keys() {
        let store = FileAnswerStore::new("/tmp/answers");
        assert!(store.file_path("../etc/passwd").is_err());
        assert!(store.file_path("a/b").is_err());
        assert!(store.file_path(".hidden").is_err());
        assert!(store.file_path("").is_err());
    }

    #[test]
    fn file_path_appends_json_extension() {
        let store = FileAnswerStore::new("/tmp/answers");
        let path = store.file_path("smith_intake").unwrap();
        assert!(path.ends_with("smith_intake.json"));
    }
}
