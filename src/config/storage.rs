//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the question catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Directory holding saved answer sets
    #[serde(default = "default_answers_dir")]
    pub answers_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            answers_dir: default_answers_dir(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/questions.json")
}

fn default_answers_dir() -> PathBuf {
    PathBuf::from("data/answers")
}
