//! JSON-file Catalog Source Adapter
//!
//! Reads the catalog from a JSON file shaped like the questionnaire API
//! payload: `{ "sections": [{ "section_number", "title", "questions" }] }`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, CatalogSource};

/// Catalog source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound(self.path.display().to_string()));
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?;

        let catalog: Catalog =
            serde_json::from_str(&json).map_err(|e| CatalogError::ParseFailed(e.to_string()))?;

        tracing::info!(
            path = %self.path.display(),
            sections = catalog.sections.len(),
            questions = catalog.question_count(),
            "loaded question catalog"
        );
        Ok(catalog)
    }
}
