//! Catalog Source Port - Interface for fetching the question catalog.
//!
//! Fetching is a one-shot operation performed once per questionnaire
//! session; the engine receives the catalog as a completed value and does
//! no further waiting.

use async_trait::async_trait;

use crate::domain::catalog::Catalog;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for loading the static question catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the full catalog.
    ///
    /// # Errors
    /// Returns `CatalogError` if the catalog cannot be read or parsed.
    /// A failure leaves all questionnaire state unchanged.
    async fn load(&self) -> Result<Catalog, CatalogError>;
}
