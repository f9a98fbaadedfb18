//! Summary Compiler Port - Interface for compiling answers into a summary.

use async_trait::async_trait;

use crate::domain::answers::AnswerMap;
use crate::domain::catalog::Catalog;

/// Errors that can occur while compiling a summary.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Failed to compile summary: {0}")]
    CompilationFailed(String),
}

/// Port for turning the current answers into an HTML summary document.
#[async_trait]
pub trait SummaryCompiler: Send + Sync {
    /// Compiles the answers against the catalog into HTML.
    async fn compile(&self, catalog: &Catalog, answers: &AnswerMap)
        -> Result<String, SummaryError>;
}
