//! CompileSummaryHandler - Command handler for compiling the HTML summary.

use std::sync::Arc;

use crate::domain::answers::AnswerMap;
use crate::domain::catalog::Catalog;
use crate::ports::{SummaryCompiler, SummaryError};

/// Command to compile the current answers into a summary document.
#[derive(Debug, Clone)]
pub struct CompileSummaryCommand {
    pub answers: AnswerMap,
}

/// Handler for summary compilation.
pub struct CompileSummaryHandler {
    catalog: Arc<Catalog>,
    compiler: Arc<dyn SummaryCompiler>,
}

impl CompileSummaryHandler {
    pub fn new(catalog: Arc<Catalog>, compiler: Arc<dyn SummaryCompiler>) -> Self {
        Self { catalog, compiler }
    }

    pub async fn execute(&self, command: CompileSummaryCommand) -> Result<String, SummaryError> {
        let html = self.compiler.compile(&self.catalog, &command.answers).await?;
        tracing::info!(bytes = html.len(), "summary compiled");
        Ok(html)
    }
}
