//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the questionnaire engine and the outside world. Adapters implement them.
//!
//! - `CatalogSource` - one-shot fetch of the question catalog
//! - `AnswerStore` - save/load of answer sets keyed by an opaque filename
//! - `SummaryCompiler` - compilation of answers into an HTML summary

mod answer_store;
mod catalog_source;
mod summary_compiler;

pub use answer_store::{AnswerStore, AnswerStoreError, ClientInfo, SavedAnswerSet, SavedEntry};
pub use catalog_source::{CatalogError, CatalogSource};
pub use summary_compiler::{SummaryCompiler, SummaryError};
