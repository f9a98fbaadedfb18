//! Command handlers, one per external operation.
//!
//! Handlers hold `Arc`'d ports, translate port errors, and contain no
//! questionnaire logic of their own; the engine in `domain::questionnaire`
//! stays pure and synchronous.

mod compile_summary;
mod delete_answers;
mod list_answers;
mod load_answers;
mod save_answers;

pub use compile_summary::{CompileSummaryCommand, CompileSummaryHandler};
pub use delete_answers::{DeleteAnswersCommand, DeleteAnswersHandler};
pub use list_answers::ListAnswersHandler;
pub use load_answers::{LoadAnswersCommand, LoadAnswersHandler};
pub use save_answers::{SaveAnswersCommand, SaveAnswersHandler};
