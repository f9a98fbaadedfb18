//! Storage adapters for saved answer sets.

mod file_answer_store;

pub use file_answer_store::FileAnswerStore;
