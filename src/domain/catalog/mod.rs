//! Question catalog - the static, ordered definition of sections and
//! questions.
//!
//! The catalog is loaded once per session through the `CatalogSource` port
//! and never mutated afterwards. Downstream components borrow questions
//! from it rather than copying them.

mod catalog;
mod question;

pub use catalog::{Catalog, Section};
pub use question::{Question, QuestionType};
