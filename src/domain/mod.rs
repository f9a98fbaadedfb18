//! Domain layer containing the questionnaire engine and its types.
//!
//! # Module Organization
//!
//! - `catalog` - Immutable question catalog (sections, questions, types)
//! - `answers` - Answer mapping, derived keys, and proposed patches
//! - `questionnaire` - The conditional-visibility engine: resolver, tree
//!   builder, progress, pagination, section grouping, and navigation

pub mod answers;
pub mod catalog;
pub mod questionnaire;
