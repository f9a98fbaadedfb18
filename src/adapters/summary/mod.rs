//! Summary compilation adapters.

mod html_compiler;

pub use html_compiler::HtmlSummaryCompiler;
