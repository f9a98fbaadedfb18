//! The conditional-visibility questionnaire engine.
//!
//! Data flows one way per recomputation:
//!
//! ```text
//! Catalog + Answers -> resolver -> visible list -> {progress, pages, groups}
//! ```
//!
//! Every answer mutation re-enters at the top: [`QuestionnaireView::build`]
//! re-derives the whole view rather than patching a cached structure.
//! Catalogs are small, so the O(n) rebuild per change is simpler than
//! incremental maintenance and cannot go stale.

mod conditional;
mod navigation;
mod pagination;
mod progress;
mod sections;
mod visibility;

pub use conditional::{is_satisfied, ConditionalExpression};
pub use navigation::{NavigationContext, NavigationEffect};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use progress::Progress;
pub use sections::{group_by_section, SectionGroup};
pub use visibility::{build_visible, VisibleQuestion};

use crate::domain::answers::AnswerMap;
use crate::domain::catalog::{Catalog, Question};

/// One full recomputation of the questionnaire render state.
///
/// Ephemeral and borrow-only: rebuild it whenever any answer changes.
#[derive(Debug, Clone)]
pub struct QuestionnaireView<'a> {
    pub visible: Vec<VisibleQuestion<'a>>,
    pub progress: Progress,
    pub sections: Vec<SectionGroup<'a>>,
    pub pagination: Pagination,
}

impl<'a> QuestionnaireView<'a> {
    /// Recomputes the visible list, progress, and section groups.
    pub fn build(catalog: &'a Catalog, answers: &AnswerMap, pagination: Pagination) -> Self {
        let visible = build_visible(catalog, answers);
        let progress = Progress::measure(&visible, answers);
        let sections = group_by_section(&visible);
        Self {
            visible,
            progress,
            sections,
            pagination,
        }
    }

    /// Number of pages for the current visible list.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.visible.len())
    }

    /// The visible questions on `page`; empty when out of range.
    pub fn page(&self, page: usize) -> &[VisibleQuestion<'a>] {
        self.pagination.slice_for(&self.visible, page)
    }
}

/// Effective severity slider position for a question.
///
/// Falls back to the question's default slider value, then 0.5 (neutral),
/// when no slider answer has been stored yet.
pub fn slider_value(question: &Question, answers: &AnswerMap) -> f64 {
    answers
        .get(&crate::domain::answers::slider_key(&question.id))
        .and_then(|v| v.as_number())
        .or(question.default_slider_value)
        .unwrap_or(0.5)
}
