//! Navigation cursor state and its effects.
//!
//! The navigation context is explicit, passed-in state rather than anything
//! ambient, so the engine stays testable without a rendering surface. The
//! scroll side effects themselves belong to the presentation layer; the
//! context only computes the effect descriptors it needs.

use serde::Serialize;

use super::pagination::Pagination;
use super::visibility::VisibleQuestion;
use crate::domain::catalog::Catalog;

/// A UI side effect requested by a navigation change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum NavigationEffect {
    /// Scroll the rendered element for `question_id` into view on `page`.
    ScrollToQuestion { page: usize, question_id: String },
    /// Scroll the question list back to the top.
    ScrollToTop,
}

/// The two navigation cursors: selected question and current page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    pub selected_question_id: Option<String>,
    pub current_page: usize,
}

impl NavigationContext {
    /// Initial state once the catalog is loaded: first catalog question
    /// selected, page 0.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            selected_question_id: catalog.first_question_id().map(str::to_string),
            current_page: 0,
        }
    }

    /// Handles a sidebar click on `question_id`.
    ///
    /// The selection cursor always updates. If the question is currently
    /// visible, the page cursor jumps to its page and a scroll-to-question
    /// effect is returned; an unknown or hidden id changes no page and
    /// requests no scroll.
    pub fn select_question(
        &mut self,
        question_id: &str,
        visible: &[VisibleQuestion<'_>],
        pager: &Pagination,
    ) -> Option<NavigationEffect> {
        self.selected_question_id = Some(question_id.to_string());

        let position = visible.iter().find(|v| v.id() == question_id)?.index;
        self.current_page = pager.page_of(position);
        Some(NavigationEffect::ScrollToQuestion {
            page: self.current_page,
            question_id: question_id.to_string(),
        })
    }

    /// Handles a page-change request.
    ///
    /// Out-of-range requests (below 0 or at/above the page count) are
    /// silently ignored; in-range changes move the cursor and request a
    /// scroll to the top of the list.
    pub fn change_page(
        &mut self,
        requested: i64,
        visible_total: usize,
        pager: &Pagination,
    ) -> Option<NavigationEffect> {
        if !pager.is_valid_page(requested, visible_total) {
            return None;
        }
        self.current_page = requested as usize;
        Some(NavigationEffect::ScrollToTop)
    }
}
