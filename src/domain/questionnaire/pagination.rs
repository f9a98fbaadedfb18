//! Fixed-size pagination of the visible list.

use super::visibility::VisibleQuestion;

/// Number of questions rendered per page when not configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Slices the visible list into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates a paginator, clamping the page size to at least 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` questions; 0 when `total` is 0.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// The page holding the question at `visible_index`.
    pub fn page_of(&self, visible_index: usize) -> usize {
        visible_index / self.page_size
    }

    /// The contiguous sub-sequence of `visible` on `page`.
    ///
    /// A page outside `[0, total_pages)` yields an empty slice rather than
    /// failing.
    pub fn slice_for<'v, 'a>(
        &self,
        visible: &'v [VisibleQuestion<'a>],
        page: usize,
    ) -> &'v [VisibleQuestion<'a>] {
        let start = page.saturating_mul(self.page_size);
        if start >= visible.len() {
            return &[];
        }
        let end = (start + self.page_size).min(visible.len());
        &visible[start..end]
    }

    /// Whether a page-change request to `page` is within range.
    ///
    /// Requests below 0 or at/above `total_pages` are rejected; callers
    /// treat a rejection as a no-op.
    pub fn is_valid_page(&self, page: i64, total: usize) -> bool {
        page >= 0 && (page as usize) < self.total_pages(total)
    }
}
