//! Progress tracking over the visible list.

use serde::Serialize;

use crate::domain::answers::AnswerMap;

use super::visibility::VisibleQuestion;

/// Answered-versus-total snapshot for the current visible list.
///
/// A read-only value object, recomputed on every change to the visible
/// list or the answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Visible questions whose primary answer is present and non-empty.
    pub answered: usize,
    /// Total number of visible questions.
    pub total: usize,
}

impl Progress {
    /// Measures progress for the given visible list.
    ///
    /// Only the primary answer key per question is checked; derived
    /// slider/explanation keys never count.
    pub fn measure(visible: &[VisibleQuestion<'_>], answers: &AnswerMap) -> Self {
        let answered = visible.iter().filter(|v| answers.is_answered(v.id())).count();
        Self {
            answered,
            total: visible.len(),
        }
    }

    /// Completion percentage in [0, 100], unrounded.
    ///
    /// An empty visible list is 0%, not a division by zero.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.answered as f64 / self.total as f64) * 100.0
        }
    }
}
