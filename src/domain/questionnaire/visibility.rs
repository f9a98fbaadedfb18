//! Visibility and tree builder.
//!
//! A single forward pass over the catalog decides which questions are
//! currently shown, assigns each a dense display index, and derives its
//! nesting level from the already-emitted entry for its dependency.
//!
//! Conditionals may only reference questions declared earlier in catalog
//! order; that constraint is owned by catalog authors, so one pass needs no
//! fixed-point iteration and no cycle detection.

use crate::domain::answers::AnswerMap;
use crate::domain::catalog::{Catalog, Question};

use super::conditional::{is_satisfied, ConditionalExpression};

/// A catalog question currently eligible for display.
///
/// Ephemeral: rebuilt in full on every answer change and never mutated in
/// place. Borrows the question and section title from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct VisibleQuestion<'a> {
    pub question: &'a Question,
    /// Section ordering number, carried for grouping.
    pub section_number: u32,
    /// Section title, carried for grouping and display.
    pub section_title: &'a str,
    /// Nesting depth relative to the conditional ancestor chain.
    pub level: usize,
    /// Dense position in the visible list, 0..N-1 in catalog order.
    pub index: usize,
}

impl VisibleQuestion<'_> {
    pub fn id(&self) -> &str {
        &self.question.id
    }
}

/// Builds the ordered visible list for the current answers.
///
/// Deterministic: identical `(catalog, answers)` inputs always yield an
/// identical sequence of identifiers, levels, and indices. Never fails;
/// malformed expressions and missing dependencies degrade to "hidden".
pub fn build_visible<'a>(catalog: &'a Catalog, answers: &AnswerMap) -> Vec<VisibleQuestion<'a>> {
    let mut visible: Vec<VisibleQuestion<'a>> = Vec::new();

    for (section, question) in catalog.iter_questions() {
        if !is_satisfied(question, answers) {
            continue;
        }

        let level = question
            .conditional_on
            .as_deref()
            .and_then(|raw| {
                let dep_id = ConditionalExpression::parse(raw).dependency_id;
                visible.iter().find(|v| v.id() == dep_id)
            })
            .map_or(0, |parent| parent.level + 1);

        visible.push(VisibleQuestion {
            question,
            section_number: section.section_number,
            section_title: &section.title,
            level,
            index: visible.len(),
        });
    }

    visible
}
