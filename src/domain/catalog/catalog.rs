//! Catalog and section containers.

use serde::{Deserialize, Serialize};

use super::Question;

/// An ordered group of questions within the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Ordering number of the section.
    pub section_number: u32,
    /// Display title of the section.
    pub title: String,
    /// Questions in fixed catalog order.
    pub questions: Vec<Question>,
}

/// The full questionnaire definition.
///
/// Section order and in-section question order are fixed by the catalog;
/// the engine never reorders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
}

impl Catalog {
    /// Iterates all questions in catalog traversal order, paired with their
    /// owning section.
    pub fn iter_questions(&self) -> impl Iterator<Item = (&Section, &Question)> {
        self.sections
            .iter()
            .flat_map(|s| s.questions.iter().map(move |q| (s, q)))
    }

    /// The identifier of the first catalog question, if any.
    ///
    /// Used as the initial navigation selection once the catalog loads.
    pub fn first_question_id(&self) -> Option<&str> {
        self.iter_questions().next().map(|(_, q)| q.id.as_str())
    }

    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Looks up a question by identifier.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.iter_questions().map(|(_, q)| q).find(|q| q.id == id)
    }
}
