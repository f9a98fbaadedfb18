//! HTTP DTOs for the questionnaire endpoints.
//!
//! These types decouple the HTTP API from the borrow-based engine types:
//! the engine's visible list borrows from the catalog, while responses
//! need owned data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::answers::AnswerMap;
use crate::domain::catalog::QuestionType;
use crate::domain::questionnaire::{Progress, QuestionnaireView, SectionGroup, VisibleQuestion};
use crate::ports::{ClientInfo, SavedEntry};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request for the current questionnaire view.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewRequest {
    pub answers: AnswerMap,
    /// Page to render; defaults to the first page.
    #[serde(default)]
    pub page: usize,
}

/// Request to compile the summary document.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileSummaryRequest {
    pub answers: AnswerMap,
}

/// Request to save the current answers.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveAnswersRequest {
    pub file_name: String,
    pub client: ClientInfo,
    pub answers: AnswerMap,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One visible question with its display annotations.
#[derive(Debug, Clone, Serialize)]
pub struct VisibleQuestionDto {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
    pub mandatory: bool,
    pub slider: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_slider_value: Option<f64>,
    pub level: usize,
    pub index: usize,
    pub section_number: u32,
    pub section_title: String,
}

impl From<&VisibleQuestion<'_>> for VisibleQuestionDto {
    fn from(v: &VisibleQuestion<'_>) -> Self {
        Self {
            id: v.question.id.clone(),
            label: v.question.label.clone(),
            kind: v.question.kind,
            parameters: v.question.parameters.clone(),
            mandatory: v.question.mandatory,
            slider: v.question.slider,
            default_slider_value: v.question.default_slider_value,
            level: v.level,
            index: v.index,
            section_number: v.section_number,
            section_title: v.section_title.to_string(),
        }
    }
}

/// Answered-versus-total progress.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressDto {
    pub answered: usize,
    pub total: usize,
    /// Unrounded; presentation rounds for display.
    pub percent: f64,
}

impl From<Progress> for ProgressDto {
    fn from(p: Progress) -> Self {
        Self {
            answered: p.answered,
            total: p.total,
            percent: p.percent(),
        }
    }
}

/// Visible questions of one section, for the sidebar index.
#[derive(Debug, Clone, Serialize)]
pub struct SectionGroupDto {
    pub section_number: u32,
    pub section_title: String,
    pub questions: Vec<VisibleQuestionDto>,
}

impl From<&SectionGroup<'_>> for SectionGroupDto {
    fn from(g: &SectionGroup<'_>) -> Self {
        Self {
            section_number: g.section_number,
            section_title: g.section_title.to_string(),
            questions: g.questions.iter().map(VisibleQuestionDto::from).collect(),
        }
    }
}

/// The full render output for one page of the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse {
    /// The questions on the requested page.
    pub questions: Vec<VisibleQuestionDto>,
    pub progress: ProgressDto,
    pub page: usize,
    pub total_pages: usize,
    pub sections: Vec<SectionGroupDto>,
}

impl ViewResponse {
    pub fn from_view(view: &QuestionnaireView<'_>, page: usize) -> Self {
        Self {
            questions: view.page(page).iter().map(VisibleQuestionDto::from).collect(),
            progress: view.progress.into(),
            page,
            total_pages: view.total_pages(),
            sections: view.sections.iter().map(SectionGroupDto::from).collect(),
        }
    }
}

/// Compiled summary document.
#[derive(Debug, Clone, Serialize)]
pub struct CompileSummaryResponse {
    pub html: String,
}

/// A loaded answer set.
#[derive(Debug, Clone, Serialize)]
pub struct LoadAnswersResponse {
    pub client: ClientInfo,
    pub answers: AnswerMap,
    pub saved_at: DateTime<Utc>,
}

/// Directory of saved answer sets.
#[derive(Debug, Clone, Serialize)]
pub struct ListAnswersResponse {
    pub files: Vec<SavedEntry>,
}

/// Error payload for all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
