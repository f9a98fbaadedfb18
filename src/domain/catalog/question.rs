//! Question definition and type tags.

use serde::{Deserialize, Serialize};

/// The input widget a question renders as.
///
/// Tags match the catalog wire format. Unknown tags degrade to
/// [`QuestionType::FreeText`] so a catalog revision cannot break loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum QuestionType {
    #[serde(rename = "short text")]
    ShortText,
    #[serde(rename = "middle text")]
    MediumText,
    #[serde(rename = "long text")]
    LongText,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "yesno")]
    YesNo,
    #[serde(rename = "multiple choice")]
    MultipleChoice,
    /// Display-only heading; collects no answer.
    #[serde(rename = "label")]
    Label,
    /// Fallback for unrecognized type tags.
    #[serde(rename = "free text")]
    FreeText,
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "short text" => QuestionType::ShortText,
            "middle text" => QuestionType::MediumText,
            "long text" => QuestionType::LongText,
            "date" => QuestionType::Date,
            "numeric" => QuestionType::Numeric,
            "yesno" => QuestionType::YesNo,
            "multiple choice" => QuestionType::MultipleChoice,
            "label" => QuestionType::Label,
            _ => QuestionType::FreeText,
        }
    }
}

impl QuestionType {
    /// True for display-only entries that never collect an answer.
    pub fn is_label(&self) -> bool {
        matches!(self, QuestionType::Label)
    }
}

/// A single catalog question.
///
/// Immutable once loaded. The `conditional_on` expression is kept in its
/// raw serialized form `"<id>,<value>"`; parsing happens at evaluation time
/// in the dependency resolver so that malformed expressions degrade to
/// "hidden" instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the catalog.
    pub id: String,
    /// Display label shown to the user.
    pub label: String,
    /// Input widget type.
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Choice values; only meaningful for multiple-choice questions.
    #[serde(default)]
    pub parameters: Option<Vec<String>>,
    /// Raw conditional expression, `"<dep_id>,<required_value>"`.
    #[serde(default)]
    pub conditional_on: Option<String>,
    /// Whether an answer is required for submission.
    #[serde(default)]
    pub mandatory: bool,
    /// Whether the question carries a severity slider sub-answer.
    #[serde(default)]
    pub slider: bool,
    /// Initial slider position when no slider answer exists yet.
    #[serde(default)]
    pub default_slider_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_deserializes_wire_tags() {
        let t: QuestionType = serde_json::from_str("\"short text\"").unwrap();
        assert_eq!(t, QuestionType::ShortText);
        let t: QuestionType = serde_json::from_str("\"multiple choice\"").unwrap();
        assert_eq!(t, QuestionType::MultipleChoice);
        let t: QuestionType = serde_json::from_str("\"yesno\"").unwrap();
        assert_eq!(t, QuestionType::YesNo);
    }

    #[test]
    fn unknown_type_tag_falls_back_to_free_text() {
        let t: QuestionType = serde_json::from_str("\"signature pad\"").unwrap();
        assert_eq!(t, QuestionType::FreeText);
    }

    #[test]
    fn label_type_is_display_only() {
        assert!(QuestionType::Label.is_label());
        assert!(!QuestionType::ShortText.is_label());
    }

    #[test]
    fn question_deserializes_with_optional_fields_absent() {
        let q: Question = serde_json::from_str(
            r#"{"id": "q1", "label": "Full name", "type": "short text"}"#,
        )
        .unwrap();
        assert_eq!(q.id, "q1");
        assert_eq!(q.kind, QuestionType::ShortText);
        assert!(q.conditional_on.is_none());
        assert!(!q.mandatory);
        assert!(!q.slider);
        assert!(q.default_slider_value.is_none());
    }

    #[test]
    fn question_deserializes_full_shape() {
        let q: Question = serde_json::from_str(
            r#"{
                "id": "q7",
                "label": "Which office?",
                "type": "multiple choice",
                "parameters": ["HQ", "Branch"],
                "conditional_on": "q2,'Yes'",
                "mandatory": true,
                "slider": true,
                "default_slider_value": 0.5
            }"#,
        )
        .unwrap();
        assert_eq!(q.parameters.as_deref(), Some(&["HQ".to_string(), "Branch".to_string()][..]));
        assert_eq!(q.conditional_on.as_deref(), Some("q2,'Yes'"));
        assert!(q.mandatory);
        assert!(q.slider);
        assert_eq!(q.default_slider_value, Some(0.5));
    }
}
