//! Answer mapping and derived answer keys.
//!
//! Answers are keyed by question identifier, plus two derived key families:
//! `<id>_slider` for the severity slider value and `<id>_explanation` for
//! the free-text elaboration tied to a slider. The map is owned by the
//! enclosing session; the engine reads it and proposes [`AnswerPatch`]es
//! but never deletes keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored answer: either display text or a number.
///
/// Numbers appear on derived slider keys; primary answers are stored as the
/// display strings the user typed or selected (including "Yes"/"No").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
}

impl AnswerValue {
    /// True when this value counts as unanswered (the empty string).
    pub fn is_empty(&self) -> bool {
        matches!(self, AnswerValue::Text(s) if s.is_empty())
    }

    /// The text form, if this is a text answer.
    ///
    /// Numeric answers deliberately return `None`: conditional matching is
    /// strict string equality with no numeric coercion.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Number(_) => None,
        }
    }

    /// The numeric form, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

/// Derived key for a question's severity slider value.
pub fn slider_key(question_id: &str) -> String {
    format!("{question_id}_slider")
}

/// Derived key for a question's slider explanation text.
pub fn explanation_key(question_id: &str) -> String {
    format!("{question_id}_explanation")
}

/// A proposed addition or overwrite of one answer key.
///
/// The engine returns patches to its caller; applying them is the session's
/// decision. Patches never remove keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPatch {
    pub key: String,
    pub value: AnswerValue,
}

impl AnswerPatch {
    /// Patch for a question's primary answer.
    pub fn answer(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            key: question_id.into(),
            value: value.into(),
        }
    }

    /// Patch for a question's severity slider.
    pub fn slider(question_id: &str, value: f64) -> Self {
        Self {
            key: slider_key(question_id),
            value: AnswerValue::Number(value),
        }
    }

    /// Patch for a question's slider explanation.
    pub fn explanation(question_id: &str, text: impl Into<String>) -> Self {
        Self {
            key: explanation_key(question_id),
            value: AnswerValue::Text(text.into()),
        }
    }
}

/// Mapping from answer key to stored value.
///
/// A `BTreeMap` keeps serialization deterministic for the file-backed
/// answer store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, AnswerValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// True when the primary answer for `question_id` is present and
    /// non-empty. Derived slider/explanation keys are never consulted.
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.0.get(question_id).is_some_and(|v| !v.is_empty())
    }

    /// Applies a proposed patch, overwriting any existing value.
    pub fn apply(&mut self, patch: AnswerPatch) {
        self.0.insert(patch.key, patch.value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates all stored key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, AnswerValue)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
