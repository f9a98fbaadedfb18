//! Dependency resolver for conditional questions.
//!
//! A conditional expression is the serialized pair `"<dep_id>,<value>"`.
//! The value may be wrapped in single or double quotes, which are stripped
//! before comparison. Resolution is a pure function of the expression and
//! the current answers; it never fails.

use crate::domain::answers::AnswerMap;
use crate::domain::catalog::Question;

/// A parsed conditional expression, borrowing from the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalExpression<'a> {
    /// Identifier of the question this one depends on.
    pub dependency_id: &'a str,
    /// Required answer value; `None` when the expression had no comma.
    pub required_value: Option<&'a str>,
}

impl<'a> ConditionalExpression<'a> {
    /// Parses a raw expression.
    ///
    /// Splits on the first comma and trims both halves. A missing comma
    /// leaves `required_value` as `None`, which can never match any stored
    /// answer, so such a question stays hidden. That is deliberate
    /// defensive behavior, not an error.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(',') {
            Some((id, value)) => Self {
                dependency_id: id.trim(),
                required_value: Some(strip_quotes(value.trim())),
            },
            None => Self {
                dependency_id: raw.trim(),
                required_value: None,
            },
        }
    }

    /// True iff the dependency's stored answer equals the required value.
    ///
    /// Exact string equality: a numeric answer never matches, and no
    /// coercion is applied ("Yes"/"No" are stored as display strings).
    pub fn is_met(&self, answers: &AnswerMap) -> bool {
        let Some(required) = self.required_value else {
            return false;
        };
        answers
            .get(self.dependency_id)
            .and_then(|v| v.as_text())
            .is_some_and(|actual| actual == required)
    }
}

/// Strips one leading and one trailing quote character (single or double).
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
    value.strip_suffix(['\'', '"']).unwrap_or(value)
}

/// Decides whether `question` is currently shown.
///
/// Questions without a conditional expression are shown unconditionally.
pub fn is_satisfied(question: &Question, answers: &AnswerMap) -> bool {
    match question.conditional_on.as_deref() {
        None => true,
        Some(raw) => ConditionalExpression::parse(raw).is_met(answers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerPatch;
    use crate::domain::catalog::QuestionType;

    fn question(conditional_on: Option<&str>) -> Question {
        Question {
            id: "q".to_string(),
            label: "Q".to_string(),
            kind: QuestionType::ShortText,
            parameters: None,
            conditional_on: conditional_on.map(str::to_string),
            mandatory: false,
            slider: false,
            default_slider_value: None,
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
        let mut map = AnswerMap::new();
        for (k, v) in pairs {
            map.apply(AnswerPatch::answer(*k, *v));
        }
        map
    }

    // ───────────────────────────────────────────────────────────────
    // Parsing
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn parse_splits_on_first_comma_and_trims() {
        let expr = ConditionalExpression::parse(" q1 , Yes ");
        assert_eq!(expr.dependency_id, "q1");
        assert_eq!(expr.required_value, Some("Yes"));
    }

    #[test]
    fn parse_strips_single_and_double_quotes() {
        assert_eq!(
            ConditionalExpression::parse("q1,'Yes'").required_value,
            Some("Yes")
        );
        assert_eq!(
            ConditionalExpression::parse("q1,\"No\"").required_value,
            Some("No")
        );
    }

    #[test]
    fn parse_strips_at_most_one_quote_per_side() {
        assert_eq!(
            ConditionalExpression::parse("q1,''Yes''").required_value,
            Some("'Yes'")
        );
    }

    #[test]
    fn parse_keeps_commas_inside_value() {
        let expr = ConditionalExpression::parse("q1,'a, b'");
        assert_eq!(expr.required_value, Some("a, b"));
    }

    #[test]
    fn parse_without_comma_has_no_required_value() {
        let expr = ConditionalExpression::parse("onlyid");
        assert_eq!(expr.dependency_id, "onlyid");
        assert_eq!(expr.required_value, None);
    }

    // ───────────────────────────────────────────────────────────────
    // Satisfaction
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn unconditional_question_is_always_satisfied() {
        assert!(is_satisfied(&question(None), &AnswerMap::new()));
    }

    #[test]
    fn satisfied_when_answer_matches_exactly() {
        let q = question(Some("q1,'Yes'"));
        assert!(is_satisfied(&q, &answers(&[("q1", "Yes")])));
        assert!(!is_satisfied(&q, &answers(&[("q1", "No")])));
        assert!(!is_satisfied(&q, &answers(&[("q1", "yes")])));
    }

    #[test]
    fn unanswered_dependency_is_not_satisfied() {
        let q = question(Some("q1,Yes"));
        assert!(!is_satisfied(&q, &AnswerMap::new()));
        assert!(!is_satisfied(&q, &answers(&[("q1", "")])));
    }

    #[test]
    fn malformed_expression_hides_question_regardless_of_answers() {
        let q = question(Some("onlyid"));
        assert!(!is_satisfied(&q, &AnswerMap::new()));
        assert!(!is_satisfied(&q, &answers(&[("onlyid", "Yes")])));
    }

    #[test]
    fn numeric_answer_never_matches_string_value() {
        let q = question(Some("q1,42"));
        let mut map = AnswerMap::new();
        map.apply(AnswerPatch::answer("q1", 42.0));
        assert!(!is_satisfied(&q, &map));

        // The display-string form does match.
        assert!(is_satisfied(&q, &answers(&[("q1", "42")])));
    }
}
