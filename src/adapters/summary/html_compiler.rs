//! HTML Summary Compiler Adapter
//!
//! Renders the answered questionnaire as a section-by-section HTML list,
//! including the slider impact value and its explanation where present.

use async_trait::async_trait;

use crate::domain::answers::{explanation_key, slider_key, AnswerMap, AnswerValue};
use crate::domain::catalog::Catalog;
use crate::ports::{SummaryCompiler, SummaryError};

/// Pure HTML renderer over the catalog and answers.
#[derive(Debug, Clone, Default)]
pub struct HtmlSummaryCompiler;

impl HtmlSummaryCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous rendering core; the port wrapper just awaits nothing.
    pub fn render(catalog: &Catalog, answers: &AnswerMap) -> String {
        let mut parts: Vec<String> = Vec::new();

        for section in &catalog.sections {
            parts.push(format!("<h3>{}</h3>", escape(&section.title)));
            parts.push("<ul>".to_string());

            for q in &section.questions {
                let value = answers.get(&q.id).map(display_value).unwrap_or_default();
                parts.push(format!(
                    "<li><strong>{}:</strong> {}</li>",
                    escape(&q.label),
                    escape(&value)
                ));

                if q.slider {
                    if let Some(impact) =
                        answers.get(&slider_key(&q.id)).and_then(|v| v.as_number())
                    {
                        parts.push(format!("<li>Impact: {impact}</li>"));
                    }
                    if let Some(explanation) = answers
                        .get(&explanation_key(&q.id))
                        .and_then(|v| v.as_text())
                        .filter(|t| !t.is_empty())
                    {
                        parts.push(format!("<li>Explanation: {}</li>", escape(explanation)));
                    }
                }
            }

            parts.push("</ul>".to_string());
        }

        parts.join("\n")
    }
}

fn display_value(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) => s.clone(),
        AnswerValue::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[async_trait]
impl SummaryCompiler for HtmlSummaryCompiler {
    async fn compile(
        &self,
        catalog: &Catalog,
        answers: &AnswerMap,
    ) -> Result<String, SummaryError> {
        Ok(Self::render(catalog, answers))
    }
}
