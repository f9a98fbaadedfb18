//! Questionnaire rendering configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::questionnaire::DEFAULT_PAGE_SIZE;

/// Questionnaire rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireConfig {
    /// Number of questions rendered per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for QuestionnaireConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl QuestionnaireConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(())
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
