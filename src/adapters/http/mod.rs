//! HTTP surface for the questionnaire.
//!
//! Thin request/response plumbing over the application handlers and the
//! pure engine; no questionnaire logic lives here.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CompileSummaryRequest, CompileSummaryResponse, ErrorResponse, ListAnswersResponse,
    LoadAnswersResponse, ProgressDto, SaveAnswersRequest, SectionGroupDto, ViewRequest,
    ViewResponse, VisibleQuestionDto,
};
pub use handlers::QuestionnaireHandlers;
pub use routes::api_routes;
