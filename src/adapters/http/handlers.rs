//! HTTP handlers for the questionnaire endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    CompileSummaryCommand, CompileSummaryHandler, DeleteAnswersCommand, DeleteAnswersHandler,
    ListAnswersHandler, LoadAnswersCommand, LoadAnswersHandler, SaveAnswersCommand,
    SaveAnswersHandler,
};
use crate::domain::catalog::Catalog;
use crate::domain::questionnaire::{Pagination, QuestionnaireView};
use crate::ports::AnswerStoreError;

use super::dto::{
    CompileSummaryRequest, CompileSummaryResponse, ErrorResponse, ListAnswersResponse,
    LoadAnswersResponse, SaveAnswersRequest, ViewRequest, ViewResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuestionnaireHandlers {
    catalog: Arc<Catalog>,
    pagination: Pagination,
    save_handler: Arc<SaveAnswersHandler>,
    load_handler: Arc<LoadAnswersHandler>,
    list_handler: Arc<ListAnswersHandler>,
    delete_handler: Arc<DeleteAnswersHandler>,
    compile_handler: Arc<CompileSummaryHandler>,
}

impl QuestionnaireHandlers {
    pub fn new(
        catalog: Arc<Catalog>,
        pagination: Pagination,
        save_handler: Arc<SaveAnswersHandler>,
        load_handler: Arc<LoadAnswersHandler>,
        list_handler: Arc<ListAnswersHandler>,
        delete_handler: Arc<DeleteAnswersHandler>,
        compile_handler: Arc<CompileSummaryHandler>,
    ) -> Self {
        Self {
            catalog,
            pagination,
            save_handler,
            load_handler,
            list_handler,
            delete_handler,
            compile_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - The full question catalog.
pub async fn get_questions(State(handlers): State<QuestionnaireHandlers>) -> Response {
    Json(handlers.catalog.as_ref().clone()).into_response()
}

/// POST /api/questionnaire/view - Recompute the view for the given answers.
pub async fn get_view(
    State(handlers): State<QuestionnaireHandlers>,
    Json(req): Json<ViewRequest>,
) -> Response {
    let view = QuestionnaireView::build(&handlers.catalog, &req.answers, handlers.pagination);
    Json(ViewResponse::from_view(&view, req.page)).into_response()
}

/// POST /api/compile_summary - Compile answers into the summary document.
pub async fn compile_summary(
    State(handlers): State<QuestionnaireHandlers>,
    Json(req): Json<CompileSummaryRequest>,
) -> Response {
    match handlers
        .compile_handler
        .execute(CompileSummaryCommand {
            answers: req.answers,
        })
        .await
    {
        Ok(html) => Json(CompileSummaryResponse { html }).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

/// POST /api/answers/save - Save an answer set under a filename key.
pub async fn save_answers(
    State(handlers): State<QuestionnaireHandlers>,
    Json(req): Json<SaveAnswersRequest>,
) -> Response {
    let command = SaveAnswersCommand {
        file_name: req.file_name,
        client: req.client,
        answers: req.answers,
    };
    match handlers.save_handler.execute(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}

/// GET /api/answers/load?file= - Load a saved answer set.
pub async fn load_answers(
    State(handlers): State<QuestionnaireHandlers>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(file_name) = params.get("file").cloned() else {
        return error_response(StatusCode::BAD_REQUEST, "missing 'file' parameter");
    };

    match handlers
        .load_handler
        .execute(LoadAnswersCommand { file_name })
        .await
    {
        Ok(set) => Json(LoadAnswersResponse {
            client: set.client,
            answers: set.answers,
            saved_at: set.saved_at,
        })
        .into_response(),
        Err(err) => store_error_response(err),
    }
}

/// GET /api/answers/list - List saved answer sets.
pub async fn list_answers(State(handlers): State<QuestionnaireHandlers>) -> Response {
    match handlers.list_handler.execute().await {
        Ok(files) => Json(ListAnswersResponse { files }).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// POST /api/answers/delete - Delete a saved answer set.
pub async fn delete_answers(
    State(handlers): State<QuestionnaireHandlers>,
    Json(req): Json<serde_json::Value>,
) -> Response {
    let Some(file_name) = req.get("file_name").and_then(|v| v.as_str()) else {
        return error_response(StatusCode::BAD_REQUEST, "missing 'file_name' field");
    };

    match handlers
        .delete_handler
        .execute(DeleteAnswersCommand {
            file_name: file_name.to_string(),
        })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn store_error_response(err: AnswerStoreError) -> Response {
    let status = match &err {
        AnswerStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        AnswerStoreError::InvalidFileName(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
