//! HTTP routes for the questionnaire API.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    compile_summary, delete_answers, get_questions, get_view, list_answers, load_answers,
    save_answers, QuestionnaireHandlers,
};

/// Creates the API router with all questionnaire endpoints.
pub fn api_routes(handlers: QuestionnaireHandlers) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/questionnaire/view", post(get_view))
        .route("/compile_summary", post(compile_summary))
        .route("/answers/save", post(save_answers))
        .route("/answers/load", get(load_answers))
        .route("/answers/list", get(list_answers))
        .route("/answers/delete", post(delete_answers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(handlers)
}
