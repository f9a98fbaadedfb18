//! Case Intake server entry point.

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use case_intake::adapters::catalog::JsonCatalogSource;
use case_intake::adapters::http::{api_routes, QuestionnaireHandlers};
use case_intake::adapters::storage::FileAnswerStore;
use case_intake::adapters::summary::HtmlSummaryCompiler;
use case_intake::application::handlers::{
    CompileSummaryHandler, DeleteAnswersHandler, ListAnswersHandler, LoadAnswersHandler,
    SaveAnswersHandler,
};
use case_intake::config::AppConfig;
use case_intake::domain::questionnaire::Pagination;
use case_intake::ports::{AnswerStore, CatalogSource, SummaryCompiler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    // The catalog is fetched once per server start; the engine treats it as
    // a completed value from then on.
    let catalog_source = JsonCatalogSource::new(&config.storage.catalog_path);
    let catalog = Arc::new(catalog_source.load().await?);

    let store: Arc<dyn AnswerStore> = Arc::new(FileAnswerStore::new(&config.storage.answers_dir));
    let compiler: Arc<dyn SummaryCompiler> = Arc::new(HtmlSummaryCompiler::new());

    let handlers = QuestionnaireHandlers::new(
        Arc::clone(&catalog),
        Pagination::new(config.questionnaire.page_size),
        Arc::new(SaveAnswersHandler::new(Arc::clone(&store))),
        Arc::new(LoadAnswersHandler::new(Arc::clone(&store))),
        Arc::new(ListAnswersHandler::new(Arc::clone(&store))),
        Arc::new(DeleteAnswersHandler::new(Arc::clone(&store))),
        Arc::new(CompileSummaryHandler::new(
            Arc::clone(&catalog),
            Arc::clone(&compiler),
        )),
    );

    let app = Router::new().nest("/api", api_routes(handlers));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "case-intake listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
