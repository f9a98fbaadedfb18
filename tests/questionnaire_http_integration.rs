//! Integration tests for the questionnaire HTTP layer.
//!
//! These tests verify the wiring between the HTTP surface, the application
//! handlers, and the ports:
//! 1. Request DTOs deserialize correctly
//! 2. Response DTOs carry the engine's render output
//! 3. Handlers can be created and wired together over mock ports

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use case_intake::adapters::http::{api_routes, QuestionnaireHandlers, ViewRequest, ViewResponse};
use case_intake::adapters::summary::HtmlSummaryCompiler;
use case_intake::application::handlers::{
    CompileSummaryHandler, DeleteAnswersCommand, DeleteAnswersHandler, ListAnswersHandler,
    LoadAnswersCommand, LoadAnswersHandler, SaveAnswersCommand, SaveAnswersHandler,
};
use case_intake::domain::catalog::{Catalog, Question, QuestionType, Section};
use case_intake::domain::questionnaire::{Pagination, QuestionnaireView};
use case_intake::ports::{
    AnswerStore, AnswerStoreError, ClientInfo, SavedAnswerSet, SavedEntry, SummaryCompiler,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Mock answer store for testing
struct MockAnswerStore {
    sets: Mutex<HashMap<String, SavedAnswerSet>>,
}

impl MockAnswerStore {
    fn new() -> Self {
        Self {
            sets: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AnswerStore for MockAnswerStore {
    async fn save(&self, file_name: &str, set: &SavedAnswerSet) -> Result<(), AnswerStoreError> {
        self.sets
            .lock()
            .unwrap()
            .insert(file_name.to_string(), set.clone());
        Ok(())
    }

    async fn load(&self, file_name: &str) -> Result<SavedAnswerSet, AnswerStoreError> {
        self.sets
            .lock()
            .unwrap()
            .get(file_name)
            .cloned()
            .ok_or_else(|| AnswerStoreError::NotFound(file_name.to_string()))
    }

    async fn list(&self) -> Result<Vec<SavedEntry>, AnswerStoreError> {
        Ok(self
            .sets
            .lock()
            .unwrap()
            .iter()
            .map(|(name, set)| SavedEntry {
                file_name: name.clone(),
                client_name: set.client.client_name.clone(),
                saved_at: set.saved_at,
            })
            .collect())
    }

    async fn delete(&self, file_name: &str) -> Result<(), AnswerStoreError> {
        self.sets
            .lock()
            .unwrap()
            .remove(file_name)
            .map(|_| ())
            .ok_or_else(|| AnswerStoreError::NotFound(file_name.to_string()))
    }
}

fn test_catalog() -> Catalog {
    Catalog {
        sections: vec![Section {
            section_number: 1,
            title: "Intake".to_string(),
            questions: vec![
                Question {
                    id: "A".to_string(),
                    label: "Were you employed?".to_string(),
                    kind: QuestionType::YesNo,
                    parameters: None,
                    conditional_on: None,
                    mandatory: true,
                    slider: false,
                    default_slider_value: None,
                },
                Question {
                    id: "B".to_string(),
                    label: "Employer name".to_string(),
                    kind: QuestionType::ShortText,
                    parameters: None,
                    conditional_on: Some("A,Yes".to_string()),
                    mandatory: false,
                    slider: true,
                    default_slider_value: Some(0.5),
                },
            ],
        }],
    }
}

fn build_handlers(store: Arc<dyn AnswerStore>) -> QuestionnaireHandlers {
    let catalog = Arc::new(test_catalog());
    let compiler: Arc<dyn SummaryCompiler> = Arc::new(HtmlSummaryCompiler::new());
    QuestionnaireHandlers::new(
        Arc::clone(&catalog),
        Pagination::new(12),
        Arc::new(SaveAnswersHandler::new(Arc::clone(&store))),
        Arc::new(LoadAnswersHandler::new(Arc::clone(&store))),
        Arc::new(ListAnswersHandler::new(Arc::clone(&store))),
        Arc::new(DeleteAnswersHandler::new(Arc::clone(&store))),
        Arc::new(CompileSummaryHandler::new(catalog, compiler)),
    )
}

// =============================================================================
// DTO round-trips
// =============================================================================

#[test]
fn view_request_deserializes_answers_and_page() {
    let req: ViewRequest = serde_json::from_value(json!({
        "answers": {"A": "Yes", "B_slider": 0.25},
        "page": 1
    }))
    .unwrap();

    assert!(req.answers.is_answered("A"));
    assert_eq!(req.page, 1);
}

#[test]
fn view_response_serializes_engine_output() {
    let catalog = test_catalog();
    let answers = serde_json::from_value(json!({"A": "Yes"})).unwrap();
    let view = QuestionnaireView::build(&catalog, &answers, Pagination::new(12));
    let response = ViewResponse::from_view(&view, 0);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["total_pages"], 1);
    assert_eq!(value["progress"]["answered"], 1);
    assert_eq!(value["progress"]["total"], 2);
    assert_eq!(value["questions"][0]["id"], "A");
    assert_eq!(value["questions"][0]["type"], "yesno");
    assert_eq!(value["questions"][1]["id"], "B");
    assert_eq!(value["questions"][1]["level"], 1);
    assert_eq!(value["questions"][1]["index"], 1);
    assert_eq!(value["sections"][0]["section_title"], "Intake");
}

// =============================================================================
// Handler wiring over mock ports
// =============================================================================

#[tokio::test]
async fn save_load_list_delete_flow_through_handlers() {
    let store = Arc::new(MockAnswerStore::new());
    let save = SaveAnswersHandler::new(store.clone());
    let load = LoadAnswersHandler::new(store.clone());
    let list = ListAnswersHandler::new(store.clone());
    let delete = DeleteAnswersHandler::new(store.clone());

    save.execute(SaveAnswersCommand {
        file_name: "smith".to_string(),
        client: ClientInfo {
            client_name: "Jane Smith".to_string(),
            case_number: None,
            case_type: None,
        },
        answers: serde_json::from_value(json!({"A": "Yes"})).unwrap(),
    })
    .await
    .unwrap();

    let loaded = load
        .execute(LoadAnswersCommand {
            file_name: "smith".to_string(),
        })
        .await
        .unwrap();
    assert!(loaded.answers.is_answered("A"));
    assert_eq!(loaded.client.client_name, "Jane Smith");

    assert_eq!(list.execute().await.unwrap().len(), 1);

    delete
        .execute(DeleteAnswersCommand {
            file_name: "smith".to_string(),
        })
        .await
        .unwrap();
    assert!(list.execute().await.unwrap().is_empty());
}

#[tokio::test]
async fn router_builds_with_wired_handlers() {
    let store: Arc<dyn AnswerStore> = Arc::new(MockAnswerStore::new());
    let _router = api_routes(build_handlers(store));
}
