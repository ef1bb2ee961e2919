use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::list_category_questions),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::shared::test_helpers::{empty_server, sample_server, SAMPLE_QUESTION_COUNT};

    #[tokio::test]
    async fn test_list_categories() {
        let server = sample_server();

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["total_categories"], 6);
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["6"], "Sports");
    }

    #[tokio::test]
    async fn test_list_categories_empty_table_is_not_an_error() {
        let server = empty_server();

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"], serde_json::json!({}));
        assert_eq!(body["total_categories"], 0);
    }

    #[tokio::test]
    async fn test_category_questions() {
        let server = sample_server();

        let response = server.get("/categories/1/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["current_category"], "Science");
        let questions = body["questions"].as_array().unwrap();
        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| q["category"] == 1));
        // total counts the whole store
        assert_eq!(body["total_questions"], SAMPLE_QUESTION_COUNT);
    }

    #[tokio::test]
    async fn test_category_without_questions_is_empty_page() {
        let server = sample_server();

        let response = server.get("/categories/6/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["questions"], serde_json::json!([]));
        assert_eq!(body["current_category"], "Sports");
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let server = sample_server();

        let response = server.get("/categories/1000/questions").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Resource not found");
    }

    #[tokio::test]
    async fn test_out_of_range_category_id_is_not_found() {
        let server = sample_server();

        let response = server.get("/categories/99999999999/questions").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Resource not found");
    }
}
