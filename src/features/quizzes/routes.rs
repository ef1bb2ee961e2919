use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::quizzes::handlers;
use crate::features::quizzes::services::QuizService;

/// Create routes for the quizzes feature
pub fn routes(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/quizzes", post(handlers::next_quiz_question))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::sample_server;

    #[tokio::test]
    async fn test_quiz_in_category() {
        let server = sample_server();

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [12, 13],
                "quiz_category": { "type": "Science", "id": 1 }
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["id"], 14);
        assert_eq!(body["question"]["category"], 1);
    }

    #[tokio::test]
    async fn test_quiz_all_categories() {
        let server = sample_server();

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": { "type": "click", "id": 0 }
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert!(body["question"]["id"].is_i64());
    }

    #[tokio::test]
    async fn test_quiz_exhausted() {
        let server = sample_server();

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [12, 13, 14],
                "quiz_category": { "id": "1" }
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["question"], "");
    }

    #[tokio::test]
    async fn test_quiz_missing_fields() {
        let server = sample_server();

        let response = server
            .post("/quizzes")
            .json(&json!({ "quiz_category": { "id": 1 } }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 400);
        assert_eq!(body["message"], "Bad request");

        server
            .post("/quizzes")
            .json(&json!({ "previous_questions": [] }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_quiz_without_body() {
        let server = sample_server();

        let response = server.post("/quizzes").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 400);
        assert_eq!(body["message"], "Bad request");
    }
}
