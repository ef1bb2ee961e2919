use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/{id}", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
        .route("/questions/search", post(handlers::search_questions))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{failing_server, sample_server, SAMPLE_QUESTION_COUNT};

    fn ids(body: &Value, key: &str) -> Vec<i64> {
        body[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_list_questions_first_page() {
        let server = sample_server();

        let response = server.get("/questions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["total_questions"], SAMPLE_QUESTION_COUNT);
        assert_eq!(body["categories"]["1"], "Science");

        let first = &body["questions"][0];
        for key in ["id", "question", "answer", "difficulty", "category"] {
            assert!(first.get(key).is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn test_list_questions_ordered_by_category_then_id() {
        let server = sample_server();

        let body: Value = server.get("/questions").await.json();
        let categories: Vec<i64> = body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["category"].as_i64().unwrap())
            .collect();

        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[tokio::test]
    async fn test_list_questions_second_page() {
        let server = sample_server();

        let response = server.get("/questions").add_query_param("page", 2).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body["questions"].as_array().unwrap().len(),
            SAMPLE_QUESTION_COUNT - 10
        );
    }

    #[tokio::test]
    async fn test_list_questions_page_out_of_range() {
        let server = sample_server();

        let response = server.get("/questions").add_query_param("page", 1000).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Resource not found");
    }

    #[tokio::test]
    async fn test_list_questions_malformed_page_is_first_page() {
        let server = sample_server();

        let response = server.get("/questions").add_query_param("page", "two").await;
        response.assert_status_ok();

        let first: Value = server.get("/questions").await.json();
        let body: Value = response.json();
        assert_eq!(ids(&body, "questions"), ids(&first, "questions"));
    }

    #[tokio::test]
    async fn test_delete_question() {
        let server = sample_server();

        let response = server.delete("/questions/4").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["deleted"], 4);
        assert_eq!(body["total_questions"], SAMPLE_QUESTION_COUNT - 1);
        assert!(!ids(&body, "question").contains(&4));

        // gone for good
        let listed: Value = server.get("/questions").await.json();
        assert_eq!(listed["total_questions"], SAMPLE_QUESTION_COUNT - 1);
        let mut all = ids(&listed, "questions");
        let second: Value = server
            .get("/questions")
            .add_query_param("page", 2)
            .await
            .json();
        all.extend(ids(&second, "questions"));
        assert!(!all.contains(&4));

        server
            .delete("/questions/4")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_remaining_are_ordered_by_id() {
        let server = sample_server();

        let body: Value = server.delete("/questions/1").await.json();
        let remaining = ids(&body, "question");

        assert_eq!(remaining, (2..=11).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_delete_unknown_question() {
        let server = sample_server();

        let response = server.delete("/questions/1000").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id_is_not_found() {
        let server = sample_server();

        let response = server.delete("/questions/abc").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Resource not found");
    }

    #[tokio::test]
    async fn test_delete_store_failure() {
        let server = failing_server();

        let response = server.delete("/questions/1").await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["error"], 422);
        assert_eq!(body["message"], "Unprocessable");
    }

    #[tokio::test]
    async fn test_create_question() {
        let server = sample_server();
        let before: Value = server.get("/questions").await.json();

        let response = server
            .post("/questions")
            .json(&json!({
                "question": "What is the heaviest organ in the human body?",
                "answer": "The Liver",
                "difficulty": 4,
                "category": 1
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let created = body["created"].as_i64().unwrap();
        assert!(created > SAMPLE_QUESTION_COUNT as i64);
        assert_eq!(body["total_questions"], SAMPLE_QUESTION_COUNT + 1);
        assert_ne!(before["total_questions"], body["total_questions"]);

        // page is ordered by difficulty
        let difficulties: Vec<i64> = body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["difficulty"].as_i64().unwrap())
            .collect();
        let mut sorted = difficulties.clone();
        sorted.sort();
        assert_eq!(difficulties, sorted);
    }

    #[tokio::test]
    async fn test_create_question_ids_are_unique() {
        let server = sample_server();
        let payload = json!({
            "question": "Who?",
            "answer": "Me",
            "difficulty": "2",
            "category": "3"
        });

        let first: Value = server.post("/questions").json(&payload).await.json();
        let second: Value = server.post("/questions").json(&payload).await.json();

        assert_ne!(first["created"], second["created"]);
    }

    #[tokio::test]
    async fn test_create_question_empty_answer() {
        let server = sample_server();

        let response = server
            .post("/questions")
            .json(&json!({
                "question": "Who?",
                "answer": "",
                "difficulty": 1,
                "category": 1
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_question_missing_fields() {
        let server = sample_server();

        let response = server
            .post("/questions")
            .json(&json!({ "question": "Who?" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_question_store_failure() {
        let server = failing_server();

        let response = server
            .post("/questions")
            .json(&json!({
                "question": "Who?",
                "answer": "Me",
                "difficulty": 1,
                "category": 1
            }))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["error"], 500);
    }

    #[tokio::test]
    async fn test_search_questions() {
        let server = sample_server();

        let response = server
            .post("/search")
            .json(&json!({ "searchTerm": "TITLE" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(body["total_questions"], 2);
        assert!(questions
            .iter()
            .all(|q| q["question"].as_str().unwrap().to_lowercase().contains("title")));
        assert_eq!(body["current_category"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_returns_every_match() {
        let server = sample_server();

        let body: Value = server
            .post("/questions/search")
            .json(&json!({ "searchTerm": "?" }))
            .await
            .json();

        // every sample question ends with '?', more than one page worth
        assert_eq!(body["total_questions"], SAMPLE_QUESTION_COUNT);
        assert_eq!(
            body["questions"].as_array().unwrap().len(),
            SAMPLE_QUESTION_COUNT
        );
        assert_eq!(body["current_category"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let server = sample_server();

        let response = server
            .post("/search")
            .json(&json!({ "searchTerm": "zzzzqqq" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["success"], false);
    }

    #[tokio::test]
    async fn test_search_without_term() {
        let server = sample_server();

        let response = server.post("/search").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["message"], "Bad request");
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }
}
