#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;

use crate::core::app::build_router;
use crate::core::config::{AppConfig, SwaggerConfig};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{
    MemoryStore, QuestionOrder, StoreError, StoreResult, TriviaStore,
};
use crate::shared::constants::DEFAULT_CATEGORIES;

pub const SAMPLE_QUESTION_COUNT: usize = 14;

const SAMPLE_QUESTIONS: [(i32, &str, &str, i32, i32); SAMPLE_QUESTION_COUNT] = [
    (1, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    (2, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (3, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    (5, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    (6, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    (7, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (8, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (9, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (10, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    (11, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (12, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (13, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (14, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
];

/// Default categories plus fourteen questions; Sports has none
pub fn sample_store() -> Arc<dyn TriviaStore> {
    let categories = DEFAULT_CATEGORIES
        .iter()
        .map(|(id, kind)| Category {
            id: *id,
            kind: kind.to_string(),
        })
        .collect();

    let questions = SAMPLE_QUESTIONS
        .iter()
        .map(|(id, question, answer, category, difficulty)| Question {
            id: *id,
            question: question.to_string(),
            answer: answer.to_string(),
            category: *category,
            difficulty: *difficulty,
        })
        .collect();

    Arc::new(MemoryStore::with_data(categories, questions))
}

/// Store whose every call fails, for exercising error paths
pub fn failing_store() -> Arc<dyn TriviaStore> {
    Arc::new(FailingStore)
}

struct FailingStore;

impl FailingStore {
    fn fail<T>() -> StoreResult<T> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

#[async_trait]
impl TriviaStore for FailingStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Self::fail()
    }

    async fn get_category(&self, _id: i32) -> StoreResult<Option<Category>> {
        Self::fail()
    }

    async fn list_questions(&self, _order: QuestionOrder) -> StoreResult<Vec<Question>> {
        Self::fail()
    }

    async fn list_questions_by_category(&self, _category_id: i32) -> StoreResult<Vec<Question>> {
        Self::fail()
    }

    async fn search_questions(&self, _term: &str) -> StoreResult<Vec<Question>> {
        Self::fail()
    }

    async fn get_question(&self, _id: i32) -> StoreResult<Option<Question>> {
        Self::fail()
    }

    async fn insert_question(&self, _question: NewQuestion) -> StoreResult<Question> {
        Self::fail()
    }

    async fn delete_question(&self, _id: i32) -> StoreResult<bool> {
        Self::fail()
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Self::fail()
    }
}

fn server_for(store: Arc<dyn TriviaStore>) -> TestServer {
    let router = build_router(&AppConfig::default(), &SwaggerConfig::default(), store);
    TestServer::new(router).unwrap()
}

pub fn sample_server() -> TestServer {
    server_for(sample_store())
}

/// Server over a store with no categories and no questions
pub fn empty_server() -> TestServer {
    server_for(Arc::new(MemoryStore::with_data(Vec::new(), Vec::new())))
}

pub fn failing_server() -> TestServer {
    server_for(failing_store())
}
