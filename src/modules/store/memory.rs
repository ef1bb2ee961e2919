use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuestionOrder, StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::constants::DEFAULT_CATEGORIES;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// In-process store. Ids are never reused, matching a database sequence.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Store holding the default trivia categories and no questions
    pub fn seeded() -> Self {
        Self::with_data(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, kind)| Category {
                    id: *id,
                    kind: kind.to_string(),
                })
                .collect(),
            Vec::new(),
        )
    }

    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            next_question_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.clone(),
            })
            .collect())
    }

    async fn get_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).map(|kind| Category {
            id,
            kind: kind.clone(),
        }))
    }

    async fn list_questions(&self, order: QuestionOrder) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        // BTreeMap iteration is already id order, and sort_by_key is stable
        let mut questions: Vec<Question> = tables.questions.values().cloned().collect();
        match order {
            QuestionOrder::Id => {}
            QuestionOrder::CategoryThenId => questions.sort_by_key(|q| q.category),
            QuestionOrder::Difficulty => questions.sort_by_key(|q| q.difficulty),
        }
        Ok(questions)
    }

    async fn list_questions_by_category(&self, category_id: i32) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let created = Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.insert(id, created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.questions.len() as i64)
    }
}
