//! Relational store for trivia questions and categories.
//!
//! Services hold an `Arc<dyn TriviaStore>` and never talk to a backend
//! directly. Two backends exist:
//!
//! | Backend | Selected by | Notes |
//! |---------|-------------|-------|
//! | [`PgStore`] | `DATABASE_URL=postgres://...` | migrations run at startup |
//! | [`MemoryStore`] | `DATABASE_URL=memory://` | seeded with the default categories |

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Orderings the question listings need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOrder {
    /// Category ascending, then id
    CategoryThenId,
    Id,
    /// Difficulty ascending, then id
    Difficulty,
}

#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    /// All categories ordered by id
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn get_category(&self, id: i32) -> StoreResult<Option<Category>>;

    async fn list_questions(&self, order: QuestionOrder) -> StoreResult<Vec<Question>>;

    /// Questions whose `category` equals `category_id`, ordered by id
    async fn list_questions_by_category(&self, category_id: i32) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text, ordered by id
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>>;

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Returns false when no row had that id
    async fn delete_question(&self, id: i32) -> StoreResult<bool>;

    async fn count_questions(&self) -> StoreResult<i64>;
}
