use async_trait::async_trait;
use sqlx::PgPool;

use super::{QuestionOrder, StoreResult, TriviaStore};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Postgres-backed store
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run embedded migrations against the pool
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

impl std::fmt::Debug for PgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStore")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

/// Escape LIKE wildcards so the term matches literally
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories ORDER BY id"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn list_questions(&self, order: QuestionOrder) -> StoreResult<Vec<Question>> {
        let order_by = match order {
            QuestionOrder::CategoryThenId => "category, id",
            QuestionOrder::Id => "id",
            QuestionOrder::Difficulty => "difficulty, id",
        };
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY {order_by}");

        let questions = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn list_questions_by_category(&self, category_id: i32) -> StoreResult<Vec<Question>> {
        let sql =
            format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id");

        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let sql = format!(
            r#"SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"#
        );

        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn get_question(&self, id: i32) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");

        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let sql = format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Question>(&sql)
            .bind(question.question)
            .bind(question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
