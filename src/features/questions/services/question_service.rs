use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryDto};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionDto, QuestionListResponseDto, SearchQuestionsResponseDto,
};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{QuestionOrder, StoreError, TriviaStore};
use crate::shared::types::PaginationQuery;

fn format_all(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(Into::into).collect()
}

/// Service for question operations
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of questions ordered by category then id, plus the category map
    pub async fn list(&self, page: &PaginationQuery) -> Result<QuestionListResponseDto> {
        let questions = self
            .store
            .list_questions(QuestionOrder::CategoryThenId)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions: {:?}", e);
                AppError::Store(e)
            })?;

        let current = page.paginate(&format_all(questions));
        if current.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {}",
                page.page
            )));
        }

        let categories = self.store.list_categories().await?;
        let total_questions = self.store.count_questions().await?;

        Ok(QuestionListResponseDto {
            success: true,
            questions: current,
            total_questions,
            categories: category_map(categories),
        })
    }

    /// Delete a question and return the remaining questions ordered by id.
    ///
    /// Unknown ids are a 404; any store failure is reported as unprocessable.
    pub async fn delete(&self, id: i32, page: &PaginationQuery) -> Result<DeleteQuestionResponseDto> {
        let unprocessable = |e: StoreError| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable(format!("Question {} could not be deleted", id))
        };
        let not_found = || AppError::NotFound(format!("Question {} not found", id));

        let question = self
            .store
            .get_question(id)
            .await
            .map_err(unprocessable)?
            .ok_or_else(not_found)?;

        // a concurrent delete may have won the race
        if !self
            .store
            .delete_question(question.id)
            .await
            .map_err(unprocessable)?
        {
            return Err(not_found());
        }

        tracing::info!("Question deleted: id={}", question.id);

        let remaining = self
            .store
            .list_questions(QuestionOrder::Id)
            .await
            .map_err(unprocessable)?;
        let total_questions = self.store.count_questions().await.map_err(unprocessable)?;

        Ok(DeleteQuestionResponseDto {
            success: true,
            deleted: question.id,
            question: page.paginate(&format_all(remaining)),
            total_questions,
        })
    }

    /// Persist a new question and return a page of all questions ordered by difficulty
    pub async fn create(
        &self,
        dto: CreateQuestionDto,
        page: &PaginationQuery,
    ) -> Result<CreateQuestionResponseDto> {
        let new_question = NewQuestion::try_from(dto)?;

        let created = self
            .store
            .insert_question(new_question)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:?}", e);
                AppError::Internal(format!("Question could not be created: {}", e))
            })?;

        tracing::info!(
            "Question created: id={}, category={}, difficulty={}",
            created.id,
            created.category,
            created.difficulty
        );

        let questions = self.store.list_questions(QuestionOrder::Difficulty).await?;
        let total_questions = self.store.count_questions().await?;

        Ok(CreateQuestionResponseDto {
            success: true,
            created: created.id,
            questions: page.paginate(&format_all(questions)),
            total_questions,
        })
    }

    /// Case-insensitive substring search on the question text.
    ///
    /// `questions` carries every match; `current_category` carries the category
    /// of each question on the requested page. Store failures surface as 404.
    pub async fn search(
        &self,
        term: &str,
        page: &PaginationQuery,
    ) -> Result<SearchQuestionsResponseDto> {
        let not_found = || AppError::NotFound(format!("No questions match '{}'", term));
        let lookup_failed = |e: StoreError| {
            tracing::error!("Error searching for '{}': {:?}", term, e);
            not_found()
        };

        let matches = format_all(self.store.search_questions(term).await.map_err(lookup_failed)?);
        if matches.is_empty() {
            return Err(not_found());
        }

        let categories = category_map(self.store.list_categories().await.map_err(lookup_failed)?);
        let current_category = page
            .paginate(&matches)
            .into_iter()
            .filter_map(|q| {
                categories.get(&q.category).map(|kind| CategoryDto {
                    id: q.category,
                    kind: kind.clone(),
                })
            })
            .collect();

        Ok(SearchQuestionsResponseDto {
            success: true,
            total_questions: matches.len(),
            questions: matches,
            current_category,
        })
    }
}
