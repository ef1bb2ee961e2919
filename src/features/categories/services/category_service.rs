use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    category_map, CategoryListResponseDto, CategoryQuestionsResponseDto,
};
use crate::features::questions::dtos::QuestionDto;
use crate::modules::store::TriviaStore;
use crate::shared::types::PaginationQuery;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Every category as an id -> type map
    pub async fn list(&self) -> Result<CategoryListResponseDto> {
        let categories = self.store.list_categories().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Store(e)
        })?;

        let total_categories = categories.len();
        Ok(CategoryListResponseDto {
            success: true,
            categories: category_map(categories),
            total_categories,
        })
    }

    /// One page of questions in a category.
    ///
    /// An unknown category is a 404; a known category without questions is an
    /// empty page.
    pub async fn list_questions(
        &self,
        category_id: i32,
        page: &PaginationQuery,
    ) -> Result<CategoryQuestionsResponseDto> {
        let category = self
            .store
            .get_category(category_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", category_id, e);
                AppError::Store(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

        let questions: Vec<QuestionDto> = self
            .store
            .list_questions_by_category(category.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions of category {}: {:?}", category.id, e);
                AppError::Store(e)
            })?
            .into_iter()
            .map(Into::into)
            .collect();

        let total_questions = self.store.count_questions().await?;

        Ok(CategoryQuestionsResponseDto {
            success: true,
            questions: page.paginate(&questions),
            total_questions,
            current_category: category.kind,
        })
    }
}
