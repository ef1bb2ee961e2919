use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::categories::dtos::{CategoryListResponseDto, CategoryQuestionsResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ErrorResponse, PaginationQuery};

/// List all categories
///
/// Returns the categories as an `id -> type` map along with their count.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category map", body = CategoryListResponseDto),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListResponseDto>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(page): AppQuery<PaginationQuery>,
) -> Result<Json<CategoryQuestionsResponseDto>> {
    let questions = service.list_questions(id, &page).await?;
    Ok(Json(questions))
}
