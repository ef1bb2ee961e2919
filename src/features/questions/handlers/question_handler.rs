use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionListResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PaginationQuery};

/// List questions, ten per page
///
/// Questions are ordered by category then id. The full category map is
/// returned alongside so the client can render the sidebar.
#[utoipa::path(
    get,
    path = "/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PaginationQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let questions = service.list(&page).await?;
    Ok(Json(questions))
}

/// Create a question
#[utoipa::path(
    post,
    path = "/questions",
    params(PaginationQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Question could not be stored", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PaginationQuery>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto, &page).await?;
    Ok(Json(created))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Question could not be deleted", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
    AppQuery(page): AppQuery<PaginationQuery>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    let deleted = service.delete(id, &page).await?;
    Ok(Json(deleted))
}

/// Search questions by text
///
/// Matches are case-insensitive substrings of the question text. Served at
/// both `/search` and `/questions/search`.
#[utoipa::path(
    post,
    path = "/search",
    params(PaginationQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchQuestionsResponseDto),
        (status = 400, description = "Missing search term", body = ErrorResponse),
        (status = 404, description = "No question matches", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(page): AppQuery<PaginationQuery>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<SearchQuestionsResponseDto>> {
    let result = service.search(&dto.search_term, &page).await?;
    Ok(Json(result))
}
