use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Returns a random question from the selected category (or from every
/// category) that is not in `previous_questions`. When nothing is left the
/// `question` field is an empty string.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, or empty when exhausted", body = QuizResponseDto),
        (status = 400, description = "Missing previous_questions or quiz_category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> Result<Json<QuizResponseDto>> {
    let response = service.next_question(dto).await?;
    Ok(Json(response))
}
