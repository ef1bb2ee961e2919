use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::categories::dtos::{CategoryDto, CategoryMap};
use crate::shared::deserializers::deserialize_optional_number;

/// Formatted question record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Request DTO for creating a question
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation failure rather than a malformed body. Numbers
/// may be sent as numeric strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(
        required(message = "Question text is required"),
        custom(function = "non_blank", message = "Question text must not be empty")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "Answer is required"),
        custom(function = "non_blank", message = "Answer must not be empty")
    )]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_number")]
    #[validate(
        required(message = "Difficulty is required"),
        range(min = 1, max = 5, message = "Difficulty must be between 1 and 5")
    )]
    pub difficulty: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_optional_number")]
    #[validate(
        required(message = "Category is required"),
        range(min = 1, message = "Category must be a positive id")
    )]
    pub category: Option<i32>,
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response for `GET /questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Response for `POST /questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    /// Id assigned to the new question
    pub created: i32,
    /// Page of all questions ordered by difficulty
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Response for `DELETE /questions/{id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    pub deleted: i32,
    /// Page of the remaining questions ordered by id
    pub question: Vec<QuestionDto>,
    pub total_questions: i64,
}

/// Response for `POST /search`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub success: bool,
    /// Every match, not only the requested page
    pub questions: Vec<QuestionDto>,
    /// Number of matches
    pub total_questions: usize,
    /// Category of each question on the requested page, duplicates kept
    pub current_category: Vec<CategoryDto>,
}
