use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;
use crate::shared::deserializers::deserialize_optional_number;

/// Category selected for the quiz
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category ID; absent, `0` or unknown means every category
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub id: Option<i32>,
}

/// Request DTO for drawing the next quiz question
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids of the questions already asked in this quiz
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategoryDto,
}

fn question_or_empty<S>(question: &Option<QuestionDto>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Response for `POST /quizzes`
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponseDto {
    pub success: bool,
    /// Next question, or `""` once the pool is exhausted
    #[serde(serialize_with = "question_or_empty")]
    pub question: Option<QuestionDto>,
}
