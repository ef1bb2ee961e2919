use sqlx::FromRow;

use crate::core::error::AppError;
use crate::features::questions::dtos::{CreateQuestionDto, QuestionDto};

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Soft reference to `categories.id`, not enforced
    pub category: i32,
    pub difficulty: i32,
}

/// Question about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

impl TryFrom<CreateQuestionDto> for NewQuestion {
    type Error = AppError;

    fn try_from(dto: CreateQuestionDto) -> Result<Self, Self::Error> {
        match (dto.question, dto.answer, dto.category, dto.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(Self {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(AppError::Validation(
                "question, answer, category and difficulty are required".to_string(),
            )),
        }
    }
}
