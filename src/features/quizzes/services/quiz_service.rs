use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;
use crate::features::questions::models::Question;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::modules::store::{QuestionOrder, TriviaStore};
use crate::shared::constants::ALL_CATEGORIES_ID;

/// Pick one question uniformly among those not yet asked
pub fn select_question<R>(pool: Vec<Question>, previous: &[i32], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let asked: HashSet<i32> = previous.iter().copied().collect();
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();

    candidates.choose(rng).cloned()
}

/// Service drawing quiz questions
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Draw the next question for a quiz.
    ///
    /// A known category limits the pool to its questions; anything else draws
    /// from every question. An exhausted pool is not an error.
    pub async fn next_question(&self, dto: QuizRequestDto) -> Result<QuizResponseDto> {
        let category = match dto.quiz_category.id {
            Some(id) if id != ALL_CATEGORIES_ID => self.store.get_category(id).await?,
            _ => None,
        };

        let pool = match &category {
            Some(category) => self.store.list_questions_by_category(category.id).await,
            None => self.store.list_questions(QuestionOrder::Id).await,
        }
        .map_err(|e| {
            tracing::error!("Failed to load quiz questions: {:?}", e);
            AppError::Store(e)
        })?;

        let pool_size = pool.len();
        let question = select_question(pool, &dto.previous_questions, &mut rand::thread_rng());

        tracing::debug!(
            "Quiz draw: category={:?}, pool={}, previous={}, drawn={:?}",
            category.as_ref().map(|c| c.id),
            pool_size,
            dto.previous_questions.len(),
            question.as_ref().map(|q| q.id)
        );

        Ok(QuizResponseDto {
            success: true,
            question: question.map(QuestionDto::from),
        })
    }
}
