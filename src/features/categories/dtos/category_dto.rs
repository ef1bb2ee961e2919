use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::questions::dtos::QuestionDto;

/// Formatted category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

/// Category id to display name, serialized as `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response for `GET /categories`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Response for `GET /categories/{id}/questions`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Count of every question in the store, not only this category
    pub total_questions: i64,
    /// Display name of the requested category
    pub current_category: String,
}
