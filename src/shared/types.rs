use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::QUESTIONS_PER_PAGE;
use crate::shared::deserializers::deserialize_page;

/// Error envelope returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// HTTP status code, repeated in the body
    pub error: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message,
            error: status.as_u16(),
            errors,
        }
    }
}

/// Plain `{success, message}` body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query parameter shared by every paginated endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PaginationQuery {
    /// Index of the first record on this page, `None` when the page can never hold records
    pub fn offset(&self) -> Option<usize> {
        let page = usize::try_from(self.page).ok()?.checked_sub(1)?;
        page.checked_mul(QUESTIONS_PER_PAGE)
    }

    /// Slice one page out of an already ordered sequence.
    ///
    /// Pages past the end (and pages below 1) yield an empty vector; callers
    /// decide whether that is an error.
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match self.offset() {
            Some(start) => items
                .iter()
                .skip(start)
                .take(QUESTIONS_PER_PAGE)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: i64) -> PaginationQuery {
        PaginationQuery { page }
    }

    #[test]
    fn test_first_page_holds_first_ten() {
        let items: Vec<i32> = (1..=25).collect();

        assert_eq!(page(1).paginate(&items), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_nth_page_starts_at_expected_record() {
        let items: Vec<i32> = (1..=25).collect();

        let third = page(3).paginate(&items);
        assert_eq!(third, vec![21, 22, 23, 24, 25]);
        assert_eq!(page(2).paginate(&items)[0], 11);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<i32> = (1..=20).collect();

        assert!(page(3).paginate(&items).is_empty());
        assert!(page(i64::MAX).paginate(&items).is_empty());
    }

    #[test]
    fn test_non_positive_page_is_empty() {
        let items: Vec<i32> = (1..=5).collect();

        assert!(page(0).paginate(&items).is_empty());
        assert!(page(-1).paginate(&items).is_empty());
    }

    fn from_query(query: &str) -> PaginationQuery {
        let uri: axum::http::Uri = format!("/questions{query}").parse().unwrap();
        axum::extract::Query::<PaginationQuery>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn test_default_page_is_one() {
        let query = from_query("");
        assert_eq!(query.page, 1);
        assert_eq!(query.offset(), Some(0));
    }

    #[test]
    fn test_page_parsed_from_query_string() {
        assert_eq!(from_query("?page=3").page, 3);
        assert_eq!(from_query("?page=-2").page, -2);
    }

    #[test]
    fn test_unparsable_page_falls_back_to_first() {
        assert_eq!(from_query("?page=abc").page, 1);
        assert_eq!(from_query("?page=").page, 1);
        assert_eq!(from_query("?page=2.5").page, 1);
    }

    #[test]
    fn test_error_response_repeats_status() {
        let body = ErrorResponse::new(StatusCode::NOT_FOUND, "Resource not found".into(), None);
        let value = serde_json::to_value(body).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], 404);
        assert!(value.get("errors").is_none());
    }
}
