use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::store::StoreError;
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) | AppError::Unprocessable(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Fixed client-facing message for each status; details go to `errors` or the log
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Store(_) | AppError::Internal(_) => "Internal server error",
            AppError::NotFound(_) => "Resource not found",
            AppError::BadRequest(_) => "Bad request",
            AppError::Validation(_) | AppError::Unprocessable(_) => "Unprocessable",
            AppError::PayloadTooLarge(_) => "Payload too large",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();
        let errors = match self {
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                None
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                None
            }
            AppError::Unprocessable(msg) => {
                tracing::warn!("Unprocessable request: {}", msg);
                None
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                None
            }
            AppError::Validation(msg) => Some(msg.lines().map(str::to_string).collect()),
            AppError::BadRequest(msg) | AppError::PayloadTooLarge(msg) => Some(vec![msg]),
        };

        let body = Json(ErrorResponse::new(status, message, errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
