//! # Web API Error Types
//!
//! HTTP-facing errors and their response conversions. Leverages thiserror for
//! structured error handling and Axum's IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::error::ItemError;

/// Web API errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Invalid request: {}", .messages.join(", "))]
    BadRequest { messages: Vec<String> },

    #[error("Internal server error")]
    Internal,
}

/// Body returned with every error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub errors: Vec<String>,
}

/// Body of `GET /api/items/process/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStatsResponse {
    pub processed_count: u64,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, code, errors) = match self {
            ApiError::NotFound { message } => (StatusCode::NOT_FOUND, "NOT_FOUND", vec![message]),
            ApiError::BadRequest { messages } => (StatusCode::BAD_REQUEST, "BAD_REQUEST", messages),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                vec!["Internal server error".to_string()],
            ),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            errors,
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        let message = err.to_string();
        match err {
            ItemError::NotFound { .. } => ApiError::NotFound { message },
            ItemError::Validation(messages) => ApiError::BadRequest { messages },
            _ => {
                error!(error = %message, "Item operation failed");
                ApiError::Internal
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
