//! Error types for the BookStore server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Duplicate book: {0}")]
    Conflict(String),

    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body.
///
/// Validation errors carry per-field `details`; every other kind carries a
/// single `message`. Absent fields are omitted from the JSON.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Book not found".to_string(),
                    message: Some(message),
                    details: None,
                },
            ),
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation failed".to_string(),
                    message: None,
                    details: Some(details),
                },
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Duplicate book".to_string(),
                    message: Some(message),
                    details: None,
                },
            ),
            AppError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not found".to_string(),
                    message: Some(format!("Cannot {} {}", method, path)),
                    details: None,
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        message: Some("Something went wrong on the server".to_string()),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
