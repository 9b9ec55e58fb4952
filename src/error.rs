//! Application error type and its HTTP mapping.
//!
//! Every failure a client can observe collapses into one of three kinds.
//! The response body is always `{ "error": "<message>" }`; store details are
//! logged and never returned.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for any rejected shorten request.
pub const INVALID_URL_MESSAGE: &str = "Please provide a valid URL.";

/// Message returned for an unknown slug.
pub const NOT_FOUND_MESSAGE: &str = "URL not found.";

/// Generic message for store failures.
pub const SERVER_ERROR_MESSAGE: &str = "Server error.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Replaces the client-facing message of an internal error, leaving
    /// validation and not-found errors untouched.
    pub fn with_internal_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::Internal(_) => Self::Internal(message.into()),
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Mapping store error");
        AppError::internal(SERVER_ERROR_MESSAGE)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        tracing::debug!(errors = %e, "Request validation failed");
        AppError::bad_request(INVALID_URL_MESSAGE)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        tracing::debug!(rejection = %e.body_text(), "Malformed request body");
        AppError::bad_request(INVALID_URL_MESSAGE)
    }
}
