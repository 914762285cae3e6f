//! # REST API Errors
//!
//! One tagged error type for every handler. `status_code` is the only place
//! that decides the HTTP status; `IntoResponse` is the central mapper that
//! turns any error into a `{ "message": ... }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::products::{InvalidOperator, RepositoryError};

/// Message sent for every 500, whatever the cause
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Message sent for unmatched routes
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed or missing input, or a mutation that could not be applied
    #[error("{0}")]
    BadRequest(String),

    /// The addressed entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Anything unanticipated: I/O, serialization, poisoned locks
    #[error("{0}")]
    ServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a client. Server errors never leak detail.
    pub fn public_message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::ServerError(_) => SERVER_ERROR_MESSAGE,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateId(_) => ApiError::BadRequest(err.to_string()),
            RepositoryError::Store(_) | RepositoryError::LockPoisoned => {
                ApiError::ServerError(err.to_string())
            }
        }
    }
}

impl From<InvalidOperator> for ApiError {
    fn from(err: InvalidOperator) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.public_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::ServerError(detail) = &self {
            tracing::error!(error = %detail, "unhandled server error");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
