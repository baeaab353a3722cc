//! # API Errors
//!
//! Error types for the HTTP surface, mapped onto wire responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;
use crate::validation::FieldErrors;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Referenced record does not exist (or the id segment was not an
    /// integer, which the route treats the same way).
    #[error("Not found.")]
    NotFound,

    /// The request body was not parseable JSON.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// One or more fields failed validation.
    #[error("{0}")]
    Validation(FieldErrors),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// File-system failure in the store; not recovered.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Validation failures put the field map itself on the wire.
            ApiError::Validation(errors) => (status, Json(errors)).into_response(),
            ApiError::NotFound => {
                (status, Json(json!({"detail": "Not found."}))).into_response()
            }
            ApiError::InvalidBody(detail) => {
                (status, Json(json!({"detail": detail}))).into_response()
            }
            ApiError::Storage(err) => {
                Logger::error("storage_failure", &[("detail", &err.to_string())]);
                (status, Json(json!({"detail": "Internal server error."}))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidBody("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(FieldErrors::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_errors_convert() {
        let mut errors = FieldErrors::new();
        errors.push("points", "points must be >= 0");
        let err = ApiError::from(errors);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
