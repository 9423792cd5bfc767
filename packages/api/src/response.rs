// ABOUTME: HTTP error translation and shared response bodies
// ABOUTME: The only place storage errors become status codes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;
use tracing::error;

use addrbook_addresses::ValidationError;
use addrbook_storage::StorageError;

/// Error body, `{"detail": ...}` on every failure path.
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Success body for operations that return a message instead of a
/// record.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn address_not_found() -> Self {
        ApiError::NotFound("Address not found".to_string())
    }

    pub fn validation(errors: Vec<ValidationError>) -> Self {
        let detail = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        ApiError::BadRequest(detail)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Constraint(message) => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };

        (status, ResponseJson(ErrorDetail { detail })).into_response()
    }
}
