//! Unified error handling
//!
//! [`AppError`] is the single error translator of the HTTP boundary: every
//! domain error raised below the handlers converts into an enveloped JSON
//! response here. [`ApiResponse`] is the envelope carried by every response,
//! success or failure.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Uniform response envelope
///
/// ```json
/// {
///   "status": "OK",
///   "message": { ... },
///   "time": "2026-08-30T10:15:00+00:00"
/// }
/// ```
///
/// `message` carries the payload on success and the error string on failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Status code name ("OK", "NOT_FOUND", ...)
    pub status: String,
    /// Payload or error string
    pub message: T,
    /// Timestamp taken when the envelope was built (ISO-8601)
    pub time: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: T) -> Self {
        Self {
            status: status_name(status),
            message,
            time: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Status code name in the `UPPER_SNAKE` form used by the envelope
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}

/// Application error enum
///
/// | Variant | HTTP status |
/// |---------|-------------|
/// | `NotFound` | 404 |
/// | `BadRequest` | 400 |
/// | `Validation` | 422 |
/// | `Database` / `Internal` | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Referenced record is absent
    #[error("{0}")]
    NotFound(String),

    /// Domain invariant violation (id supplied on create, duplicate email)
    #[error("{0}")]
    BadRequest(String),

    /// Structural field validation failure, caught before the service layer
    #[error("{0}")]
    Validation(String),

    /// Storage failure
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiResponse::new(status, message));
        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
