//! Error types for the Perpus server

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
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body, matching the `{message}` envelope used on every route
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            // Failed role checks surface as 401, not 403.
            AppError::Authorization(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            // Duplicate loan rows come back as a plain bad request.
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { message });

        (status, body).into_response()
    }
}

impl AppError {
    /// Translate low-level constraint violations into client-visible errors.
    ///
    /// The `(user_id, buku_id)` uniqueness index on peminjaman is the
    /// serialization point for concurrent loan creation; its violation must
    /// surface as a conflict, never as a 500.
    pub fn from_constraint(e: sqlx::Error, conflict_msg: &str, fk_msg: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = e {
            match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return AppError::Conflict(conflict_msg.to_string());
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return AppError::BadRequest(fk_msg.to_string());
                }
                _ => {}
            }
        }
        AppError::Database(e)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
