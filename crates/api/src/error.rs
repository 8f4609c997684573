use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use trainerhub_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{"status": "error", "message": ...}`
/// envelope used by every endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trainerhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// An unparseable body or query string.
    #[error("{0}")]
    BadRequest(String),

    /// The route exists but not for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Any failure an endpoint chooses to report as a plain 500.
    #[error("{0}")]
    Unexpected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Collapse any error into [`AppError::Unexpected`], keeping its message.
    pub fn into_unexpected(self) -> Self {
        match self {
            AppError::Unexpected(_) => self,
            other => AppError::Unexpected(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::Unexpected(msg) => {
                tracing::error!(error = %msg, "Unexpected error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        (status, axum::Json(ApiResponse::error(message))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else, constraint violations included, maps to 500 and
///   carries the driver's message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
