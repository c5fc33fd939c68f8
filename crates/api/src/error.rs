use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use devsite_core::error::CoreError;
use serde_json::json;

/// Message returned for every failure that is not the client's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error": "..."}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `devsite_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. Always a 500; the detail is only logged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request, with the message shown to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
