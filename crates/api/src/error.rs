use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cachewise_core::error::CoreError;
use cachewise_store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cachewise_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A key-value store failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} '{key}' not found"),
            ),

            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
