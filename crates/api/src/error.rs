use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cloudkitchen_core::error::CoreError;
use cloudkitchen_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cloudkitchen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the dish store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read as JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::Json(rejection) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                rejection.body_text(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// Every store failure, including a malformed id rejected while building
/// the query, maps to 500 and carries the underlying message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::InvalidId(_) => {
            tracing::warn!(error = %err, "Rejected malformed dish id");
        }
        StoreError::Database(_) | StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "Storage error");
        }
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "STORAGE_ERROR",
        err.to_string(),
    )
}
