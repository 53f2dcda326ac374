use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use taskdeck_core::error::CoreError;
use taskdeck_core::prompt::AiOperation;
use taskdeck_gemini::GeminiError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskdeck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The generative model call failed while performing `operation`.
    #[error("Upstream model error: {source}")]
    Upstream {
        operation: AiOperation,
        source: GeminiError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An unexpected failure outside the domain, e.g. a handler panic.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn upstream(operation: AiOperation, source: GeminiError) -> Self {
        AppError::Upstream { operation, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"), None)
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    Some(err.to_string()),
                )
            }

            // --- Generative model errors ---
            AppError::Upstream { operation, source } => {
                let kind = source.kind();
                tracing::warn!(?operation, ?kind, error = %source, "Generative model call failed");
                let message = kind
                    .user_message()
                    .unwrap_or_else(|| operation.failure_message());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message.to_string(),
                    Some(source.to_string()),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        (status, axum::Json(ApiResponse::failure(message, error))).into_response()
    }
}
