use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::config::RuntimeMode;

mod schema;

/// Message shown to visitors whenever a request fails on our side.
pub const DELIVERY_FAILED: &str =
    "Failed to send message. Please try again later or contact me directly.";

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function.
///
/// Validation errors are echoed back to the caller. Unexpected errors are logged and
/// replaced by a generic message; their text is only attached as `details` when the
/// runtime mode allows it.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{cause}")]
    UnexpectedError {
        cause: anyhow::Error,
        details: Option<String>,
    },
}

impl AppError {
    pub fn unexpected(cause: impl Into<anyhow::Error>, mode: RuntimeMode) -> Self {
        let cause = cause.into();
        let details = mode.exposes_error_details().then(|| cause.to_string());
        Self::UnexpectedError { cause, details }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::ValidationError(message) => {
                tracing::warn!(detail = %message, "rejected request");
                schema::Error {
                    error: message,
                    details: None,
                }
            }
            Self::UnexpectedError { cause, details } => {
                tracing::error!(error = ?cause, "request failed");
                schema::Error {
                    error: DELIVERY_FAILED.to_owned(),
                    details,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
