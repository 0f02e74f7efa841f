//! Dispatcher error types.

use thiserror::Error;

/// Result type for dispatcher operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the command endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid number {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }
}
