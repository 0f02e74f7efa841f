//! Channel error types.

use thiserror::Error;

/// Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors that can occur on the push channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Invalid channel URL: {0}")]
    InvalidUrl(String),

    #[error("Handshake failed: {0}")]
    HandshakeFailed(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Channel closed")]
    Closed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
