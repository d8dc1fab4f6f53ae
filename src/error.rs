//! Client Error Types
//!
//! Failures that can happen while talking to the assistant backend.

use thiserror::Error;

/// Errors returned by the HTTP client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request body could not be built
    #[error("Request build error: {0}")]
    Request(String),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body was not what we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build a status error, preferring the server supplied message
    pub fn status(status: u16, message: Option<String>) -> Self {
        ClientError::Status {
            status,
            message: message.unwrap_or_else(|| "Unknown error".to_string()),
        }
    }
}
