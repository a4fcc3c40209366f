//! Error types for calls against the content API.

use thiserror::Error;

/// Errors that can occur while talking to the content API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed from configuration
    #[error("Invalid client configuration: {0}")]
    InvalidClient(String),

    /// The request never produced a response
    #[error("Connection failed to '{url}': {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Request to '{url}' failed: {status} - {body}")]
    StatusError { url: String, status: u16, body: String },

    /// The response body could not be read
    #[error("Failed to read response from '{url}': {source}")]
    BodyError {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::StatusError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Short error kind for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidClient(_) => "invalid_client",
            ApiError::ConnectionError { .. } => "connection_error",
            ApiError::StatusError { .. } => "status_error",
            ApiError::BodyError { .. } => "body_error",
        }
    }
}
