//! Error types for the deployment server client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during deployment server operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed: credentials rejected, server unreachable during
    /// login, or no usable session key in the response.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error (connection refused, TLS failure, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the deployment server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not have the expected shape.
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// One or more applications in a batch operation failed.
    #[error("{failed} of {attempted} applications failed")]
    PartialBatchFailure { failed: usize, attempted: usize },
}

impl ClientError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || self.status() == Some(401)
    }

    /// Check if this error is a transport-level failure.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Check if the server reported that the resource already exists.
    pub(crate) fn is_already_exists(&self) -> bool {
        match self {
            Self::ApiError {
                status, message, ..
            } => *status == 409 || message.to_ascii_lowercase().contains("already exists"),
            _ => false,
        }
    }
}
