//! Error types for the platform client.

use thiserror::Error;

/// Result type for platform client operations.
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Platform client errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Network error (connection failed, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the backend's `message` field when present
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The like endpoint rejected a repeated like
    #[error("you have already liked this post")]
    AlreadyLiked,

    /// Endpoint requires a bearer token and none is configured
    #[error("this request requires a login token")]
    MissingCredential,

    /// Response body is not the JSON we expected
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base URL cannot be used to build endpoint URLs
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Response parsed but failed domain validation
    #[error(transparent)]
    Content(#[from] content::ContentError),
}

impl PlatformError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PlatformError::Api { status, .. } => Some(*status),
            PlatformError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PlatformError::MissingCredential)
            || matches!(self.status(), Some(401) | Some(403))
    }
}
