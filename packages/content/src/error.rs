//! Typed errors for the content library.
//!
//! Extraction itself never fails; errors only arise when loose backend
//! records are validated into the domain model.

use thiserror::Error;

/// Errors that can occur while validating content records.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A post record is missing a required field or carries an invalid value
    #[error("invalid post {id}: {reason}")]
    InvalidPost { id: String, reason: String },

    /// Status string not recognised
    #[error("unknown post status: {0}")]
    UnknownStatus(String),

    /// Role string not recognised
    #[error("unknown user role: {0}")]
    UnknownRole(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ContentError {
    pub(crate) fn invalid_post(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPost {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
