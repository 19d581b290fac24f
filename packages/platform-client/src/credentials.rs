//! Bearer token handling.
//!
//! Uses the `secrecy` crate so the token never shows up in logs or debug output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A login token issued by `/login`.
pub struct AuthToken(SecretBox<str>);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Only call this when building the `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().trim().is_empty()
    }
}

impl Clone for AuthToken {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
