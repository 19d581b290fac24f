//! Typed string ids for backend entities.
//!
//! The backend hands out opaque object ids (`"65a1f0c2..."`). `Id<T>` wraps
//! them so a `PostId` cannot be passed where a `CommentId` is expected.
//!
//! ```rust
//! use content::types::{CommentId, PostId};
//!
//! let post_id = PostId::new("65a1f0c2e4b0a1b2c3d4e5f6");
//! let comment_id = CommentId::new("65a1f0c2e4b0a1b2c3d4e5f7");
//!
//! assert_eq!(post_id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
//! // let wrong: PostId = comment_id; // compile error
//! # let _ = comment_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker type for posts.
pub struct PostMarker;

/// Marker type for users.
pub struct UserMarker;

/// Marker type for comments and replies.
pub struct CommentMarker;

/// Marker type for moderation reports.
pub struct ReportMarker;

pub type PostId = Id<PostMarker>;
pub type UserId = Id<UserMarker>;
pub type CommentId = Id<CommentMarker>;
pub type ReportId = Id<ReportMarker>;

/// A typed wrapper around a backend object id.
#[repr(transparent)]
pub struct Id<T>(String, PhantomData<fn() -> T>);

impl<T> Id<T> {
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into(), PhantomData)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the backend sent an empty id.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> AsRef<str> for Id<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<&str> for Id<T> {
    #[inline]
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl<T> From<String> for Id<T> {
    #[inline]
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
