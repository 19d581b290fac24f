//! Comment threads attached to posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::CommentId;

/// Display name used when a comment carries neither username nor IP.
pub const ANONYMOUS: &str = "Anonymous";

/// A reply to a top-level comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CommentId>,
    /// Username of the author, or the visitor's IP address for anonymous replies.
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A top-level comment with its replies in posting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CommentId>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn author_or_anonymous(user: &str) -> &str {
    let user = user.trim();
    if user.is_empty() {
        ANONYMOUS
    } else {
        user
    }
}

impl Reply {
    pub fn author(&self) -> &str {
        author_or_anonymous(&self.user)
    }
}

impl Comment {
    pub fn new(user: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            user: user.into(),
            content: content.into(),
            replies: Vec::new(),
            created_at: None,
        }
    }

    pub fn author(&self) -> &str {
        author_or_anonymous(&self.user)
    }

    pub fn is_reply_target(&self, id: &CommentId) -> bool {
        self.id.as_ref() == Some(id)
    }
}
