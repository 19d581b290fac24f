//! Posts: the loose wire record and the validated domain type.
//!
//! The backend returns documents whose fields may be absent, null or
//! unpopulated depending on the endpoint. [`PostRecord`] accepts all of that;
//! [`Post`] is what the rest of the crate works with, and is only obtainable
//! through validation (`TryFrom<PostRecord>`).

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::comment::{Comment, Reply};
use super::id::{CommentId, PostId};
use super::user::UserRef;
use crate::error::{ContentError, Result};

/// Category label for posts submitted without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

// ============================================================================
// Status
// ============================================================================

/// Moderation state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PostStatus {
    Pending,
    Approved,
    Rejected,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [
        PostStatus::Pending,
        PostStatus::Approved,
        PostStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Pending => "pending",
            PostStatus::Approved => "approved",
            PostStatus::Rejected => "rejected",
        }
    }

    /// Capitalised form used for tags and tab titles.
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Pending => "Pending",
            PostStatus::Approved => "Approved",
            PostStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = ContentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(PostStatus::Pending),
            "approved" => Ok(PostStatus::Approved),
            "rejected" => Ok(PostStatus::Rejected),
            other => Err(ContentError::UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for PostStatus {
    type Error = ContentError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// A post document exactly as the backend sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub likes: Option<Vec<UserRef>>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Validated post
// ============================================================================

/// A validated post.
///
/// `description` is untrusted rich-text markup; render it only through
/// [`crate::Sanitizer`] or [`crate::ContentSnippetExtractor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PostRecord")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    pub likes: IndexSet<UserRef>,
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<PostRecord> for Post {
    type Error = ContentError;

    fn try_from(record: PostRecord) -> Result<Self> {
        let id = non_blank(record.id)
            .ok_or_else(|| ContentError::invalid_post("<missing>", "missing _id"))?;

        let title =
            non_blank(record.title).ok_or_else(|| ContentError::invalid_post(&id, "missing title"))?;

        let status = record
            .status
            .ok_or_else(|| ContentError::invalid_post(&id, "missing status"))?
            .parse::<PostStatus>()
            .map_err(|e| ContentError::invalid_post(&id, e.to_string()))?;

        Ok(Post {
            id: PostId::new(id),
            title,
            description: record.description.unwrap_or_default(),
            category: non_blank(record.category).unwrap_or_else(|| UNCATEGORIZED.to_string()),
            status,
            image: non_blank(record.image),
            reading_time: record.reading_time,
            likes: record.likes.unwrap_or_default().into_iter().collect(),
            comments: record.comments.unwrap_or_default(),
            created_by: record.created_by,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl Post {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn is_approved(&self) -> bool {
        self.status == PostStatus::Approved
    }

    pub fn is_liked_by(&self, user: &UserRef) -> bool {
        self.likes.contains(user)
    }

    /// Author username for bylines, `"Unknown"` when unpopulated.
    pub fn author_name(&self) -> &str {
        self.created_by
            .as_ref()
            .map(UserRef::display_name)
            .unwrap_or("Unknown")
    }

    /// Replace the like set with the one returned by the like endpoint.
    pub fn set_likes(&mut self, likes: impl IntoIterator<Item = UserRef>) {
        self.likes = likes.into_iter().collect();
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Append a reply under `parent`. Returns `false` if no such comment exists.
    pub fn push_reply(&mut self, parent: &CommentId, reply: Reply) -> bool {
        match self.comments.iter_mut().find(|c| c.is_reply_target(parent)) {
            Some(comment) => {
                comment.replies.push(reply);
                true
            }
            None => false,
        }
    }
}

/// Validate a batch of records, dropping (and logging) the invalid ones so a
/// single malformed document never blanks a whole listing.
pub fn parse_posts(records: Vec<PostRecord>) -> Vec<Post> {
    records
        .into_iter()
        .filter_map(|record| match Post::try_from(record) {
            Ok(post) => Some(post),
            Err(e) => {
                warn!(error = %e, "Skipping invalid post record");
                None
            }
        })
        .collect()
}

/// Parse a JSON array of post documents, validating each one.
pub fn posts_from_json(json: &str) -> Result<Vec<Post>> {
    let records: Vec<PostRecord> = serde_json::from_str(json)?;
    Ok(parse_posts(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> PostRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_record() {
        let post = Post::try_from(record(
            r#"{
                "_id": "p1",
                "title": "Rust",
                "description": "<p>hi</p>",
                "category": "Tech",
                "status": "approved",
                "readingTime": 3,
                "likes": ["u1", "u2", "u1"],
                "comments": [{"_id": "c1", "user": "bold", "content": "nice"}],
                "createdBy": {"_id": "u9", "username": "saraa"},
                "createdAt": "2024-03-01T10:00:00Z"
            }"#,
        ))
        .unwrap();

        assert_eq!(post.id.as_str(), "p1");
        assert_eq!(post.status, PostStatus::Approved);
        assert_eq!(post.like_count(), 2);
        assert_eq!(post.comment_count(), 1);
        assert_eq!(post.author_name(), "saraa");
        assert_eq!(post.reading_time, Some(3));
    }

    #[test]
    fn test_missing_category_is_uncategorized() {
        let post =
            Post::try_from(record(r#"{"_id":"p1","title":"t","status":"pending","category":""}"#))
                .unwrap();
        assert_eq!(post.category, UNCATEGORIZED);
        assert!(post.likes.is_empty());
        assert_eq!(post.author_name(), "Unknown");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = Post::try_from(record(r#"{"title":"t","status":"pending"}"#)).unwrap_err();
        assert!(matches!(err, ContentError::InvalidPost { .. }));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err =
            Post::try_from(record(r#"{"_id":"p1","title":"t","status":"archived"}"#)).unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_null_collections_are_empty() {
        let post = Post::try_from(record(
            r#"{"_id":"p1","title":"t","status":"pending","likes":null,"comments":null}"#,
        ))
        .unwrap();
        assert_eq!(post.like_count(), 0);
        assert_eq!(post.comment_count(), 0);
    }

    #[test]
    fn test_post_deserializes_through_validation() {
        let ok: std::result::Result<Post, _> =
            serde_json::from_str(r#"{"_id":"p1","title":"t","status":"rejected"}"#);
        assert_eq!(ok.unwrap().status, PostStatus::Rejected);

        let bad: std::result::Result<Post, _> = serde_json::from_str(r#"{"_id":"p1"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_parse_posts_skips_invalid() {
        let posts = parse_posts(vec![
            record(r#"{"_id":"p1","title":"a","status":"approved"}"#),
            record(r#"{"_id":"p2","status":"approved"}"#),
            record(r#"{"_id":"p3","title":"c","status":"pending"}"#),
        ]);
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn test_posts_from_json() {
        let posts =
            posts_from_json(r#"[{"_id":"p1","title":"a","status":"approved"},{"_id":"p2"}]"#)
                .unwrap();
        assert_eq!(posts.len(), 1);
        assert!(matches!(
            posts_from_json("{not json"),
            Err(ContentError::JsonParse(_))
        ));
    }

    #[test]
    fn test_push_reply() {
        let mut post =
            Post::try_from(record(r#"{"_id":"p1","title":"t","status":"approved"}"#)).unwrap();
        let mut comment = Comment::new("bold", "first");
        comment.id = Some(CommentId::new("c1"));
        post.push_comment(comment);

        let reply = Reply {
            id: None,
            user: "saraa".into(),
            content: "agreed".into(),
            created_at: None,
        };
        assert!(post.push_reply(&CommentId::new("c1"), reply.clone()));
        assert!(!post.push_reply(&CommentId::new("missing"), reply));
        assert_eq!(post.comments[0].replies.len(), 1);
    }
}
