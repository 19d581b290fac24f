use content::types::{Comment, Reply, Role, UserRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of create and update requests. The reading time is estimated here,
/// the backend stores it as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub category: String,
    pub reading_time: u32,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let reading_time = content::reading_time::estimate(&description).minutes;
        Self {
            title: title.into(),
            description,
            category: category.into(),
            reading_time,
        }
    }
}

/// Body of comment and reply requests. `user` is the username, or the
/// visitor's address when not logged in.
#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub content: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest {
    pub reason: String,
}

/// Generic `{ "message": .. }` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikesResponse {
    #[serde(default)]
    pub likes: Vec<UserRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyResponse {
    pub reply: Reply,
}
