//! REST client for the skill-sharing platform backend.
//!
//! Wraps the backend's JSON API and validates every post, report and user it
//! returns into the `content` domain types. Invalid records in list
//! responses are skipped (and logged) rather than failing the whole call.
//!
//! # Example
//!
//! ```rust,ignore
//! use platform_client::PlatformClient;
//!
//! let client = PlatformClient::new("http://localhost:5000/api")?.with_token(token);
//!
//! let posts = client.list_posts().await?;
//! for post in &posts {
//!     println!("{} ({} likes)", post.title, post.like_count());
//! }
//! ```

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::AuthToken;
pub use error::{PlatformError, Result};
pub use types::{
    CommentRequest, LoginRequest, LoginResponse, MessageResponse, NewPost, RegisterRequest,
    ReportRequest,
};

use content::backoffice::Decision;
use content::types::{
    parse_posts, parse_reports, Comment, Post, PostId, PostRecord, Reply, Report, ReportRecord,
    User, UserRef,
};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use types::{CommentResponse, LikesResponse, ReplyResponse};
use url::Url;

/// Backend used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Whether an endpoint needs a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// Token is sent when available.
    Optional,
    /// Call fails with [`PlatformError::MissingCredential`] without a token.
    Required,
}

#[derive(Debug, Clone)]
pub struct PlatformClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<AuthToken>,
}

impl PlatformClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parse_base_url(base_url)?,
            token: None,
        })
    }

    /// Client with a per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: parse_base_url(base_url)?,
            token: None,
        })
    }

    /// Attach a bearer token. Blank tokens are ignored.
    pub fn with_token(mut self, token: impl Into<AuthToken>) -> Self {
        self.set_token(token);
        self
    }

    pub fn set_token(&mut self, token: impl Into<AuthToken>) {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for the given path segments. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PlatformError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let url = self.endpoint(&["login"])?;
        self.send(self.request(Method::POST, url, Auth::Optional)?.json(&body))
            .await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<MessageResponse> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let url = self.endpoint(&["register"])?;
        self.send(self.request(Method::POST, url, Auth::Optional)?.json(&body))
            .await
    }

    // ========================================================================
    // Posts
    // ========================================================================

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let url = self.endpoint(&["posts"])?;
        self.get_posts(url, Auth::Optional).await
    }

    pub async fn get_post(&self, id: &PostId) -> Result<Post> {
        let url = self.endpoint(&["posts", id.as_str()])?;
        self.get_post_at(url, Auth::Optional).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<MessageResponse> {
        let url = self.endpoint(&["posts"])?;
        self.send_json(Method::POST, url, Auth::Required, post).await
    }

    pub async fn update_post(&self, id: &PostId, post: &NewPost) -> Result<MessageResponse> {
        let url = self.endpoint(&["posts", id.as_str()])?;
        self.send_json(Method::PUT, url, Auth::Required, post).await
    }

    pub async fn delete_post(&self, id: &PostId) -> Result<MessageResponse> {
        let url = self.endpoint(&["posts", id.as_str()])?;
        self.send(self.request(Method::DELETE, url, Auth::Required)?)
            .await
    }

    /// Like a post, returning the updated like set.
    pub async fn like_post(&self, id: &PostId) -> Result<Vec<UserRef>> {
        let url = self.endpoint(&["posts", id.as_str(), "like"])?;
        let request = self
            .request(Method::PUT, url, Auth::Optional)?
            .json(&serde_json::json!({}));

        match self.send::<LikesResponse>(request).await {
            Ok(resp) => Ok(resp.likes),
            Err(PlatformError::Api { status: 400, .. }) => Err(PlatformError::AlreadyLiked),
            Err(e) => Err(e),
        }
    }

    pub async fn comment(&self, id: &PostId, user: &str, content: &str) -> Result<Comment> {
        let body = CommentRequest {
            content: content.to_string(),
            user: user.to_string(),
        };
        let url = self.endpoint(&["posts", id.as_str(), "comment"])?;
        let resp: CommentResponse = self.send_json(Method::POST, url, Auth::Optional, &body).await?;
        Ok(resp.comment)
    }

    pub async fn reply(
        &self,
        id: &PostId,
        comment_id: &str,
        user: &str,
        content: &str,
    ) -> Result<Reply> {
        let body = CommentRequest {
            content: content.to_string(),
            user: user.to_string(),
        };
        let url = self.endpoint(&["posts", id.as_str(), "comment", comment_id, "reply"])?;
        let resp: ReplyResponse = self.send_json(Method::POST, url, Auth::Optional, &body).await?;
        Ok(resp.reply)
    }

    pub async fn report_post(&self, id: &PostId, reason: &str) -> Result<MessageResponse> {
        let body = ReportRequest {
            reason: reason.to_string(),
        };
        let url = self.endpoint(&["posts", id.as_str(), "report"])?;
        self.send_json(Method::POST, url, Auth::Optional, &body).await
    }

    /// Posts sharing `category`.
    pub async fn related_posts(&self, category: &str) -> Result<Vec<Post>> {
        let url = self.related_url(category)?;
        self.get_posts(url, Auth::Optional).await
    }

    pub fn related_url(&self, category: &str) -> Result<Url> {
        let mut url = self.endpoint(&["related"])?;
        url.query_pairs_mut().append_pair("category", category);
        Ok(url)
    }

    // ========================================================================
    // Current user
    // ========================================================================

    pub async fn current_user(&self) -> Result<User> {
        let url = self.endpoint(&["user"])?;
        self.send(self.request(Method::GET, url, Auth::Required)?)
            .await
    }

    pub async fn user_posts(&self) -> Result<Vec<Post>> {
        let url = self.endpoint(&["user", "posts"])?;
        self.get_posts(url, Auth::Required).await
    }

    // ========================================================================
    // Backoffice
    // ========================================================================

    pub async fn backoffice_posts(&self) -> Result<Vec<Post>> {
        let url = self.endpoint(&["backoffice", "posts"])?;
        self.get_posts(url, Auth::Required).await
    }

    pub async fn moderate(&self, id: &PostId, decision: Decision) -> Result<MessageResponse> {
        let url = self.endpoint(&["backoffice", "posts", id.as_str(), decision.as_str()])?;
        self.send_json(Method::PUT, url, Auth::Required, &serde_json::json!({}))
            .await
    }

    pub async fn approve_post(&self, id: &PostId) -> Result<MessageResponse> {
        self.moderate(id, Decision::Approve).await
    }

    pub async fn reject_post(&self, id: &PostId) -> Result<MessageResponse> {
        self.moderate(id, Decision::Reject).await
    }

    pub async fn reports(&self) -> Result<Vec<Report>> {
        let url = self.endpoint(&["backoffice", "reports"])?;
        let records: Vec<ReportRecord> = self
            .send(self.request(Method::GET, url, Auth::Required)?)
            .await?;
        Ok(parse_reports(records))
    }

    pub async fn authors(&self) -> Result<Vec<User>> {
        let url = self.endpoint(&["backoffice", "authors"])?;
        self.send(self.request(Method::GET, url, Auth::Required)?)
            .await
    }

    /// A post awaiting moderation.
    pub async fn pending_post(&self, id: &PostId) -> Result<Post> {
        let url = self.endpoint(&["request", id.as_str()])?;
        self.get_post_at(url, Auth::Required).await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    fn request(&self, method: Method, url: Url, auth: Auth) -> Result<RequestBuilder> {
        let token = match (auth, &self.token) {
            (Auth::Required, None) => return Err(PlatformError::MissingCredential),
            (_, token) => token,
        };

        debug!(%method, %url, authenticated = token.is_some(), "Platform request");
        let request = self.client.request(method, url);
        Ok(match token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        })
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        auth: Auth,
        body: &B,
    ) -> Result<T> {
        self.send(self.request(method, url, auth)?.json(body)).await
    }

    async fn get_posts(&self, url: Url, auth: Auth) -> Result<Vec<Post>> {
        let records: Vec<PostRecord> = self.send(self.request(Method::GET, url, auth)?).await?;
        let total = records.len();
        let posts = parse_posts(records);
        debug!(total, valid = posts.len(), "Fetched posts");
        Ok(posts)
    }

    async fn get_post_at(&self, url: Url, auth: Auth) -> Result<Post> {
        let record: PostRecord = self.send(self.request(Method::GET, url, auth)?).await?;
        Ok(Post::try_from(record)?)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url.trim())
        .map_err(|e| PlatformError::InvalidUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(PlatformError::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}

/// Map a non-2xx response to an error, preferring the backend's `message`.
pub fn api_error(status: StatusCode, body: &str) -> PlatformError {
    let message = serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|resp| resp.message)
        .filter(|message| !message.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|body| !body.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    PlatformError::Api {
        status: status.as_u16(),
        message,
    }
}
