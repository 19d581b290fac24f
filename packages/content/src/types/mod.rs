pub mod comment;
pub mod config;
pub mod id;
pub mod post;
pub mod report;
pub mod user;

pub use comment::{Comment, Reply, ANONYMOUS};
pub use config::{SnippetConfig, LIST_PLACEHOLDER_IMAGE, RELATED_PLACEHOLDER_IMAGE};
pub use id::{CommentId, Id, PostId, ReportId, UserId};
pub use post::{
    parse_posts, posts_from_json, Post, PostRecord, PostStatus, UNCATEGORIZED,
};
pub use report::{parse_reports, Report, ReportRecord};
pub use user::{Role, User, UserRef};
