//! Post Content Library
//!
//! Turns untrusted rich-text post bodies into what listing pages render:
//! a lead image, a short plain-text snippet, and a reading-time estimate.
//! Also holds the post model and the in-memory views built on it (feed,
//! detail, backoffice, profile, dashboard).
//!
//! # Usage
//!
//! ```rust
//! use content::ContentSnippetExtractor;
//!
//! let extractor = ContentSnippetExtractor::new();
//! let result = extractor.extract(
//!     r#"<p>Hello <b>world</b> this is a test</p><img src="http://x/a.png">"#,
//!     3,
//! );
//!
//! assert_eq!(result.image_url, "http://x/a.png");
//! assert_eq!(result.snippet, "Hello world this...");
//! ```
//!
//! # Modules
//!
//! - [`sanitize`] - Sanitization boundary ([`Sanitizer`], [`SanitizedMarkup`])
//! - [`parser`] - Parsing seam ([`HtmlParser`]) and the `scraper` implementation
//! - [`extract`] - Lead image and snippet extraction
//! - [`reading_time`] - Words-per-minute estimate
//! - [`types`] - Posts, users, comments, reports
//! - [`pagination`] - In-memory paging
//! - [`views`] - Feed, detail, backoffice, profile and dashboard views
//! - [`testing`] - Fixtures and a recording parser

pub mod error;
pub mod extract;
pub mod pagination;
pub mod parser;
pub mod reading_time;
pub mod sanitize;
pub mod testing;
pub mod types;
pub mod views;

pub use views::{backoffice, dashboard, detail, feed, profile};

// Re-export core types at crate root
pub use error::{ContentError, Result};
pub use extract::{
    extract, truncate_words, ContentSnippetExtractor, ExtractionResult, FirstImage, ELLIPSIS,
};
pub use pagination::{paginate, Page, PageInfo, PageRequest, ValidatedPageRequest};
pub use parser::{ElementHandle, HtmlParser, ScraperParser};
pub use reading_time::{ReadingTime, WORDS_PER_MINUTE};
pub use sanitize::{SanitizedMarkup, Sanitizer};
pub use types::{
    parse_posts, parse_reports, posts_from_json, Comment, CommentId, Post, PostId, PostRecord,
    PostStatus, Reply, Report, ReportId, ReportRecord, Role, SnippetConfig, User, UserId, UserRef,
};
