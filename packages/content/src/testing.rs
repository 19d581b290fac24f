//! Testing utilities: post fixtures and a recording parser.
//!
//! These are useful for exercising feed and backoffice logic without a
//! running backend.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, RwLock};

use crate::parser::{ElementHandle, HtmlParser, ScraperParser};
use crate::sanitize::SanitizedMarkup;
use crate::types::{Comment, Post, PostRecord, PostStatus, Role, User, UserId, UserRef};

/// `n` distinct words separated by single spaces: `w1 w2 ... wn`.
pub fn words(n: usize) -> String {
    (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

/// A plain account with the given role.
pub fn user(id: &str, username: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role,
    }
}

/// Midnight UTC on the given day.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap()
}

/// Builder for [`Post`] values. Defaults to an approved, uncategorized post
/// with a one-paragraph body.
#[derive(Debug, Clone)]
pub struct PostFixture {
    record: PostRecord,
}

impl PostFixture {
    pub fn new(id: &str) -> Self {
        Self {
            record: PostRecord {
                id: Some(id.to_string()),
                title: Some(format!("Post {id}")),
                description: Some(format!("<p>Body of {id}</p>")),
                status: Some(PostStatus::Approved.as_str().to_string()),
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, markup: &str) -> Self {
        self.record.description = Some(markup.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.record.category = Some(category.to_string());
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.record.status = Some(status.as_str().to_string());
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.record.image = Some(url.to_string());
        self
    }

    pub fn reading_time(mut self, minutes: u32) -> Self {
        self.record.reading_time = Some(minutes);
        self
    }

    /// Add a like from each of the given user ids.
    pub fn liked_by(mut self, user_ids: &[&str]) -> Self {
        let likes = self.record.likes.get_or_insert_with(Vec::new);
        likes.extend(user_ids.iter().map(|id| UserRef::id(*id)));
        self
    }

    /// Add `count` comments from distinct visitors.
    pub fn comments(mut self, count: usize) -> Self {
        let comments = self.record.comments.get_or_insert_with(Vec::new);
        comments.extend((0..count).map(|i| Comment::new(format!("visitor{i}"), "comment")));
        self
    }

    pub fn author(mut self, id: &str, username: &str) -> Self {
        self.record.created_by = Some(UserRef::named(id, username));
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.record.created_at = Some(at);
        self
    }

    /// The underlying wire record, for tests of validation paths.
    pub fn record(self) -> PostRecord {
        self.record
    }

    pub fn build(self) -> Post {
        Post::try_from(self.record).unwrap()
    }
}

/// [`HtmlParser`] that delegates to [`ScraperParser`] and records every
/// markup string it was asked to parse.
#[derive(Debug, Clone, Default)]
pub struct RecordingParser {
    inner: ScraperParser,
    parsed: Arc<RwLock<Vec<String>>>,
}

impl RecordingParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup received by `parse`, in call order.
    pub fn parsed(&self) -> Vec<String> {
        self.parsed.read().unwrap().clone()
    }

    pub fn parse_count(&self) -> usize {
        self.parsed.read().unwrap().len()
    }
}

impl HtmlParser for RecordingParser {
    type Document = <ScraperParser as HtmlParser>::Document;

    fn parse(&self, markup: &SanitizedMarkup) -> Self::Document {
        self.parsed.write().unwrap().push(markup.as_str().to_string());
        self.inner.parse(markup)
    }

    fn first_of_type(&self, doc: &Self::Document, tag: &str) -> Option<ElementHandle> {
        self.inner.first_of_type(doc, tag)
    }

    fn remove(&self, doc: &mut Self::Document, element: &ElementHandle) -> bool {
        self.inner.remove(doc, element)
    }

    fn remove_all(&self, doc: &mut Self::Document, tag: &str) -> usize {
        self.inner.remove_all(doc, tag)
    }

    fn text_content(&self, doc: &Self::Document) -> String {
        self.inner.text_content(doc)
    }

    fn inner_html(&self, doc: &Self::Document) -> String {
        self.inner.inner_html(doc)
    }
}
