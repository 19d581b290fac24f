//! Single-post page.

use serde::Serialize;

use crate::extract::ContentSnippetExtractor;
use crate::parser::HtmlParser;
use crate::reading_time::{self, ReadingTime};
use crate::types::{Comment, Post, PostId, PostStatus, UserRef};

/// Everything a detail page renders for one post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: PostId,
    pub title: String,
    pub category: String,
    pub status: PostStatus,
    pub author: String,
    /// Cover image set on the post itself, if any.
    pub image: Option<String>,
    /// Lead image pulled out of the body, empty if the body has none.
    pub lead_image: String,
    /// Full sanitized body.
    pub body: String,
    /// Sanitized body with the lead image removed.
    pub cleaned_body: String,
    pub reading_time: ReadingTime,
    pub like_count: usize,
    pub liked: bool,
    pub comments: Vec<Comment>,
}

impl PostDetail {
    /// Build the page for `post` as seen by `viewer`.
    ///
    /// The stored reading time is used when the backend has one; otherwise
    /// it is estimated from the body.
    pub fn build<P: HtmlParser>(
        extractor: &ContentSnippetExtractor<P>,
        post: &Post,
        viewer: Option<&UserRef>,
    ) -> Self {
        let estimated = reading_time::estimate(&post.description);
        let reading_time = match post.reading_time {
            Some(minutes) => ReadingTime {
                words: estimated.words,
                minutes,
            },
            None => estimated,
        };
        let first = extractor.extract_first_image(&post.description);

        PostDetail {
            id: post.id.clone(),
            title: post.title.clone(),
            category: post.category.clone(),
            status: post.status,
            author: post.author_name().to_string(),
            image: post.image.clone(),
            lead_image: first.image_url,
            body: extractor.sanitize(&post.description).into_string(),
            cleaned_body: first.cleaned_markup,
            reading_time,
            like_count: post.like_count(),
            liked: viewer.is_some_and(|user| post.is_liked_by(user)),
            comments: post.comments.clone(),
        }
    }

    pub fn reply_count(&self) -> usize {
        self.comments.iter().map(|c| c.replies.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{words, PostFixture};

    #[test]
    fn test_body_is_sanitized() {
        let post = PostFixture::new("p1")
            .description(r#"<p>hello</p><script>alert(1)</script><img src="http://x/a.png">"#)
            .build();
        let detail = PostDetail::build(&ContentSnippetExtractor::new(), &post, None);

        assert!(!detail.body.contains("script"));
        assert!(detail.body.contains("a.png"));
        assert!(!detail.cleaned_body.contains("a.png"));
        assert_eq!(detail.lead_image, "http://x/a.png");
    }

    #[test]
    fn test_reading_time_stored_or_estimated() {
        let extractor = ContentSnippetExtractor::new();
        let body = format!("<p>{}</p>", words(401));

        let estimated = PostFixture::new("p1").description(&body).build();
        assert_eq!(PostDetail::build(&extractor, &estimated, None).reading_time.minutes, 3);

        let stored = PostFixture::new("p2").description(&body).reading_time(7).build();
        assert_eq!(PostDetail::build(&extractor, &stored, None).reading_time.minutes, 7);
    }

    #[test]
    fn test_liked_by_viewer() {
        let post = PostFixture::new("p1").liked_by(&["u1"]).build();
        let extractor = ContentSnippetExtractor::new();

        assert!(PostDetail::build(&extractor, &post, Some(&UserRef::id("u1"))).liked);
        assert!(!PostDetail::build(&extractor, &post, Some(&UserRef::id("u2"))).liked);
        assert!(!PostDetail::build(&extractor, &post, None).liked);
    }
}
