//! An author's own posts.

use serde::Serialize;

use crate::extract::ContentSnippetExtractor;
use crate::parser::HtmlParser;
use crate::types::{Post, PostStatus, SnippetConfig};

use super::feed::{card, PostCard};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub published: Vec<PostCard>,
    pub pending: Vec<PostCard>,
    pub total_posts: usize,
    pub total_likes: usize,
    pub total_comments: usize,
}

/// Split an author's posts into published and pending cards.
///
/// Rejected posts count towards the totals but are not listed. Cards show
/// only the image embedded in the description; `image_url` is empty when
/// there is none.
pub fn summarize<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    posts: &[Post],
    config: &SnippetConfig,
) -> ProfileSummary {
    let profile_card = |post: &Post| {
        let extracted = extractor.extract(&post.description, config.profile_card_words);
        card(post, extracted.image_url, extracted.snippet)
    };
    let cards_with = |status: PostStatus| -> Vec<PostCard> {
        posts
            .iter()
            .filter(|post| post.status == status)
            .map(|post| profile_card(post))
            .collect()
    };

    ProfileSummary {
        published: cards_with(PostStatus::Approved),
        pending: cards_with(PostStatus::Pending),
        total_posts: posts.len(),
        total_likes: posts.iter().map(Post::like_count).sum(),
        total_comments: posts.iter().map(Post::comment_count).sum(),
    }
}
