//! Public feed: approved posts as cards, filtered by category and paged.

use indexmap::IndexSet;
use serde::Serialize;

use crate::extract::ContentSnippetExtractor;
use crate::pagination::{paginate, Page, ValidatedPageRequest};
use crate::parser::HtmlParser;
use crate::types::{Post, PostId, PostStatus, SnippetConfig};

/// Category selector value meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";

/// A post rendered for a grid or list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: PostId,
    pub title: String,
    pub category: String,
    pub status: PostStatus,
    pub author: String,
    pub image_url: String,
    pub snippet: String,
    pub like_count: usize,
    pub comment_count: usize,
    pub reading_time: Option<u32>,
}

/// Category selection for the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &post.category == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(CategoryFilter::from).unwrap_or_default()
    }
}

/// The feed only shows posts that passed moderation.
pub fn approved(posts: Vec<Post>) -> Vec<Post> {
    posts.into_iter().filter(Post::is_approved).collect()
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories(posts: &[Post]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    seen.insert(ALL_CATEGORIES);
    for post in posts {
        seen.insert(post.category.as_str());
    }
    seen.into_iter().map(str::to_string).collect()
}

pub fn filter_by_category(posts: Vec<Post>, filter: &CategoryFilter) -> Vec<Post> {
    posts.into_iter().filter(|post| filter.matches(post)).collect()
}

/// Card for the main feed: lead image of the content, then the post's own
/// image, then the placeholder.
pub fn list_card<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    post: &Post,
    config: &SnippetConfig,
) -> PostCard {
    let extracted = extractor.extract(&post.description, config.list_card_words);
    let image_url = Some(extracted.image_url)
        .filter(|url| !url.is_empty())
        .or_else(|| post.image.clone())
        .unwrap_or_else(|| config.list_placeholder_image.clone());

    card(post, image_url, extracted.snippet)
}

/// Card for the "related posts" strip: the post's own image wins over the
/// lead image, and every image is stripped from the snippet.
pub fn related_card<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    post: &Post,
    config: &SnippetConfig,
) -> PostCard {
    let snippet = extractor.text_snippet(&post.description, config.related_card_words);
    let image_url = post
        .image
        .clone()
        .or_else(|| extractor.lead_image(&post.description))
        .unwrap_or_else(|| config.related_placeholder_image.clone());

    card(post, image_url, snippet)
}

pub(crate) fn card(post: &Post, image_url: String, snippet: String) -> PostCard {
    PostCard {
        id: post.id.clone(),
        title: post.title.clone(),
        category: post.category.clone(),
        status: post.status,
        author: post.author_name().to_string(),
        image_url,
        snippet,
        like_count: post.like_count(),
        comment_count: post.comment_count(),
        reading_time: post.reading_time,
    }
}

pub fn list_cards<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    posts: &[Post],
    config: &SnippetConfig,
) -> Vec<PostCard> {
    posts
        .iter()
        .map(|post| list_card(extractor, post, config))
        .collect()
}

/// Related cards for a detail page, leaving out the post being viewed.
pub fn related_cards<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    posts: &[Post],
    current: &PostId,
    config: &SnippetConfig,
) -> Vec<PostCard> {
    posts
        .iter()
        .filter(|post| &post.id != current)
        .map(|post| related_card(extractor, post, config))
        .collect()
}

/// A rendered feed page with its category selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub categories: Vec<String>,
    pub selected: String,
    pub page: Page<PostCard>,
}

/// Approved posts, filtered, paged, then carded. Only the posts on the
/// requested page go through extraction.
pub fn build_feed<P: HtmlParser>(
    extractor: &ContentSnippetExtractor<P>,
    posts: Vec<Post>,
    filter: &CategoryFilter,
    request: &ValidatedPageRequest,
    config: &SnippetConfig,
) -> Feed {
    let approved = approved(posts);
    let categories = categories(&approved);
    let filtered = filter_by_category(approved, filter);
    let page = paginate(filtered, request).map(|post| list_card(extractor, &post, config));

    Feed {
        categories,
        selected: match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(category) => category.clone(),
        },
        page,
    }
}
