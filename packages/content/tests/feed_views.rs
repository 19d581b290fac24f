//! End-to-end checks of the feed built from backend JSON.

use content::feed::{build_feed, CategoryFilter};
use content::testing::{words, PostFixture};
use content::{posts_from_json, ContentSnippetExtractor, PageRequest, PostStatus, SnippetConfig};

const POSTS_JSON: &str = r#"[
    {
        "_id": "p1",
        "title": "Borrowing",
        "description": "<p>Lifetimes <img src=\"http://cdn/1.png\"> and the borrow checker explained for people who came from garbage collected languages</p>",
        "category": "Rust",
        "status": "approved",
        "likes": ["u1", {"_id": "u2", "username": "bold"}],
        "comments": [{"_id": "c1", "user": "10.0.0.1", "content": "nice", "replies": []}],
        "createdBy": {"_id": "u9", "username": "saraa"},
        "createdAt": "2024-05-01T08:00:00Z"
    },
    {
        "_id": "p2",
        "title": "Draft",
        "description": "<p>Not yet</p>",
        "category": "Rust",
        "status": "pending"
    },
    {
        "_id": "p3",
        "title": "Watercolour",
        "description": "<p>Short post</p>",
        "status": "approved",
        "image": "http://cdn/cover.png"
    },
    {
        "title": "No id, dropped"
    }
]"#;

#[test]
fn test_feed_from_backend_json() {
    let posts = posts_from_json(POSTS_JSON).unwrap();
    assert_eq!(posts.len(), 3);

    let feed = build_feed(
        &ContentSnippetExtractor::new(),
        posts,
        &CategoryFilter::All,
        &PageRequest::default().validate(),
        &SnippetConfig::default(),
    );

    assert_eq!(feed.categories, vec!["All", "Rust", "Uncategorized"]);
    assert_eq!(feed.page.page_info.total_items, 2);

    let first = &feed.page.items[0];
    assert_eq!(first.image_url, "http://cdn/1.png");
    assert_eq!(
        first.snippet,
        "Lifetimes and the borrow checker explained for people who came from garbage..."
    );
    assert_eq!(first.author, "saraa");
    assert_eq!(first.like_count, 2);
    assert_eq!(first.comment_count, 1);

    let second = &feed.page.items[1];
    assert_eq!(second.image_url, "http://cdn/cover.png");
    assert_eq!(second.snippet, "Short post");
    assert_eq!(second.author, "Unknown");
}

#[test]
fn test_feed_category_filter_and_paging() {
    let mut posts: Vec<_> = (0..30)
        .map(|i| {
            PostFixture::new(&format!("p{i}"))
                .category(if i % 3 == 0 { "Art" } else { "Tech" })
                .description(&format!("<p>{}</p>", words(15)))
                .build()
        })
        .collect();
    posts.push(
        PostFixture::new("hidden")
            .status(PostStatus::Rejected)
            .category("Art")
            .build(),
    );

    let extractor = ContentSnippetExtractor::new();
    let config = SnippetConfig::default();

    let art = build_feed(
        &extractor,
        posts.clone(),
        &CategoryFilter::from("Art"),
        &PageRequest::new(1, 12).validate(),
        &config,
    );
    assert_eq!(art.selected, "Art");
    assert_eq!(art.page.page_info.total_items, 10);
    assert!(art.page.items.iter().all(|card| card.category == "Art"));
    assert!(art.page.items.iter().all(|card| card.snippet.ends_with("w12...")));

    let tech_page_two = build_feed(
        &extractor,
        posts,
        &CategoryFilter::from("Tech"),
        &PageRequest::new(2, 12).validate(),
        &config,
    );
    assert_eq!(tech_page_two.page.page_info.total_items, 20);
    assert_eq!(tech_page_two.page.items.len(), 8);
    assert!(!tech_page_two.page.page_info.has_next_page);
}

#[test]
fn test_list_word_limit_is_configurable() {
    let posts = vec![PostFixture::new("p1")
        .description(&format!("<p>{}</p>", words(10)))
        .build()];
    let config = SnippetConfig::default().with_list_card_words(4);

    let feed = build_feed(
        &ContentSnippetExtractor::new(),
        posts,
        &CategoryFilter::All,
        &PageRequest::default().validate(),
        &config,
    );
    assert_eq!(feed.page.items[0].snippet, "w1 w2 w3 w4...");
}
