//! Behavioural properties of snippet extraction.

use content::testing::RecordingParser;
use content::{extract, ContentSnippetExtractor, Sanitizer, ELLIPSIS};
use proptest::prelude::*;
use proptest::test_runner::Config;

#[test]
fn test_lead_image_is_split_out_of_long_paragraph() {
    let result = extract(
        r#"<p>Hello <img src="http://x/a.png"> world this is a test of snippet extraction beyond twelve words total here</p>"#,
        12,
    );

    assert_eq!(result.image_url, "http://x/a.png");
    assert_eq!(
        result.snippet,
        "Hello world this is a test of snippet extraction beyond twelve words..."
    );
}

#[test]
fn test_short_post_has_no_ellipsis() {
    let result = extract("<p>Short post</p>", 12);
    assert_eq!(result.image_url, "");
    assert_eq!(result.snippet, "Short post");
}

#[test]
fn test_empty_and_blank_input() {
    for markup in ["", "   ", "\n\t"] {
        let result = extract(markup, 12);
        assert_eq!(result.image_url, "");
        assert_eq!(result.snippet, "");
    }
}

#[test]
fn test_image_only_input() {
    let result = extract(r#"<img src="http://x/only.png">"#, 12);
    assert_eq!(result.image_url, "http://x/only.png");
    assert_eq!(result.snippet, "");
}

#[test]
fn test_embedded_data_uri_image_is_the_lead_image() {
    let result = extract(
        r#"<p>Hi there</p><img src="data:image/png;base64,iVBORw0KGgo="><img src="/uploads/x.png">"#,
        12,
    );
    assert_eq!(result.image_url, "data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(result.snippet, "Hi there");
    assert!(result.cleaned_markup.contains("/uploads/x.png"));
}

#[test]
fn test_relative_image_source_is_kept_verbatim() {
    let result = extract(r#"<p>Hi there</p><img src="/uploads/x.png">"#, 12);
    assert_eq!(result.image_url, "/uploads/x.png");
}

#[test]
fn test_non_image_data_uri_is_not_a_lead_image() {
    let result = extract(r#"<img src="data:text/html;base64,PHNjcmlwdD4="><p>text</p>"#, 12);
    assert_eq!(result.image_url, "");
    assert_eq!(result.snippet, "text");
}

#[test]
fn test_script_content_never_reaches_parser_or_snippet() {
    let parser = RecordingParser::new();
    let extractor = ContentSnippetExtractor::with_parser(Sanitizer::new(), parser.clone());

    let result = extractor.extract(
        r#"<p>safe words</p><script>document.cookie</script><img src="http://x/a.png" onerror="steal()">"#,
        12,
    );

    assert_eq!(result.snippet, "safe words");
    assert_eq!(parser.parse_count(), 1);
    for markup in parser.parsed() {
        assert!(!markup.contains("script"));
        assert!(!markup.contains("document.cookie"));
        assert!(!markup.contains("onerror"));
    }
}

#[test]
fn test_caller_markup_is_untouched() {
    let markup = String::from(r#"<p>text</p><img src="http://x/a.png">"#);
    let before = markup.clone();
    let _ = extract(&markup, 12);
    assert_eq!(markup, before);
}

fn paragraph(words: &[String]) -> String {
    format!("<p>{}</p>", words.join(" "))
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn word_count_respects_limit(
        words in prop::collection::vec("[a-z]{1,8}", 0..40),
        max_words in 1usize..30,
    ) {
        let result = extract(&paragraph(&words), max_words);

        if words.len() <= max_words {
            prop_assert!(!result.snippet.ends_with(ELLIPSIS));
            prop_assert_eq!(result.snippet.split_whitespace().count(), words.len());
            prop_assert_eq!(result.snippet, words.join(" "));
        } else {
            let body = result.snippet.strip_suffix(ELLIPSIS);
            prop_assert!(body.is_some());
            let body = body.unwrap_or_default();
            prop_assert_eq!(body.split_whitespace().count(), max_words);
            prop_assert_eq!(body, words[..max_words].join(" "));
        }
    }

    #[test]
    fn no_image_means_empty_url(words in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        prop_assert_eq!(extract(&paragraph(&words), 12).image_url, "");
    }

    #[test]
    fn first_image_wins_and_is_not_text(
        words in prop::collection::vec("[a-z]{1,8}", 1..20),
        position in 0usize..20,
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
    ) {
        let position = position % (words.len() + 1);
        let mut parts: Vec<String> = words.clone();
        parts.insert(position, format!(r#"<img src="http://x/{first}.png" alt="{first}">"#));
        parts.push(format!(r#"<img src="http://x/later-{second}.png">"#));
        let markup = format!("<p>{}</p>", parts.join(" "));

        let result = extract(&markup, 100);
        prop_assert_eq!(result.image_url, format!("http://x/{first}.png"));
        prop_assert_eq!(result.snippet, words.join(" "));
        let first_path = format!("x/{first}.png");
        let second_path = format!("x/later-{second}.png");
        prop_assert!(!result.cleaned_markup.contains(&first_path));
        prop_assert!(result.cleaned_markup.contains(&second_path));
    }

    #[test]
    fn extraction_is_idempotent(
        words in prop::collection::vec("[a-z]{1,8}", 0..30),
        max_words in 1usize..20,
    ) {
        let markup = format!(r#"<img src="http://x/a.png">{}"#, paragraph(&words));
        prop_assert_eq!(extract(&markup, max_words), extract(&markup, max_words));
    }
}
