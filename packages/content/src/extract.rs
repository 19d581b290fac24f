//! Lead-image and snippet extraction from rich-text post content.
//!
//! Every entry point sanitizes first, parses the sanitized copy into a
//! private working tree, and leaves the caller's markup untouched. Nothing
//! here can fail: malformed or empty markup degrades to empty output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parser::{HtmlParser, ScraperParser};
use crate::sanitize::{SanitizedMarkup, Sanitizer};

/// Appended to snippets that were cut short.
pub const ELLIPSIS: &str = "...";

const IMAGE_TAG: &str = "img";
const IMAGE_SOURCE: &str = "src";

/// Output of [`ContentSnippetExtractor::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// `src` of the first image in document order, empty if there is none.
    pub image_url: String,
    /// Plain text, at most `max_words` words plus [`ELLIPSIS`] when truncated.
    pub snippet: String,
    /// Sanitized markup with the lead image removed.
    pub cleaned_markup: String,
}

impl ExtractionResult {
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.snippet.ends_with(ELLIPSIS)
    }
}

/// Lead image split out of a post body, as used by detail views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstImage {
    pub image_url: String,
    pub cleaned_markup: String,
}

/// Derives card imagery and preview text from post descriptions.
#[derive(Debug, Default)]
pub struct ContentSnippetExtractor<P = ScraperParser> {
    sanitizer: Sanitizer,
    parser: P,
}

impl ContentSnippetExtractor<ScraperParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: HtmlParser> ContentSnippetExtractor<P> {
    pub fn with_parser(sanitizer: Sanitizer, parser: P) -> Self {
        Self { sanitizer, parser }
    }

    /// Sanitize markup for direct rendering (e.g. a full post body).
    pub fn sanitize(&self, markup: &str) -> SanitizedMarkup {
        self.sanitizer.clean(markup)
    }

    /// Lead image URL plus a word-bounded snippet of the remaining text.
    ///
    /// The lead image is removed from the working tree before text is read,
    /// so it never contributes to the snippet. `max_words` of zero is
    /// treated as one.
    pub fn extract(&self, markup: &str, max_words: usize) -> ExtractionResult {
        let mut doc = self.parser.parse(&self.sanitizer.clean(markup));
        let image_url = self.take_first_image(&mut doc);
        let snippet = truncate_words(&self.parser.text_content(&doc), max_words);

        debug!(
            has_image = !image_url.is_empty(),
            snippet_len = snippet.len(),
            "Extracted content snippet"
        );

        ExtractionResult {
            image_url,
            snippet,
            cleaned_markup: self.parser.inner_html(&doc),
        }
    }

    /// Split the first image out of the markup without computing a snippet.
    pub fn extract_first_image(&self, markup: &str) -> FirstImage {
        let mut doc = self.parser.parse(&self.sanitizer.clean(markup));
        let image_url = self.take_first_image(&mut doc);
        FirstImage {
            image_url,
            cleaned_markup: self.parser.inner_html(&doc),
        }
    }

    /// The first image's URL, if any.
    pub fn lead_image(&self, markup: &str) -> Option<String> {
        let doc = self.parser.parse(&self.sanitizer.clean(markup));
        self.parser
            .first_of_type(&doc, IMAGE_TAG)
            .and_then(|img| img.attr(IMAGE_SOURCE).map(str::to_string))
            .filter(|src| !src.is_empty())
    }

    /// Word-bounded snippet with every image removed, not just the first.
    pub fn text_snippet(&self, markup: &str, max_words: usize) -> String {
        let mut doc = self.parser.parse(&self.sanitizer.clean(markup));
        let removed = self.parser.remove_all(&mut doc, IMAGE_TAG);
        debug!(removed, "Stripped images for text snippet");
        truncate_words(&self.parser.text_content(&doc), max_words)
    }

    fn take_first_image(&self, doc: &mut P::Document) -> String {
        match self.parser.first_of_type(doc, IMAGE_TAG) {
            Some(img) => {
                let url = img.attr(IMAGE_SOURCE).unwrap_or_default().to_string();
                self.parser.remove(doc, &img);
                url
            }
            None => String::new(),
        }
    }
}

/// Extract with the default sanitizer and parser.
pub fn extract(markup: &str, max_words: usize) -> ExtractionResult {
    ContentSnippetExtractor::new().extract(markup, max_words)
}

/// Keep at most `max_words` whitespace-separated words.
///
/// Words are re-joined with single spaces. [`ELLIPSIS`] is appended only when
/// the text has strictly more than `max_words` words.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let max_words = max_words.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() > max_words {
        let mut snippet = words[..max_words].join(" ");
        snippet.push_str(ELLIPSIS);
        snippet
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_exact_limit_not_truncated() {
        assert_eq!(truncate_words("a b c", 3), "a b c");
    }

    #[test]
    fn test_truncate_over_limit() {
        assert_eq!(truncate_words("a b c d", 3), "a b c...");
    }

    #[test]
    fn test_truncate_collapses_whitespace() {
        assert_eq!(truncate_words("  a\n\n b\t c  ", 12), "a b c");
    }

    #[test]
    fn test_truncate_zero_treated_as_one() {
        assert_eq!(truncate_words("a b", 0), "a...");
    }

    #[test]
    fn test_image_removed_from_cleaned_markup() {
        let result = extract(r#"<p>Hi <img src="http://x/a.png"></p>"#, 12);
        assert_eq!(result.image_url, "http://x/a.png");
        assert!(!result.cleaned_markup.contains("<img"));
        assert!(result.cleaned_markup.contains("Hi"));
    }

    #[test]
    fn test_image_without_src() {
        let result = extract("<p>text</p><img alt=\"no source\">", 12);
        assert_eq!(result.image_url, "");
        assert!(!result.has_image());
        assert_eq!(result.snippet, "text");
    }

    #[test]
    fn test_lead_image() {
        let extractor = ContentSnippetExtractor::new();
        assert_eq!(
            extractor.lead_image(r#"<img src="http://x/1.png"><img src="http://x/2.png">"#),
            Some("http://x/1.png".to_string())
        );
        assert_eq!(extractor.lead_image("<p>none</p>"), None);
    }

    #[test]
    fn test_text_snippet_drops_all_images() {
        let extractor = ContentSnippetExtractor::new();
        let markup = r#"<img src="http://x/1.png" alt="one"><p>body</p><img src="http://x/2.png" alt="two">"#;
        assert_eq!(extractor.text_snippet(markup, 20), "body");
    }

    #[test]
    fn test_extract_first_image_keeps_later_images() {
        let extractor = ContentSnippetExtractor::new();
        let first = extractor
            .extract_first_image(r#"<img src="http://x/1.png"><p>a</p><img src="http://x/2.png">"#);
        assert_eq!(first.image_url, "http://x/1.png");
        assert!(first.cleaned_markup.contains("2.png"));
        assert!(!first.cleaned_markup.contains("1.png"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(extract("<p>x</p>", 12)).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("cleanedMarkup").is_some());
    }
}
