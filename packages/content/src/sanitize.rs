//! HTML sanitization boundary.
//!
//! Post descriptions are user-authored rich text and are never trusted.
//! [`SanitizedMarkup`] can only be produced by [`Sanitizer::clean`], and the
//! parser seam only accepts `&SanitizedMarkup`, so "sanitize before parse"
//! holds by construction.

use std::borrow::Cow;
use std::fmt;

const DATA_SCHEME: &str = "data:";
const DATA_IMAGE_PREFIX: &str = "data:image/";

/// Markup that has passed through a [`Sanitizer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedMarkup(String);

impl SanitizedMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SanitizedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Removes script-executing constructs while keeping presentational
/// structure (paragraphs, images, emphasis, lists, headings, links).
///
/// `<script>` and `<style>` are dropped together with their content, event
/// handler attributes are stripped, and only safe URL schemes survive in
/// `href`/`src`. Inline `data:image/*` URIs are kept on `img[src]`, since
/// the post editor embeds pasted images that way; `data:` is dropped
/// everywhere else.
pub struct Sanitizer {
    policy: ammonia::Builder<'static>,
}

impl Sanitizer {
    /// The default rich-text policy.
    pub fn new() -> Self {
        let mut policy = ammonia::Builder::default();
        // Editor alignment classes.
        policy.add_generic_attributes(["class"]);
        policy.add_url_schemes(["data"]);
        policy.attribute_filter(restrict_data_urls);
        Self { policy }
    }

    /// Use a custom ammonia policy.
    pub fn with_policy(policy: ammonia::Builder<'static>) -> Self {
        Self { policy }
    }

    pub fn clean(&self, markup: &str) -> SanitizedMarkup {
        if markup.trim().is_empty() {
            return SanitizedMarkup::default();
        }
        SanitizedMarkup(self.policy.clean(markup).to_string())
    }
}

/// Keep `data:` values only as inline images on `img[src]`.
fn restrict_data_urls<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if !starts_with_ignore_case(value.trim_start(), DATA_SCHEME) {
        return Some(Cow::Borrowed(value));
    }
    let inline_image = element == "img"
        && attribute == "src"
        && starts_with_ignore_case(value.trim_start(), DATA_IMAGE_PREFIX);
    inline_image.then_some(Cow::Borrowed(value))
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sanitizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_removed_with_content() {
        let clean = Sanitizer::new().clean("<p>ok</p><script>alert('x')</script>");
        assert!(!clean.as_str().contains("script"));
        assert!(!clean.as_str().contains("alert"));
        assert!(clean.as_str().contains("<p>ok</p>"));
    }

    #[test]
    fn test_event_handlers_stripped() {
        let clean = Sanitizer::new().clean(r#"<img src="http://x/a.png" onerror="steal()">"#);
        assert!(clean.as_str().contains(r#"src="http://x/a.png""#));
        assert!(!clean.as_str().contains("onerror"));
    }

    #[test]
    fn test_javascript_urls_stripped() {
        let clean = Sanitizer::new().clean(r#"<a href="javascript:steal()">x</a>"#);
        assert!(!clean.as_str().contains("javascript"));
    }

    #[test]
    fn test_structure_preserved() {
        let clean = Sanitizer::new().clean("<p><em>a</em> <strong>b</strong></p><ul><li>c</li></ul>");
        for tag in ["<p>", "<em>", "<strong>", "<ul>", "<li>"] {
            assert!(clean.as_str().contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn test_inline_image_data_uri_kept() {
        let clean = Sanitizer::new().clean(r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#);
        assert!(clean.as_str().contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#));
    }

    #[test]
    fn test_data_uri_dropped_outside_img_src() {
        let clean = Sanitizer::new().clean(
            r#"<a href="data:text/html;base64,PHNjcmlwdD4=">x</a><img src="data:text/html,<b>x</b>">"#,
        );
        assert!(!clean.as_str().contains("data:"));
        assert!(clean.as_str().contains("<img"));
    }

    #[test]
    fn test_restrict_data_urls() {
        assert!(restrict_data_urls("img", "src", "DATA:image/gif;base64,R0lG").is_some());
        assert!(restrict_data_urls("img", "src", "data:image/svg+xml,<svg/>").is_some());
        assert!(restrict_data_urls("a", "href", "data:image/png;base64,AA").is_none());
        assert!(restrict_data_urls("img", "src", "data:text/plain,hi").is_none());
        assert_eq!(
            restrict_data_urls("a", "href", "http://x/a").as_deref(),
            Some("http://x/a")
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(Sanitizer::new().clean("   \n").is_empty());
    }
}
