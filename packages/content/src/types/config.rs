//! Configuration for snippet rendering.

use serde::{Deserialize, Serialize};

/// Placeholder shown on list cards when a post has no image at all.
pub const LIST_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400?text=No+Image";

/// Placeholder shown on related-post cards.
pub const RELATED_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x300";

/// Word limits and fallback imagery for the different card surfaces.
///
/// List cards and related/profile cards have historically used different
/// limits; both are kept configurable rather than unified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// Words shown on feed list cards. Default: 12.
    pub list_card_words: usize,

    /// Words shown on related-post cards. Default: 20.
    pub related_card_words: usize,

    /// Words shown on the author's own profile cards. Default: 20.
    pub profile_card_words: usize,

    /// Image used when neither the content nor the post has one.
    pub list_placeholder_image: String,

    /// Image used for related cards without any image.
    pub related_placeholder_image: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            list_card_words: 12,
            related_card_words: 20,
            profile_card_words: 20,
            list_placeholder_image: LIST_PLACEHOLDER_IMAGE.to_string(),
            related_placeholder_image: RELATED_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl SnippetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_card_words(mut self, words: usize) -> Self {
        self.list_card_words = words;
        self
    }

    pub fn with_related_card_words(mut self, words: usize) -> Self {
        self.related_card_words = words;
        self
    }

    pub fn with_profile_card_words(mut self, words: usize) -> Self {
        self.profile_card_words = words;
        self
    }

    pub fn with_list_placeholder(mut self, url: impl Into<String>) -> Self {
        self.list_placeholder_image = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_both_limits() {
        let config = SnippetConfig::default();
        assert_eq!(config.list_card_words, 12);
        assert_eq!(config.related_card_words, 20);
    }

    #[test]
    fn test_builder() {
        let config = SnippetConfig::new()
            .with_list_card_words(8)
            .with_related_card_words(30);
        assert_eq!(config.list_card_words, 8);
        assert_eq!(config.related_card_words, 30);
        assert_eq!(config.profile_card_words, 20);
    }
}
