//! Reading-time estimate for post drafts.
//!
//! This is display metadata only. Tags are stripped with a plain pattern
//! rather than sanitized, since nothing here is rendered.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Assumed reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

/// Estimated reading time for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: u32,
}

impl ReadingTime {
    /// `ceil(words / 200)`; empty content reads in zero minutes.
    pub fn from_word_count(words: usize) -> Self {
        let minutes = words.div_ceil(WORDS_PER_MINUTE);
        Self {
            words,
            minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.minutes == 1 { "minute" } else { "minutes" };
        write!(f, "{} {}", self.minutes, unit)
    }
}

/// Count words in markup after removing tags.
///
/// Tags are removed without inserting whitespace, so `a<br>b` counts as one
/// word, matching how drafts have always been measured.
pub fn word_count(markup: &str) -> usize {
    TAG_PATTERN.replace_all(markup, "").split_whitespace().count()
}

pub fn estimate(markup: &str) -> ReadingTime {
    ReadingTime::from_word_count(word_count(markup))
}
