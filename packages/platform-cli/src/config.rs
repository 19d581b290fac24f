use anyhow::{Context, Result};
use content::SnippetConfig;
use dotenvy::dotenv;
use platform_client::DEFAULT_BASE_URL;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
    /// Name used for comments and replies; anonymous when unset.
    pub username: Option<String>,
    pub timeout: Duration,
    pub list_snippet_words: usize,
    pub related_snippet_words: usize,
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_url: env::var("PLATFORM_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            token: non_empty_var("PLATFORM_TOKEN"),
            username: non_empty_var("PLATFORM_USERNAME"),
            timeout: Duration::from_secs(parse_var("PLATFORM_TIMEOUT_SECS", 30)?),
            list_snippet_words: parse_var("PLATFORM_LIST_SNIPPET_WORDS", 12)?,
            related_snippet_words: parse_var("PLATFORM_RELATED_SNIPPET_WORDS", 20)?,
            page_size: parse_var("PLATFORM_PAGE_SIZE", 12)?,
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, api_url: Option<String>, token: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        self
    }

    pub fn snippet_config(&self) -> SnippetConfig {
        SnippetConfig::default()
            .with_list_card_words(self.list_snippet_words)
            .with_related_card_words(self.related_snippet_words)
            .with_profile_card_words(self.related_snippet_words)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty_var(name) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid number")),
        None => Ok(default),
    }
}
