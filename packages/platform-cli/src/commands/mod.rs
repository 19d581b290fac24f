//! Subcommand implementations.

pub mod account;
pub mod backoffice;
pub mod posts;
pub mod tools;

use anyhow::{Context as _, Result};
use content::types::ANONYMOUS;
use content::{ContentSnippetExtractor, SnippetConfig};
use platform_client::PlatformClient;
use std::io::Read;
use std::path::Path;

use crate::config::Config;

/// Shared state handed to every subcommand.
pub struct Context {
    pub client: PlatformClient,
    pub extractor: ContentSnippetExtractor,
    pub snippets: SnippetConfig,
    pub page_size: usize,
    pub username: Option<String>,
    pub json: bool,
}

impl Context {
    pub fn new(config: &Config, json: bool) -> Result<Self> {
        let mut client = PlatformClient::with_timeout(&config.api_url, config.timeout)
            .with_context(|| format!("Invalid API URL {}", config.api_url))?;
        if let Some(token) = &config.token {
            client.set_token(token.as_str());
        }

        Ok(Self {
            client,
            extractor: ContentSnippetExtractor::new(),
            snippets: config.snippet_config(),
            page_size: config.page_size,
            username: config.username.clone(),
            json,
        })
    }

    /// Who comments are posted as: an explicit name, the configured
    /// username, or anonymous.
    pub fn commenter(&self, explicit: Option<String>) -> String {
        explicit
            .or_else(|| self.username.clone())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string())
    }
}

/// Markup from an inline argument, a file, or stdin, in that order.
pub fn read_markup(body: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(body) = body {
        return Ok(body);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read markup from stdin")?;
    Ok(buffer)
}
