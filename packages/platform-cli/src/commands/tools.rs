//! Offline commands that run the content pipeline on local markup.

use anyhow::Result;
use colored::Colorize;
use content::reading_time;
use std::path::Path;

use super::{read_markup, Context};
use crate::output;

pub fn snippet(
    ctx: &Context,
    body: Option<String>,
    file: Option<&Path>,
    words: Option<usize>,
) -> Result<()> {
    let markup = read_markup(body, file)?;
    let max_words = words.unwrap_or(ctx.snippets.list_card_words);
    let result = ctx.extractor.extract(&markup, max_words);

    if ctx.json {
        return output::print_json(&result);
    }
    let image = if result.has_image() {
        result.image_url.as_str()
    } else {
        "(none)"
    };
    println!("{} {}", "image".dimmed(), image);
    println!("{} {}", "snippet".dimmed(), result.snippet);
    Ok(())
}

pub fn reading_time(ctx: &Context, body: Option<String>, file: Option<&Path>) -> Result<()> {
    let markup = read_markup(body, file)?;
    let estimate = reading_time::estimate(&markup);

    if ctx.json {
        return output::print_json(&estimate);
    }
    println!("{} ({} words)", estimate.to_string().bold(), estimate.words);
    Ok(())
}
