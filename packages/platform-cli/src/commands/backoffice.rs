use anyhow::{Context as _, Result};
use colored::Colorize;
use content::backoffice::{self, Decision};
use content::dashboard::DashboardStats;
use content::feed;
use content::types::{PostId, PostStatus};

use super::Context;
use crate::output;

pub async fn posts(ctx: &Context, status: PostStatus) -> Result<()> {
    let posts = ctx
        .client
        .backoffice_posts()
        .await
        .context("Failed to load posts for review")?;

    let counts = backoffice::status_counts(&posts);
    let selected: Vec<_> = backoffice::by_status(&posts, status)
        .into_iter()
        .map(|post| feed::list_card(&ctx.extractor, post, &ctx.snippets))
        .collect();

    if ctx.json {
        return output::print_json(&selected);
    }

    let tabs: Vec<String> = counts
        .iter()
        .map(|(tab, count)| {
            let label = format!("{} ({})", tab.label(), count);
            if *tab == status {
                label.bold().underline().to_string()
            } else {
                label
            }
        })
        .collect();
    println!("{}", tabs.join(" | "));
    println!();
    output::print_cards(&selected);
    Ok(())
}

pub async fn decide(ctx: &Context, id: &str, decision: Decision) -> Result<()> {
    let id = PostId::new(id);
    let resp = ctx
        .client
        .moderate(&id, decision)
        .await
        .with_context(|| format!("Failed to {decision} post {id}"))?;

    let status = decision.target_status();
    println!(
        "{} {}",
        format!("Post {}", status.label().to_lowercase()).green(),
        resp.message.unwrap_or_default().dimmed()
    );
    Ok(())
}

pub async fn reports(ctx: &Context) -> Result<()> {
    let reports = ctx
        .client
        .reports()
        .await
        .context("Failed to load reports")?;
    let cards = backoffice::report_cards(&ctx.extractor, &reports, &ctx.snippets);

    if ctx.json {
        return output::print_json(&cards);
    }
    output::print_reports(&cards);
    Ok(())
}

pub async fn authors(ctx: &Context, search: &str, page: usize) -> Result<()> {
    let users = ctx
        .client
        .authors()
        .await
        .context("Failed to load authors")?;
    let table = backoffice::author_table(users, search, page);

    if ctx.json {
        return output::print_json(&table);
    }
    output::print_authors(&table);
    Ok(())
}

pub async fn stats(ctx: &Context) -> Result<()> {
    let users = ctx
        .client
        .authors()
        .await
        .context("Failed to load authors")?;
    let posts = ctx
        .client
        .list_posts()
        .await
        .context("Failed to load posts")?;
    let stats = DashboardStats::compute(&users, &posts);

    if ctx.json {
        return output::print_json(&stats);
    }
    output::print_stats(&stats);
    Ok(())
}
