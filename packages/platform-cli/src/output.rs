//! Terminal rendering of views.

use anyhow::Result;
use colored::Colorize;
use content::backoffice::ReportCard;
use content::dashboard::DashboardStats;
use content::detail::PostDetail;
use content::feed::{Feed, PostCard};
use content::profile::ProfileSummary;
use content::{Page, PageInfo, PostStatus, User};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn status_tag(status: PostStatus) -> colored::ColoredString {
    match status {
        PostStatus::Approved => status.label().green(),
        PostStatus::Pending => status.label().yellow(),
        PostStatus::Rejected => status.label().red(),
    }
}

pub fn print_card(card: &PostCard) {
    println!(
        "{} {} {}",
        card.title.bold(),
        format!("[{}]", card.category).cyan(),
        status_tag(card.status)
    );
    println!("  {} {}", "by".dimmed(), card.author);
    if !card.snippet.is_empty() {
        println!("  {}", card.snippet);
    }
    println!(
        "  {} {}  {} likes  {} comments",
        "id".dimmed(),
        card.id,
        card.like_count,
        card.comment_count
    );
    if !card.image_url.is_empty() {
        println!("  {} {}", "image".dimmed(), card.image_url.dimmed());
    }
}

pub fn print_cards(cards: &[PostCard]) {
    if cards.is_empty() {
        println!("{}", "No posts.".dimmed());
        return;
    }
    for card in cards {
        print_card(card);
        println!();
    }
}

pub fn print_page_info(info: &PageInfo) {
    println!(
        "{}",
        format!(
            "Page {} of {} ({} total)",
            info.current_page,
            info.total_pages.max(1),
            info.total_items
        )
        .dimmed()
    );
}

pub fn print_feed(feed: &Feed) {
    let categories: Vec<String> = feed
        .categories
        .iter()
        .map(|category| {
            if *category == feed.selected {
                category.bold().underline().to_string()
            } else {
                category.to_string()
            }
        })
        .collect();
    println!("{}", categories.join(" | "));
    println!();
    print_cards(&feed.page.items);
    print_page_info(&feed.page.page_info);
}

pub fn print_detail(detail: &PostDetail, related: &[PostCard]) {
    println!("{}", detail.title.bold());
    println!(
        "{} {}  {}  {}",
        format!("[{}]", detail.category).cyan(),
        status_tag(detail.status),
        detail.author,
        format!("{} read", detail.reading_time).dimmed()
    );
    if let Some(image) = &detail.image {
        println!("{} {}", "cover".dimmed(), image);
    }
    if !detail.lead_image.is_empty() {
        println!("{} {}", "image".dimmed(), detail.lead_image);
    }
    println!();
    println!("{}", detail.cleaned_body);
    println!();

    let liked = if detail.liked { " (you liked this)" } else { "" };
    println!("{} likes{}", detail.like_count, liked);
    println!(
        "{}",
        format!("Comments ({})", detail.comments.len() + detail.reply_count()).bold()
    );
    for comment in &detail.comments {
        let id = comment.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        println!("  {}: {} {}", comment.author().bold(), comment.content, id.dimmed());
        for reply in &comment.replies {
            println!("    {}: {}", reply.author().bold(), reply.content);
        }
    }

    if !related.is_empty() {
        println!();
        println!("{}", "Related".bold());
        for card in related {
            println!("  {} {}", card.title, format!("({})", card.id).dimmed());
            println!("    {}", card.snippet);
        }
    }
}

pub fn print_profile(username: &str, summary: &ProfileSummary) {
    println!("{}", username.bold());
    println!(
        "{} posts  {} likes  {} comments",
        summary.total_posts, summary.total_likes, summary.total_comments
    );
    println!();
    println!("{}", format!("Published ({})", summary.published.len()).green().bold());
    print_cards(&summary.published);
    println!("{}", format!("Pending ({})", summary.pending.len()).yellow().bold());
    print_cards(&summary.pending);
}

pub fn print_reports(reports: &[ReportCard]) {
    if reports.is_empty() {
        println!("{}", "No reports.".dimmed());
        return;
    }
    for report in reports {
        println!("{} {}", "Reason:".red().bold(), report.reason);
        println!("  {} {}", "reported by".dimmed(), report.reporter);
        print_card(&report.post);
        println!();
    }
}

pub fn print_authors(page: &Page<User>) {
    if page.is_empty() {
        println!("{}", "No authors.".dimmed());
    }
    for user in &page.items {
        println!("{:<24} {:<32} {}", user.username.bold(), user.email, user.id.to_string().dimmed());
    }
    print_page_info(&page.page_info);
}

pub fn print_stats(stats: &DashboardStats) {
    println!("{:<16} {}", "Users".bold(), stats.total_users);
    println!("{:<16} {}", "Posts".bold(), stats.total_posts);
    println!("{:<16} {}", "Likes".bold(), stats.total_likes);
    println!("{:<16} {}", "Comments".bold(), stats.total_comments);
    println!();
    println!("{}", "Posts per category".bold());
    for (category, count) in &stats.posts_per_category {
        println!("  {:<20} {}", category, count);
    }
    println!();
    println!("{}", "Posts per month".bold());
    for (month, count) in stats.months() {
        println!("  {:<4} {}", month, "#".repeat(count));
    }
}
