use anyhow::{Context as _, Result};
use colored::Colorize;
use content::detail::PostDetail;
use content::feed::{self, CategoryFilter};
use content::types::{PostId, UserRef};
use content::PageRequest;
use platform_client::{NewPost, PlatformError};
use serde_json::json;
use std::path::Path;
use tracing::{info, warn};

use super::{read_markup, Context};
use crate::output;

pub async fn feed(
    ctx: &Context,
    category: Option<&str>,
    page: usize,
    per_page: Option<usize>,
) -> Result<()> {
    let posts = ctx.client.list_posts().await.context("Failed to load posts")?;
    let request = PageRequest {
        page: Some(page),
        per_page: Some(per_page.unwrap_or(ctx.page_size)),
    }
    .validate();

    let feed = feed::build_feed(
        &ctx.extractor,
        posts,
        &CategoryFilter::from(category),
        &request,
        &ctx.snippets,
    );

    if ctx.json {
        return output::print_json(&feed);
    }
    output::print_feed(&feed);
    Ok(())
}

pub async fn show(ctx: &Context, id: &str) -> Result<()> {
    let id = PostId::new(id);
    let post = ctx
        .client
        .get_post(&id)
        .await
        .with_context(|| format!("Failed to load post {id}"))?;

    let viewer = if ctx.client.has_token() {
        match ctx.client.current_user().await {
            Ok(user) => Some(UserRef::from(&user)),
            Err(e) => {
                warn!(error = %e, "Could not resolve current user");
                None
            }
        }
    } else {
        None
    };

    let related = match ctx.client.related_posts(&post.category).await {
        Ok(posts) => feed::related_cards(&ctx.extractor, &posts, &post.id, &ctx.snippets),
        Err(e) => {
            warn!(error = %e, "Failed to load related posts");
            Vec::new()
        }
    };

    let detail = PostDetail::build(&ctx.extractor, &post, viewer.as_ref());

    if ctx.json {
        return output::print_json(&json!({ "post": detail, "related": related }));
    }
    output::print_detail(&detail, &related);
    Ok(())
}

pub async fn like(ctx: &Context, id: &str) -> Result<()> {
    let id = PostId::new(id);
    match ctx.client.like_post(&id).await {
        Ok(likes) => {
            info!(post_id = %id, likes = likes.len(), "Liked post");
            if ctx.json {
                return output::print_json(&json!({ "likes": likes.len() }));
            }
            println!("{} ({} likes)", "Liked".green(), likes.len());
            Ok(())
        }
        Err(PlatformError::AlreadyLiked) => {
            println!("{}", "You have already liked this post!".yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to like the post"),
    }
}

pub async fn comment(ctx: &Context, id: &str, text: &str, as_user: Option<String>) -> Result<()> {
    let id = PostId::new(id);
    let user = ctx.commenter(as_user);
    let comment = ctx
        .client
        .comment(&id, &user, text)
        .await
        .context("Failed to add comment")?;

    if ctx.json {
        return output::print_json(&comment);
    }
    println!("{} as {}", "Commented".green(), comment.author());
    Ok(())
}

pub async fn reply(
    ctx: &Context,
    id: &str,
    comment_id: &str,
    text: &str,
    as_user: Option<String>,
) -> Result<()> {
    let id = PostId::new(id);
    let user = ctx.commenter(as_user);
    let reply = ctx
        .client
        .reply(&id, comment_id, &user, text)
        .await
        .context("Failed to reply to comment")?;

    if ctx.json {
        return output::print_json(&reply);
    }
    println!("{} as {}", "Replied".green(), reply.author());
    Ok(())
}

pub async fn report(ctx: &Context, id: &str, reason: &str) -> Result<()> {
    let id = PostId::new(id);
    ctx.client
        .report_post(&id, reason)
        .await
        .context("Failed to submit report")?;
    println!("{}", "Report submitted successfully".green());
    Ok(())
}

pub async fn publish(
    ctx: &Context,
    title: &str,
    category: &str,
    body: Option<String>,
    file: Option<&Path>,
) -> Result<()> {
    let description = read_markup(body, file)?;
    let draft = NewPost::new(title, description, category);
    info!(title, reading_time = draft.reading_time, "Publishing post");

    let resp = ctx
        .client
        .create_post(&draft)
        .await
        .context("Failed to create post")?;
    println!(
        "{}",
        resp.message
            .unwrap_or_else(|| "Post submitted for review".to_string())
            .green()
    );
    Ok(())
}

pub async fn edit(
    ctx: &Context,
    id: &str,
    title: Option<String>,
    category: Option<String>,
    body: Option<String>,
    file: Option<&Path>,
) -> Result<()> {
    let id = PostId::new(id);
    let current = ctx
        .client
        .get_post(&id)
        .await
        .with_context(|| format!("Failed to load post {id}"))?;

    let description = match (body, file) {
        (None, None) => current.description,
        (body, file) => read_markup(body, file)?,
    };
    let draft = NewPost::new(
        title.unwrap_or(current.title),
        description,
        category.unwrap_or(current.category),
    );

    ctx.client
        .update_post(&id, &draft)
        .await
        .context("Failed to update post")?;
    println!("{}", "Post updated".green());
    Ok(())
}

pub async fn delete(ctx: &Context, id: &str) -> Result<()> {
    let id = PostId::new(id);
    ctx.client
        .delete_post(&id)
        .await
        .context("Failed to delete post")?;
    info!(post_id = %id, "Deleted post");
    println!("{}", "Post deleted".green());
    Ok(())
}
