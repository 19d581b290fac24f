use anyhow::{Context as _, Result};
use colored::Colorize;
use content::profile;
use serde_json::json;
use tracing::info;

use super::Context;
use crate::output;

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let resp = ctx
        .client
        .login(email, password)
        .await
        .context("Login failed")?;
    info!(username = ?resp.username, admin = resp.is_admin(), "Logged in");

    if ctx.json {
        return output::print_json(&json!({
            "token": resp.token,
            "username": resp.username,
            "role": resp.role,
            "message": resp.message,
        }));
    }

    if let Some(message) = &resp.message {
        println!("{}", message.green());
    }
    println!("Export the token to stay logged in:");
    println!("  export PLATFORM_TOKEN={}", resp.token);
    if let Some(username) = &resp.username {
        println!("  export PLATFORM_USERNAME={}", username);
    }
    Ok(())
}

pub async fn register(ctx: &Context, username: &str, email: &str, password: &str) -> Result<()> {
    let resp = ctx
        .client
        .register(username, email, password)
        .await
        .context("Registration failed")?;
    println!(
        "{}",
        resp.message
            .unwrap_or_else(|| "Registered. You can now log in.".to_string())
            .green()
    );
    Ok(())
}

pub async fn profile(ctx: &Context) -> Result<()> {
    let user = ctx
        .client
        .current_user()
        .await
        .context("Failed to load user")?;
    let posts = ctx
        .client
        .user_posts()
        .await
        .context("Failed to load your posts")?;

    let summary = profile::summarize(&ctx.extractor, &posts, &ctx.snippets);

    if ctx.json {
        return output::print_json(&json!({ "user": user, "summary": summary }));
    }
    output::print_profile(&user.username, &summary);
    Ok(())
}
