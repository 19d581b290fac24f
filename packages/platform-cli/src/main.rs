//! Command-line client for the skill-sharing platform.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use content::backoffice::Decision;
use content::types::PostStatus;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{account, backoffice, posts, tools, Context};
use config::Config;

#[derive(Parser)]
#[command(name = "platform")]
#[command(about = "Browse, publish and moderate posts on the skill-sharing platform")]
struct Cli {
    /// Backend base URL (overrides PLATFORM_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token (overrides PLATFORM_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Markup input shared by commands that take a post body.
#[derive(clap::Args)]
struct BodyArgs {
    /// Inline markup
    #[arg(long, conflicts_with = "file")]
    body: Option<String>,

    /// Read markup from a file (stdin when neither is given)
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List approved posts
    Feed {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Show a post with its comments and related posts
    Show { id: String },

    /// Like a post
    Like { id: String },

    /// Comment on a post
    Comment {
        id: String,
        content: String,
        /// Post under this name instead of PLATFORM_USERNAME
        #[arg(long = "as")]
        as_user: Option<String>,
    },

    /// Reply to a comment
    Reply {
        id: String,
        comment_id: String,
        content: String,
        #[arg(long = "as")]
        as_user: Option<String>,
    },

    /// Report a post to moderators
    Report { id: String, reason: String },

    /// Log in and print the token
    Login {
        email: String,
        #[arg(long, env = "PLATFORM_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account
    Register {
        username: String,
        email: String,
        #[arg(long, env = "PLATFORM_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Your published and pending posts
    Profile,

    /// Submit a new post for review
    Publish {
        title: String,
        #[arg(long)]
        category: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    /// Edit one of your posts
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, conflicts_with = "file")]
        body: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete one of your posts
    Delete { id: String },

    /// Moderation (admin only)
    #[command(subcommand)]
    Backoffice(BackofficeCommands),

    /// Print the lead image and snippet of some markup
    Snippet {
        #[command(flatten)]
        body: BodyArgs,
        /// Maximum words (defaults to PLATFORM_LIST_SNIPPET_WORDS)
        #[arg(long)]
        words: Option<usize>,
    },

    /// Estimate reading time of some markup
    ReadingTime {
        #[command(flatten)]
        body: BodyArgs,
    },
}

#[derive(Subcommand)]
enum BackofficeCommands {
    /// Posts in one moderation tab
    Posts {
        #[arg(long, default_value = "pending", value_parser = parse_status)]
        status: PostStatus,
    },

    /// Approve a pending post
    Approve { id: String },

    /// Reject a pending post
    Reject { id: String },

    /// Reported posts
    Reports,

    /// Registered authors
    Authors {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Totals and per-category/per-month counts
    Stats,
}

fn parse_status(value: &str) -> std::result::Result<PostStatus, String> {
    value.parse().map_err(|e: content::ContentError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,platform_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.api_url, cli.token);
    let ctx = Context::new(&config, cli.json)?;

    match cli.command {
        Commands::Feed {
            category,
            page,
            per_page,
        } => posts::feed(&ctx, category.as_deref(), page, per_page).await,
        Commands::Show { id } => posts::show(&ctx, &id).await,
        Commands::Like { id } => posts::like(&ctx, &id).await,
        Commands::Comment {
            id,
            content,
            as_user,
        } => posts::comment(&ctx, &id, &content, as_user).await,
        Commands::Reply {
            id,
            comment_id,
            content,
            as_user,
        } => posts::reply(&ctx, &id, &comment_id, &content, as_user).await,
        Commands::Report { id, reason } => posts::report(&ctx, &id, &reason).await,
        Commands::Login { email, password } => account::login(&ctx, &email, &password).await,
        Commands::Register {
            username,
            email,
            password,
        } => account::register(&ctx, &username, &email, &password).await,
        Commands::Profile => account::profile(&ctx).await,
        Commands::Publish {
            title,
            category,
            body,
        } => posts::publish(&ctx, &title, &category, body.body, body.file.as_deref()).await,
        Commands::Edit {
            id,
            title,
            category,
            body,
            file,
        } => posts::edit(&ctx, &id, title, category, body, file.as_deref()).await,
        Commands::Delete { id } => posts::delete(&ctx, &id).await,
        Commands::Backoffice(command) => match command {
            BackofficeCommands::Posts { status } => backoffice::posts(&ctx, status).await,
            BackofficeCommands::Approve { id } => {
                backoffice::decide(&ctx, &id, Decision::Approve).await
            }
            BackofficeCommands::Reject { id } => {
                backoffice::decide(&ctx, &id, Decision::Reject).await
            }
            BackofficeCommands::Reports => backoffice::reports(&ctx).await,
            BackofficeCommands::Authors { search, page } => {
                backoffice::authors(&ctx, &search, page).await
            }
            BackofficeCommands::Stats => backoffice::stats(&ctx).await,
        },
        Commands::Snippet { body, words } => {
            tools::snippet(&ctx, body.body, body.file.as_deref(), words)
        }
        Commands::ReadingTime { body } => {
            tools::reading_time(&ctx, body.body, body.file.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_backoffice_status_parsing() {
        let cli = Cli::parse_from(["platform", "backoffice", "posts", "--status", "approved"]);
        assert!(matches!(
            cli.command,
            Commands::Backoffice(BackofficeCommands::Posts {
                status: PostStatus::Approved
            })
        ));

        let invalid = Cli::try_parse_from(["platform", "backoffice", "posts", "--status", "archived"]);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["platform", "feed", "--category", "Tech", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Feed { category: Some(ref c), .. } if c == "Tech"));
    }
}
