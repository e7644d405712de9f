//! CLI administration tool for quicklink.
//!
//! Works directly against the database, without the HTTP server running.
//!
//! # Usage
//!
//! ```bash
//! # Show the most recent links
//! cargo run --bin admin -- links recent --limit 20
//!
//! # Inspect one link (does not count a click)
//! cargo run --bin admin -- links show abc123
//!
//! # Create a link, optionally with a custom code
//! cargo run --bin admin -- links create https://example.com --code promo
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`quicklink::config`]. `DATABASE_URL` and
//! `BASE_URL` are the ones that matter here.

use quicklink::application::services::LinkService;
use quicklink::config::{self, Config};
use quicklink::domain::entities::Link;
use quicklink::infrastructure::persistence::{SqliteLinkRepository, pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing quicklink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and create short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List the most recently created links
    Recent {
        /// Number of links to show
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Show one link without counting a click
    Show {
        /// Short code
        code: String,
    },

    /// Create a short link
    Create {
        /// Long URL (http:// or https://)
        url: String,

        /// Custom short code (3-20 letters, digits, '_' or '-')
        #[arg(short, long)]
        code: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = pool::connect(
        &config.database_url,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .context("Failed to connect to database")?;

    pool::migrate(&pool)
        .await
        .context("Failed to migrate")?;

    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let service = LinkService::new(repo, config.allocation_policy());

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service, &config).await?,
        Commands::Db { action } => handle_db_action(action, &service, &config).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, service: &Service, config: &Config) -> Result<()> {
    match action {
        LinkAction::Recent { limit } => list_recent(service, config, limit).await,
        LinkAction::Show { code } => show_link(service, config, &code).await,
        LinkAction::Create { url, code } => create_link(service, config, &url, code).await,
    }
}

/// Lists recent links.
///
/// # Output Format
///
/// ```text
/// 🔗 Recent links
///
///   Code                 Clicks   Created            Destination
///   ────────────────────────────────────────────────────────────────
///   abc123               3        2024-01-15 10:30   https://example.com
/// ```
async fn list_recent(service: &Service, config: &Config, limit: u32) -> Result<()> {
    println!("{}", "🔗 Recent links".bright_blue().bold());
    println!();

    let links = service
        .recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<20} {:<8} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!(
        "  Showing {} link(s), base URL {}",
        links.len().to_string().bright_white().bold(),
        config.base_url.bright_black()
    );
    println!();

    Ok(())
}

/// Prints one link.
async fn show_link(service: &Service, config: &Config, code: &str) -> Result<()> {
    let link = service
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_link(&link, config);
    Ok(())
}

/// Creates a link through the same path as the HTTP submission.
async fn create_link(
    service: &Service,
    config: &Config,
    url: &str,
    code: Option<String>,
) -> Result<()> {
    let link = service
        .shorten(url, code.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    print_link(&link, config);
    Ok(())
}

fn print_link(link: &Link, config: &Config) {
    let short_url = Service::short_url(&config.base_url, &link.code);

    println!();
    println!("  Code:      {}", link.code.cyan());
    println!("  Short URL: {}", short_url.bright_yellow());
    println!("  Long URL:  {}", link.long_url);
    println!(
        "  Created:   {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Clicks:    {}", link.clicks.to_string().bright_green());
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let count = service
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Database: {}", config.database_url.bright_white());
            println!("  Links:    {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
