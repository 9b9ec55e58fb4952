//! CLI administration tool for linkslug.
//!
//! Talks to the mapping store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check the store connection
//! cargo run --bin admin -- db check
//!
//! # Count stored mappings
//! cargo run --bin admin -- stats
//!
//! # Show where a slug points
//! cargo run --bin admin -- lookup aB1cD2eF
//!
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com -y
//! ```
//!
//! Uses the same configuration and credential file as the server.

use linkslug::application::services::MappingService;
use linkslug::config::{self, Config};
use linkslug::error::AppError;
use linkslug::server::{build_mapping_service, connect_pool};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing linkslug.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Show the long URL behind a slug
    Lookup {
        /// Slug to resolve
        slug: String,
    },

    /// Create a short URL
    Shorten {
        /// Long URL (prompted for when omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_pool(&config).await?;
    let service = build_mapping_service(&config, pool.clone());

    let result = match cli.command {
        Commands::Db { action } => handle_db_action(action, &config, &service).await,
        Commands::Stats => handle_stats(&service).await,
        Commands::Lookup { slug } => lookup(&service, &slug).await,
        Commands::Shorten { url, yes } => shorten(&service, url, yes).await,
    };

    pool.close().await;
    result
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    config: &Config,
    service: &MappingService,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database Check".bright_blue().bold());
            println!();
            println!(
                "  Credentials: {}",
                config.credentials_path.display().to_string().cyan()
            );

            service
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database unreachable: {}", e))?;

            println!("  Status:      {}", "CONNECTED".green().bold());
            println!();
        }
    }

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(service: &MappingService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints the mapping for a slug.
async fn lookup(service: &MappingService, slug: &str) -> Result<()> {
    match service.resolve(slug).await {
        Ok(mapping) => {
            println!("  Slug:      {}", mapping.slug.cyan());
            println!(
                "  Short URL: {}",
                service.short_url(&mapping.slug).bright_yellow()
            );
            println!("  Long URL:  {}", mapping.long_url);
            println!(
                "  Created:   {}",
                mapping
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .bright_black()
            );
            Ok(())
        }
        Err(AppError::NotFound(_)) => {
            println!("{}", format!("❌ No mapping for '{}'", slug).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }
}

/// Shortens a URL with an optional interactive prompt.
async fn shorten(service: &MappingService, url: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("Long URL").interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Shorten {}?", long_url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let shortened = service
        .shorten(&long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten: {}", e))?;

    println!();
    println!("{}", "✅ Short URL created".green().bold());
    println!("  {}", shortened.short_url.bright_yellow().bold());
    println!();

    Ok(())
}
