//! CLI administration tool for shorturl.
//!
//! Registers and resolves URLs, shows statistics, and performs database
//! checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a URL
//! cargo run --bin admin -- register https://www.freecodecamp.org
//!
//! # Resolve a short code
//! cargo run --bin admin -- lookup 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use shorturl::application::services::{RedirectService, RegistrationService};
use shorturl::config::{Config, StorageBackend};
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Register a URL and print its short code
    Register {
        /// Absolute http(s) URL to register
        url: String,
    },

    /// Print the URL stored under a short code
    Lookup {
        /// Short code to resolve
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool only works with the postgres storage backend");
    }

    let pool = connect_pool(&config)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Register { url } => register_url(&pool, &url).await?,
        Commands::Lookup { code } => lookup_code(&pool, &code).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn repository(pool: &PgPool) -> Arc<PgUrlRepository> {
    Arc::new(PgUrlRepository::new(Arc::new(pool.clone())))
}

/// Registers a URL through the same service the HTTP API uses.
async fn register_url(pool: &PgPool, url: &str) -> Result<()> {
    let service = RegistrationService::new(repository(pool));

    match service.register(url).await {
        Ok(record) => {
            println!("{}", "✅ URL registered".green().bold());
            println!();
            println!("  Short URL: {}", record.short_url.to_string().bright_yellow().bold());
            println!("  Original:  {}", record.original_url.cyan());
            println!(
                "  Created:   {}",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            println!();
            Ok(())
        }
        Err(AppError::Validation { message }) => {
            println!("{} {}", "❌".red(), message.red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to register URL: {}", e)),
    }
}

/// Resolves a short code through the redirect service.
async fn lookup_code(pool: &PgPool, code: &str) -> Result<()> {
    let service = RedirectService::new(repository(pool));

    match service.resolve(code).await {
        Ok(original_url) => {
            println!("  {} → {}", code.bright_yellow().bold(), original_url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { message }) => {
            println!("{} {}", "⚠️ ".yellow(), message.yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve short url: {}", e)),
    }
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of records
/// - Highest assigned short code
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let highest: Option<i64> = sqlx::query_scalar("SELECT MAX(short_url) FROM urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Records:            {}",
        records.to_string().bright_green().bold()
    );
    println!(
        "  Highest short url:  {}",
        highest
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_green()
            .bold()
    );

    if highest.is_some_and(|h| h != records) {
        println!();
        println!(
            "{}",
            "⚠️  Short urls are not contiguous; new registrations will fail"
                .yellow()
        );
    }

    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
