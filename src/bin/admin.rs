//! CLI administration tool for the wardrobe service.
//!
//! Talks to MySQL directly through the same [`Storage`] implementation the
//! server uses, so no HTTP access is needed.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Load the sample catalog
//! cargo run --bin admin -- seed
//!
//! # List articles in two categories
//! cargo run --bin admin -- articles -c Casual -c Formal
//!
//! # Inspect or create users
//! cargo run --bin admin -- user show ada
//! cargo run --bin admin -- user create -u ada
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): MySQL connection string

use wardrobe::application::services::password::hash_password;
use wardrobe::config::DatabaseSettings;
use wardrobe::domain::entities::NewUser;
use wardrobe::domain::repositories::Storage;
use wardrobe::infrastructure::persistence::{MySqlStorage, sample_catalog};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::MySqlPool;
use std::sync::Arc;

/// CLI tool for managing the wardrobe database.
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

    /// Insert the sample catalog (articles, outfits, placements)
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List articles
    Articles {
        /// Restrict to a category (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show server version
    Info,

    /// Apply pending migrations
    Migrate,
}

#[derive(Subcommand)]
enum UserAction {
    /// Show a user by username
    Show { username: String },

    /// Create a user with an interactively entered password
    Create {
        #[arg(short, long)]
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let settings = DatabaseSettings::parse(&database_url)?;

    let pool = MySqlPool::connect_with(settings.connect_options())
        .await
        .with_context(|| format!("Failed to connect to {settings}"))?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Seed { yes } => seed(&storage(&pool), yes).await?,
        Commands::Articles { categories } => list_articles(&storage(&pool), &categories).await?,
        Commands::User { action } => handle_user_action(action, &storage(&pool)).await?,
    }

    Ok(())
}

fn storage(pool: &MySqlPool) -> MySqlStorage {
    MySqlStorage::new(Arc::new(pool.clone()))
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &MySqlPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT VERSION()")
                .fetch_one(pool)
                .await?;

            println!("  MySQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Inserts the sample catalog with its fixed ids.
///
/// Rows whose id already exists are left untouched, so seeding twice is
/// harmless.
async fn seed(storage: &MySqlStorage, skip_confirm: bool) -> Result<()> {
    let catalog = sample_catalog();

    println!("{}", "🌱 Seed sample catalog".bright_blue().bold());
    println!();
    println!("  Articles:   {}", catalog.articles.len().to_string().cyan());
    println!("  Outfits:    {}", catalog.outfits.len().to_string().cyan());
    println!(
        "  Placements: {}",
        catalog.outfit_articles.len().to_string().cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert these rows?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let inserted = storage
        .seed_catalog(&catalog)
        .await
        .context("Failed to seed catalog")?;

    println!(
        "{} {} new rows",
        "✅ Seeded".green().bold(),
        inserted.to_string().bright_white().bold()
    );

    Ok(())
}

/// Prints articles as a table.
///
/// # Output Format
///
/// ```text
///   ID  Brand          Name                       Category      Price
///   1   Levi's         501 Original Jeans         Casual        69.50
/// ```
async fn list_articles(storage: &MySqlStorage, categories: &[String]) -> Result<()> {
    let articles = storage
        .get_articles(categories)
        .await
        .context("Failed to list articles")?;

    if articles.is_empty() {
        println!("{}", "  No articles found".yellow());
        println!();
        println!(
            "  Load the sample catalog with: {} admin seed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<14} {:<26} {:<13} {:>9}",
        "ID".bright_white().bold(),
        "Brand".bright_white().bold(),
        "Name".bright_white().bold(),
        "Category".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for article in &articles {
        println!(
            "  {:<4} {:<14} {:<26} {:<13} {:>9}",
            article.id.to_string().bright_black(),
            article.brand.cyan(),
            article.name,
            article.category,
            format_price(article.price).bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        articles.len().to_string().bright_white().bold()
    );

    Ok(())
}

async fn handle_user_action(action: UserAction, storage: &MySqlStorage) -> Result<()> {
    match action {
        UserAction::Show { username } => {
            let user = storage
                .get_user_by_username(&username)
                .await?
                .with_context(|| format!("User '{username}' not found"))?;

            println!("  ID:          {}", user.id.to_string().bright_black());
            println!("  Username:    {}", user.username.cyan());
            let preferences = user
                .preferences
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  Preferences: {preferences}");
        }
        UserAction::Create { username } => create_user(storage, username).await?,
    }

    Ok(())
}

/// Creates a user after prompting for the missing fields.
async fn create_user(storage: &MySqlStorage, username: Option<String>) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .validate_with(|p: &String| -> Result<(), &str> {
            if p.chars().count() >= 8 {
                Ok(())
            } else {
                Err("Password must be at least 8 characters")
            }
        })
        .interact()?;

    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("Hashing failed: {e}"))?;

    let result = storage
        .create_user(NewUser {
            username: username.clone(),
            password: hash,
            preferences: None,
        })
        .await;

    match result {
        Ok(user) => {
            println!();
            println!(
                "{} {} (id {})",
                "✅ Created".green().bold(),
                user.username.cyan(),
                user.id
            );
        }
        Err(e) if e.is_conflict() => {
            println!(
                "{}",
                format!("⚠️  Username '{username}' is already taken").yellow()
            );
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to create user")),
    }

    Ok(())
}

/// Formats a price in minor units as `major.minor`.
fn format_price(minor_units: u32) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}
