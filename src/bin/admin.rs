//! CLI administration tool for hotel-listing.
//!
//! Manages users and API tokens, shows statistics, and checks the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin user
//! cargo run --bin admin -- user create --name alice --role admin
//!
//! # Issue a token for user 1
//! cargo run --bin admin -- token create --user 1
//!
//! # List / revoke tokens
//! cargo run --bin admin -- token list
//! cargo run --bin admin -- token revoke "alice laptop"
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
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `TOKEN_SIGNING_SECRET`: required for `token create`; must match the server

use hotel_listing::application::services::auth_service::hash_token;
use hotel_listing::config::Config;
use hotel_listing::domain::entities::{NewUser, Role};
use hotel_listing::domain::repositories::{TokenRepository, UserRepository};
use hotel_listing::infrastructure::persistence::{PgTokenRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing hotel-listing.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for Role {
    fn from(r: RoleArg) -> Self {
        match r {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Unique user name
        #[arg(short, long)]
        name: Option<String>,

        /// Role of the new user
        #[arg(short, long, value_enum, default_value_t = RoleArg::User)]
        role: RoleArg,
    },

    /// List all users
    List,
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token for a user
    Create {
        /// ID of the user the token identifies
        #[arg(short, long)]
        user: i64,

        /// Token name (e.g., "alice laptop")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
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

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create { name, role } => create_user(&repo, name, role.into()).await?,
        UserAction::List => list_users(&repo).await?,
    }

    Ok(())
}

async fn create_user(repo: &PgUserRepository, name: Option<String>, role: Role) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("User name").interact_text()?,
    };

    let user = repo
        .create(NewUser { name, role })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!("{}", "✅ User created".green().bold());
    println!("  ID:   {}", user.id.to_string().bright_white().bold());
    println!("  Name: {}", user.name.cyan());
    println!("  Role: {}", user.role.to_string().yellow());
    println!();

    if user.is_admin() {
        println!(
            "  Issue a token with: {} admin -- token create --user {}",
            "cargo run --bin".bright_cyan(),
            user.id
        );
        println!();
    }

    Ok(())
}

async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<8} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Role".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for user in &users {
        let role = if user.is_admin() {
            user.role.to_string().yellow()
        } else {
            user.role.to_string().normal()
        };

        println!(
            "  {:<5} {:<30} {:<8} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            role,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let tokens = PgTokenRepository::new(pool.clone());

    match action {
        TokenAction::Create {
            user,
            name,
            token,
            yes,
        } => {
            let users = PgUserRepository::new(pool);
            create_token(&tokens, &users, user, name, token, yes).await?;
        }
        TokenAction::List => list_tokens(&tokens).await?,
        TokenAction::Revoke { name_or_id } => revoke_token(&tokens, name_or_id).await?,
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Verify the target user exists
/// 2. Prompt for token name (or use provided)
/// 3. Generate random token or use provided value
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Store the HMAC-SHA256 hash keyed by `TOKEN_SIGNING_SECRET`
///
/// The raw token is displayed once and cannot be retrieved later.
async fn create_token(
    tokens: &PgTokenRepository,
    users: &PgUserRepository,
    user_id: i64,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
        .context("TOKEN_SIGNING_SECRET must be set to issue tokens")?;
    if signing_secret.is_empty() {
        anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
    }

    let user = users
        .find_by_id(user_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text(format!("{} token", user.name))
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            let generated = generate_token();
            println!("{}", "✨ Generated new token".green());
            generated
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!(
        "  User:  {} ({}, {})",
        user.name.cyan(),
        user.id,
        user.role.to_string().yellow()
    );
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !user.is_admin() {
        println!(
            "{}",
            "ℹ️  This user is not an admin: the token will be refused on write endpoints."
                .bright_black()
        );
        println!();
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&signing_secret, &token_value);

    tokens
        .create_token(&token_name, user.id, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X DELETE -H \"Authorization: Bearer {}\" -H \"hotelid: 1\" http://localhost:3000/delete-hotel",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
async fn list_tokens(tokens: &PgTokenRepository) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let all = tokens
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if all.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin -- token create --user <ID>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<28} {:<6} {:<18} {:<18} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "User".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(88).bright_black());

    for token in &all {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<28} {:<6} {:<18} {:<18} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.user_id,
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", all.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is looked up as an ID, anything else as an exact name.
async fn revoke_token(tokens: &PgTokenRepository, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => tokens
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => tokens
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    tokens
        .revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays hotel, user and active token counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let hotels_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let admins_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'admin'")
        .fetch_one(pool)
        .await?;

    let tokens_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Hotels:        {}",
        hotels_count.to_string().bright_green().bold()
    );
    println!(
        "  Users:         {} ({} admin)",
        users_count.to_string().bright_green().bold(),
        admins_count
    );
    println!(
        "  Active tokens: {}",
        tokens_count.to_string().bright_green().bold()
    );
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

/// Generates a cryptographically random token.
///
/// 48 characters from A-Z, a-z, 0-9 (~286 bits of entropy).
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
