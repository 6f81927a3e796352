//! Byte Shop CLI - database setup tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the shop and session tables
//! bs-cli migrate
//!
//! # Seed the product catalog (no-op when products exist)
//! bs-cli seed
//!
//! # Both of the above
//! bs-cli init
//! ```
//!
//! The database is taken from `--database-url`, then
//! `STOREFRONT_DATABASE_URL`, then `DATABASE_URL` (a `.env` file is read if
//! present), defaulting to `sqlite://byte_shop.db`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bs-cli")]
#[command(author, version, about = "Byte Shop CLI tools")]
struct Cli {
    /// SQLite database URL (overrides the environment)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the shop tables and the session table
    Migrate,
    /// Insert the seed catalog if the products table is empty
    Seed,
    /// Run `migrate` then `seed`
    Init,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let database_url = commands::database_url(cli.database_url);
    let pool = commands::connect(&database_url).await?;

    match cli.command {
        Commands::Migrate => commands::migrate::run(&pool).await?,
        Commands::Seed => commands::seed::run(&pool).await?,
        Commands::Init => {
            commands::migrate::run(&pool).await?;
            commands::seed::run(&pool).await?;
        }
    }

    pool.close().await;
    Ok(())
}
