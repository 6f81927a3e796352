//! CLI subcommands and shared connection handling.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::SqlitePool;
use thiserror::Error;

use byte_shop_storefront::config::DEFAULT_DATABASE_URL;
use byte_shop_storefront::db;

/// Errors from CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Repository(#[from] db::RepositoryError),
}

/// Resolve the database URL from the flag or the environment, falling back to
/// the same default file as the server.
#[must_use]
pub fn database_url(flag: Option<String>) -> SecretString {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    resolve_database_url(flag, |key| std::env::var(key).ok())
}

/// Pick the first non-empty of the flag, `STOREFRONT_DATABASE_URL` and
/// `DATABASE_URL`, or the default file.
fn resolve_database_url(
    flag: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> SecretString {
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

    non_empty(flag)
        .or_else(|| non_empty(lookup("STOREFRONT_DATABASE_URL")))
        .or_else(|| non_empty(lookup("DATABASE_URL")))
        .map_or_else(|| SecretString::from(DEFAULT_DATABASE_URL), SecretString::from)
}

/// Open the storefront database, creating the file if needed.
///
/// # Errors
///
/// Returns `CommandError::Database` if the database cannot be opened.
pub async fn connect(database_url: &SecretString) -> Result<SqlitePool, CommandError> {
    tracing::info!("Connecting to storefront database...");
    Ok(db::create_pool(database_url).await?)
}
