//! Database operations for the storefront SQLite store.
//!
//! # Tables
//!
//! - `users` - Site accounts (username + Argon2 password hash)
//! - `contacts` - Contact form submissions (append-only)
//! - `products` - Catalog, seeded once when empty
//! - `tower_sessions` - Session records, owned by the session store
//!
//! The three shop tables are independent: no foreign keys between them.
//!
//! # Initialization
//!
//! [`initialize`] is idempotent and runs on every server start. It can also be
//! run ahead of time with:
//! ```bash
//! cargo run -p byte-shop-cli -- init
//! ```

pub mod contacts;
pub mod products;
pub mod schema;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use contacts::ContactRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map an insert error, turning unique violations into `Conflict`.
    pub(crate) fn from_insert(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict.to_owned());
        }
        Self::Database(err)
    }
}

/// Create a SQLite connection pool, creating the database file if missing.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://byte_shop.db`
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the database cannot be opened.
pub async fn create_pool(database_url: &SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Limited to a single connection that is never recycled, because each
/// SQLite in-memory connection is its own database.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be opened.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Ensure the shop tables exist and the catalog is seeded.
///
/// Safe to call on every start: tables use `IF NOT EXISTS` and seeding only
/// happens when `products` is empty.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn initialize(pool: &SqlitePool) -> Result<(), RepositoryError> {
    schema::create_tables(pool).await?;
    let seeded = schema::seed_products(pool).await?;
    if seeded > 0 {
        tracing::info!(products = seeded, "Seeded product catalog");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();

        initialize(&pool).await.unwrap();
        initialize(&pool).await.unwrap();

        let count = ProductRepository::new(&pool).count().await.unwrap();
        assert_eq!(count, 7);
    }

    #[tokio::test]
    async fn test_initialize_creates_all_tables() {
        let pool = connect_in_memory().await.unwrap();
        initialize(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name IN ('users', 'contacts', 'products') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["contacts", "products", "users"]);
    }
}
