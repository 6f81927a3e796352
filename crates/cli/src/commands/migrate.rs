//! Schema setup command.
//!
//! There are no versioned migrations: every statement is `CREATE TABLE IF
//! NOT EXISTS`, so running this repeatedly is harmless.

use sqlx::SqlitePool;

use byte_shop_storefront::db::schema;
use byte_shop_storefront::middleware::create_session_store;

use super::CommandError;

/// Create the `users`, `contacts`, `products` and `tower_sessions` tables.
///
/// # Errors
///
/// Returns `CommandError` if any statement fails.
pub async fn run(pool: &SqlitePool) -> Result<(), CommandError> {
    tracing::info!("Creating shop tables...");
    schema::create_tables(pool).await?;

    tracing::info!("Creating session table...");
    create_session_store(pool).await?;

    tracing::info!("Schema is up to date");
    Ok(())
}
