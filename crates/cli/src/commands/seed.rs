//! Catalog seeding command.

use sqlx::SqlitePool;

use byte_shop_storefront::db::schema;

use super::CommandError;

/// Insert the seed catalog when the products table is empty.
///
/// Expects the tables to exist (run `migrate` first, or use `init`).
///
/// # Errors
///
/// Returns `CommandError` if the insert fails.
pub async fn run(pool: &SqlitePool) -> Result<(), CommandError> {
    let inserted = schema::seed_products(pool).await?;

    if inserted == 0 {
        tracing::info!("Catalog already has products, nothing to seed");
    } else {
        tracing::info!(products = inserted, "Seeded product catalog");
    }
    Ok(())
}
