//! Table definitions and catalog seed data.

use sqlx::SqlitePool;
use tracing::instrument;

use super::RepositoryError;

/// Products inserted when the catalog is empty, in id order.
///
/// Columns: name, price (canonical decimal string), image path relative to
/// the static asset root.
pub const SEED_PRODUCTS: [(&str, &str, &str); 7] = [
    ("Remera Negra", "20.00", "img/remera_negra.png"),
    ("Remera Gris", "20.00", "img/remera_gris.png"),
    ("Buzo Negro", "35.00", "img/buzo_negro.png"),
    ("Buzo Blanco", "35.00", "img/buzo_blanco.png"),
    ("Zapatillas", "50.00", "img/zapatillas.jpg"),
    ("Sandalias Negras", "25.00", "img/chinela.jpg"),
    ("Sandalias Blancas", "25.00", "img/crocs.jpg"),
];

const CREATE_USERS: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )";

const CREATE_CONTACTS: &str = r"
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL
    )";

const CREATE_PRODUCTS: &str = r"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price TEXT NOT NULL,
        image TEXT NOT NULL
    )";

/// Create the `users`, `contacts` and `products` tables if they don't exist.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a statement fails.
#[instrument(skip(pool))]
pub async fn create_tables(pool: &SqlitePool) -> Result<(), RepositoryError> {
    for ddl in [CREATE_USERS, CREATE_CONTACTS, CREATE_PRODUCTS] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Insert [`SEED_PRODUCTS`] if the `products` table is empty.
///
/// The emptiness check and the inserts share one transaction, so the seed
/// batch commits all-or-nothing.
///
/// # Returns
///
/// The number of rows inserted (0 when the catalog already had products).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a statement fails.
#[instrument(skip(pool))]
pub async fn seed_products(pool: &SqlitePool) -> Result<u64, RepositoryError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, price, image) in SEED_PRODUCTS {
        inserted += sqlx::query("INSERT INTO products (name, price, image) VALUES (?, ?, ?)")
            .bind(name)
            .bind(price)
            .bind(image)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use byte_shop_core::Price;

    use super::*;
    use crate::db::connect_in_memory;

    #[test]
    fn test_seed_prices_are_valid() {
        for (name, price, _) in SEED_PRODUCTS {
            assert!(Price::parse(price).is_ok(), "bad seed price for {name}");
        }
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let pool = connect_in_memory().await.unwrap();
        create_tables(&pool).await.unwrap();

        assert_eq!(seed_products(&pool).await.unwrap(), 7);
        assert_eq!(seed_products(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_catalog_has_rows() {
        let pool = connect_in_memory().await.unwrap();
        create_tables(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO products (name, price, image) VALUES ('Gorra', '10.00', 'img/gorra.png')",
        )
        .execute(&pool)
        .await
        .unwrap();

        assert_eq!(seed_products(&pool).await.unwrap(), 0);
    }
}
