//! Catalog service: fixed-size pages of products in insertion order.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::SqlitePool;
use url::Url;

use byte_shop_core::ProductId;

use crate::db::{ProductRepository, RepositoryError};
use crate::models::Product;

/// Number of products per page, for both the store page and `/load_more`.
pub const PAGE_SIZE: u32 = 3;

/// A product as presented to clients.
///
/// Serialized for `/load_more` as `{id, name, price, image}` with `price` as a
/// JSON number and `image` as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

impl CatalogItem {
    fn from_product(product: Product, static_base: &Url) -> Self {
        let image = static_base
            .join(&product.image)
            .map_or_else(|_| product.image.clone(), String::from);

        Self {
            id: product.id,
            name: product.name,
            price: product.price.amount(),
            image,
        }
    }

    /// Price formatted for display (e.g. `$20.00`).
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Read-only catalog listing.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
    static_base: &'a Url,
}

impl<'a> CatalogService<'a> {
    /// Create a catalog service.
    ///
    /// `static_base` is the absolute URL of the static asset mount, ending in
    /// `/` (e.g. `http://127.0.0.1:3000/static/`). Image paths are resolved
    /// against it.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, static_base: &'a Url) -> Self {
        Self {
            products: ProductRepository::new(pool),
            static_base,
        }
    }

    /// The first page of products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the catalog cannot be read.
    pub async fn list_first_page(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        self.list_page(0).await
    }

    /// A page of products starting at `offset`.
    ///
    /// Negative offsets are treated as 0. Offsets past the end of the catalog
    /// yield an empty page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the catalog cannot be read.
    pub async fn list_page(&self, offset: i64) -> Result<Vec<CatalogItem>, RepositoryError> {
        let offset = u32::try_from(offset.max(0)).unwrap_or(u32::MAX);
        let products = self.products.list(offset, PAGE_SIZE).await?;

        Ok(products
            .into_iter()
            .map(|p| CatalogItem::from_product(p, self.static_base))
            .collect())
    }
}
