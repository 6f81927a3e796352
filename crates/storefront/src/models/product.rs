//! Catalog product type.

use byte_shop_core::{Price, ProductId};

/// A catalog product (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique product ID, assigned in insertion order.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image path relative to the static asset root (e.g. `img/buzo_negro.png`).
    pub image: String,
}
