//! Session cart types.

use serde::{Deserialize, Serialize};

use byte_shop_core::{Price, ProductId};

use super::Product;

/// One cart entry: a copy of a product's id, name and price taken when it
/// was added.
///
/// Lines never refer back to the catalog row, so later catalog changes do
/// not alter an existing cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// The cart as shown to the user: its lines plus their summed price.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub total: Price,
}

impl Cart {
    /// Build a cart view, computing the total from the lines.
    #[must_use]
    pub fn new(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(|line| line.price).sum();
        Self { lines, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: i64, price: &str) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            name: format!("producto {id}"),
            price: Price::parse(price).unwrap(),
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new(Vec::new());
        assert!(cart.is_empty());
        assert_eq!(cart.total, Price::ZERO);
    }

    #[test]
    fn test_total_counts_duplicate_lines() {
        let cart = Cart::new(vec![line(1, "20.00"), line(1, "20.00"), line(5, "50.00")]);
        assert_eq!(cart.total, Price::parse("90.00").unwrap());
    }

    #[test]
    fn test_line_snapshot_copies_product_fields() {
        let product = Product {
            id: ProductId::new(3),
            name: "Buzo Negro".to_string(),
            price: Price::parse("35.00").unwrap(),
            image: "img/buzo_negro.png".to_string(),
        };
        let snapshot = CartLine::from(&product);
        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.name, "Buzo Negro");
        assert_eq!(snapshot.price, product.price);
    }
}
