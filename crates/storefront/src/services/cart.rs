//! Session cart operations.
//!
//! The cart lives entirely in session state under [`session_keys::CART`] as an
//! ordered list of [`CartLine`] snapshots. Nothing here writes to the shop
//! tables.

use sqlx::SqlitePool;
use thiserror::Error;
use tower_sessions::Session;
use tracing::instrument;

use byte_shop_core::{ProductId, UserId};

use crate::db::{ProductRepository, RepositoryError};
use crate::models::{Cart, CartLine, session_keys};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The session store failed to load or save state.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Product lookup failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Cart service bound to the product catalog.
pub struct CartService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CartService<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// Append a snapshot of the product to the session cart.
    ///
    /// Unknown product ids leave the cart untouched and are not an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the product lookup or the session write fails.
    #[instrument(skip(self, session))]
    pub async fn add_item(
        &self,
        session: &Session,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let Some(product) = self.products.get_by_id(product_id).await? else {
            tracing::debug!(%product_id, "Ignoring add for unknown product");
            return Ok(());
        };

        let mut lines = load_lines(session).await?;
        lines.push(CartLine::from(&product));
        session.insert(session_keys::CART, lines).await?;
        Ok(())
    }
}

/// Remove every line for `product_id` from the session cart.
///
/// No-op when there is no cart or the product is not in it.
///
/// # Errors
///
/// Returns `CartError::Session` if the session store fails.
#[instrument(skip(session))]
pub async fn remove_item(session: &Session, product_id: ProductId) -> Result<(), CartError> {
    let Some(mut lines) = session.get::<Vec<CartLine>>(session_keys::CART).await? else {
        return Ok(());
    };

    let before = lines.len();
    lines.retain(|line| line.id != product_id);
    if lines.len() != before {
        session.insert(session_keys::CART, lines).await?;
    }
    Ok(())
}

/// Current cart contents and total.
///
/// # Errors
///
/// Returns `CartError::Session` if the session store fails.
pub async fn view_cart(session: &Session) -> Result<Cart, CartError> {
    Ok(Cart::new(load_lines(session).await?))
}

/// Drop the logged-in user and the cart from the session.
///
/// # Errors
///
/// Returns `CartError::Session` if the session store fails.
#[instrument(skip(session))]
pub async fn clear(session: &Session) -> Result<(), CartError> {
    session.remove::<UserId>(session_keys::USER_ID).await?;
    session.remove::<Vec<CartLine>>(session_keys::CART).await?;
    Ok(())
}

async fn load_lines(session: &Session) -> Result<Vec<CartLine>, CartError> {
    Ok(session
        .get::<Vec<CartLine>>(session_keys::CART)
        .await?
        .unwrap_or_default())
}
