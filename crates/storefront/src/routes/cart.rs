//! Cart route handlers.
//!
//! Adding and removing are plain GET links that redirect back to `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;

use byte_shop_core::ProductId;

use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::Cart;
use crate::services::{CartService, cart};
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub logged_in: bool,
    pub cart: Cart,
}

/// Display the cart and its total.
#[instrument(skip(session, user))]
pub async fn show(session: Session, user: OptionalUser) -> Result<CartTemplate> {
    let cart = cart::view_cart(&session).await?;

    Ok(CartTemplate {
        logged_in: user.is_logged_in(),
        cart,
    })
}

/// Add one unit of a product. Unknown ids are ignored.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    CartService::new(state.pool())
        .add_item(&session, ProductId::new(id))
        .await?;

    Ok(Redirect::to("/cart"))
}

/// Remove every unit of a product.
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<i64>) -> Result<Redirect> {
    cart::remove_item(&session, ProductId::new(id)).await?;

    Ok(Redirect::to("/cart"))
}
