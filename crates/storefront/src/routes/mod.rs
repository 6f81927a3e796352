//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//!
//! # Contact
//! GET  /contact                - Contact form
//! POST /contact                - Store message, redirect to /
//!
//! # Catalog
//! GET  /store                  - First page of products
//! GET  /load_more?offset=N     - Next page as JSON
//!
//! # Auth
//! GET  /register               - Register form
//! POST /register               - Create account, redirect to /login
//! GET  /login                  - Login form
//! POST /login                  - Start session, redirect to /store
//! GET  /logout                 - Clear session, redirect to /
//!
//! # Cart (session only)
//! GET  /cart                   - Cart page
//! GET  /add_to_cart/{id}       - Add product, redirect to /cart
//! GET  /remove_from_cart/{id}  - Remove product, redirect to /cart
//! ```
//!
//! Static assets are mounted separately under `/static`.

pub mod auth;
pub mod cart;
pub mod contact;
pub mod health;
pub mod home;
pub mod store;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/contact", get(contact::contact_page).post(contact::submit))
        // Catalog
        .route("/store", get(store::store_page))
        .route("/load_more", get(store::load_more))
        // Auth
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        // Cart
        .route("/cart", get(cart::show))
        .route("/add_to_cart/{id}", get(cart::add))
        .route("/remove_from_cart/{id}", get(cart::remove))
}

/// Treat an empty or whitespace-only form value as missing.
fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
