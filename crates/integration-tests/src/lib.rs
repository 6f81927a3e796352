//! Integration tests for Byte Shop.
//!
//! Each test spawns its own storefront on an ephemeral port, backed by a
//! private in-memory database, and drives it over real HTTP with `reqwest`.
//!
//! ```bash
//! cargo test -p byte-shop-integration-tests
//! ```

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;

use reqwest::{Client, redirect};
use sqlx::SqlitePool;
use url::Url;

use byte_shop_storefront::config::StorefrontConfig;
use byte_shop_storefront::db;
use byte_shop_storefront::state::AppState;

/// A storefront running in the background of the current test runtime.
pub struct TestServer {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
}

impl TestServer {
    /// Start a fresh storefront with a seeded in-memory database.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let base_url = Url::parse(&format!("http://{addr}/")).expect("Invalid base URL");
        let pool = db::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        db::initialize(&pool)
            .await
            .expect("Failed to initialize database");

        let state = AppState::new(StorefrontConfig::local(base_url), pool.clone());
        let app = byte_shop_storefront::app(state)
            .await
            .expect("Failed to build application");

        tokio::spawn(async move {
            axum_serve(listener, app).await;
        });

        Self { addr, pool }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A client that keeps cookies and does not follow redirects, so tests
    /// can assert on `303` responses.
    #[must_use]
    pub fn client() -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client")
    }
}

async fn axum_serve(listener: tokio::net::TcpListener, app: axum::Router) {
    if let Err(e) = axum::serve(listener, app).await {
        panic!("test server stopped: {e}");
    }
}
