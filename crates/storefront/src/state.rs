//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;
use url::Url;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything inside is immutable
/// after start-up; the pool is the only shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: SqlitePool,
    static_base: Url,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `pool` - SQLite connection pool, already initialized
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: SqlitePool) -> Self {
        let static_base = config.static_base_url();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                static_base,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Absolute URL of the static asset mount, ending in `/`.
    #[must_use]
    pub fn static_base(&self) -> &Url {
        &self.inner.static_base
    }
}
