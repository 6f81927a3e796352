//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use sqlx::SqlitePool;
use tower_sessions::{MemoryStore, Session};

use crate::db;

/// In-memory database with tables created and the catalog seeded.
pub async fn test_pool() -> SqlitePool {
    let pool = db::connect_in_memory().await.unwrap();
    db::initialize(&pool).await.unwrap();
    pool
}

/// A fresh session backed by an in-memory store.
pub fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}
