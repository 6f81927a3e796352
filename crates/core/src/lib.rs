//! Byte Shop Core - Shared domain types.
//!
//! Common types used across the Byte Shop components:
//! - `storefront` - Public-facing shop (catalog, cart, accounts)
//! - `cli` - Command-line tools for schema and seed management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP. The optional `sqlite` feature adds `sqlx` encoding for the
//! id newtypes so they can be bound directly as query parameters.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices and usernames

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
