//! Core types for Byte Shop.
//!
//! Type-safe wrappers for the shop's domain concepts.

pub mod id;
pub mod price;
pub mod username;

pub use id::*;
pub use price::{Price, PriceError};
pub use username::{Username, UsernameError};
