//! Domain models for the storefront.
//!
//! These types are validated domain objects, separate from the `sqlx` row
//! types in [`crate::db`].

pub mod cart;
pub mod contact;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartLine};
pub use contact::{Contact, ContactError, NewContact};
pub use product::Product;
pub use session::keys as session_keys;
pub use user::User;
