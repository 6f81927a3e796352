//! User domain types.

use byte_shop_core::{UserId, Username};

/// A registered shop account (domain type).
///
/// The password hash is deliberately absent; it only leaves the database
/// through [`crate::db::UserRepository::get_with_password_hash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique login name.
    pub username: Username,
}
