//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username is empty.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] byte_shop_core::UsernameError),

    /// Registration with a username that already exists.
    #[error("user already exists")]
    DuplicateUser,

    /// Invalid credentials (unknown username or wrong password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
