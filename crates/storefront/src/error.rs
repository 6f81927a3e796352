//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Server-side failures are
//! captured to Sentry before responding; clients only ever see a short
//! plain-text message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ContactError;
use crate::services::{AuthError, CartError};

/// Plain-text body for a registration with a taken username.
pub const DUPLICATE_USER_MESSAGE: &str = "Usuario ya existe";

/// Plain-text body for a failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales incorrectas";

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Registration or login failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart or session operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Session store failed outside of a cart operation.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::DuplicateUser) => StatusCode::CONFLICT,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::InvalidUsername(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash)
            | Self::Database(_)
            | Self::Cart(_)
            | Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Auth(AuthError::DuplicateUser) => DUPLICATE_USER_MESSAGE.to_string(),
            Self::Auth(AuthError::InvalidCredentials) => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::Auth(AuthError::InvalidUsername(_)) => "username is required".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful login to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_text(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_identity_errors_use_plain_text() {
        assert_eq!(
            body_text(AuthError::DuplicateUser.into()).await,
            (StatusCode::CONFLICT, "Usuario ya existe".to_string())
        );
        assert_eq!(
            body_text(AuthError::InvalidCredentials.into()).await,
            (
                StatusCode::UNAUTHORIZED,
                "Credenciales incorrectas".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_internal_details_hidden() {
        let err = AppError::Database(RepositoryError::DataCorruption(
            "invalid price for product 4".to_string(),
        ));
        let (status, body) = body_text(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");
    }

    #[tokio::test]
    async fn test_contact_error_is_bad_request() {
        let (status, body) = body_text(ContactError("email").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "email is required");
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }
}
