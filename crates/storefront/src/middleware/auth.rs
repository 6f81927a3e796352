//! Session-based user extractor.
//!
//! No route requires a login; pages only use the logged-in state to pick
//! between the login and logout links.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use byte_shop_core::UserId;

use crate::models::session_keys;

/// Extractor that optionally gets the logged-in user's id.
///
/// Never rejects: a missing session layer, an unreadable session or an
/// anonymous visitor all yield `None`.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalUser(user_id): OptionalUser) -> impl IntoResponse {
///     match user_id {
///         Some(id) => format!("Hola, usuario {id}"),
///         None => "Hola".to_string(),
///     }
/// }
/// ```
pub struct OptionalUser(pub Option<UserId>);

impl OptionalUser {
    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<UserId>(session_keys::USER_ID)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(user_id))
    }
}
