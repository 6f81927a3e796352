//! Registration, login and logout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::present;
use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::session_keys;
use crate::services::{AuthService, cart};
use crate::state::AppState;

/// Username and password, shared by the register and login forms.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

impl CredentialsForm {
    fn fields(&self) -> Result<(&str, &str)> {
        match (present(&self.username), present(&self.password)) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(AppError::BadRequest(
                "username and password are required".to_string(),
            )),
        }
    }
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub logged_in: bool,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub logged_in: bool,
}

/// Display the registration form.
pub async fn register_page(user: OptionalUser) -> impl IntoResponse {
    RegisterTemplate {
        logged_in: user.is_logged_in(),
    }
}

/// Create an account and send the visitor to the login form.
///
/// A taken username answers `409 Usuario ya existe`.
#[instrument(skip(state, form), fields(username = %form.username))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect> {
    let (username, password) = form.fields()?;
    AuthService::new(state.pool())
        .register(username, password)
        .await?;

    Ok(Redirect::to("/login"))
}

/// Display the login form.
pub async fn login_page(user: OptionalUser) -> impl IntoResponse {
    LoginTemplate {
        logged_in: user.is_logged_in(),
    }
}

/// Check credentials and mark the session as logged in.
///
/// Wrong credentials answer `401 Credenciales incorrectas`.
#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect> {
    let (username, password) = form.fields()?;
    let user_id = AuthService::new(state.pool())
        .login(username, password)
        .await?;

    // New id on privilege change; the cart carries over.
    session.cycle_id().await?;
    session.insert(session_keys::USER_ID, user_id).await?;
    set_sentry_user(&user_id);

    tracing::info!(%user_id, "User logged in");
    Ok(Redirect::to("/store"))
}

/// Drop the login and the cart, then go to the landing page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    cart::clear(&session).await?;
    clear_sentry_user();

    Ok(Redirect::to("/"))
}
