//! Contact form route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::ContactRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::NewContact;
use crate::state::AppState;

/// Contact form data. All three fields are required.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub logged_in: bool,
}

/// Display the contact form.
pub async fn contact_page(user: OptionalUser) -> impl IntoResponse {
    ContactTemplate {
        logged_in: user.is_logged_in(),
    }
}

/// Store a contact message and go back to the landing page.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect> {
    let contact = NewContact::new(form.name, form.email, form.message)?;
    let stored = ContactRepository::new(state.pool()).create(&contact).await?;

    tracing::info!(contact_id = %stored.id, "Contact message stored");
    Ok(Redirect::to("/"))
}
