//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::OptionalUser;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub logged_in: bool,
}

/// Display the landing page.
pub async fn home(user: OptionalUser) -> impl IntoResponse {
    IndexTemplate {
        logged_in: user.is_logged_in(),
    }
}
