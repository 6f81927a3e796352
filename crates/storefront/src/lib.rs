//! Byte Shop storefront library.
//!
//! A small server-rendered shop: landing page, contact form, paged product
//! catalog, username/password accounts and a session-held cart, backed by a
//! single SQLite database.
//!
//! The binary in `main.rs` only loads configuration, sets up logging and
//! serves the router built by [`app`]; everything else lives here so it can
//! be tested without a process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response},
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::config::STATIC_MOUNT;
use crate::state::AppState;

/// Build the full storefront router: pages, static assets and the middleware
/// stack.
///
/// Creates the session table if it does not exist yet.
///
/// # Errors
///
/// Returns `sqlx::Error` if the session store cannot be prepared.
pub async fn app(state: AppState) -> Result<Router, sqlx::Error> {
    let store = middleware::create_session_store(state.pool()).await?;
    let session_layer = middleware::create_session_layer(store, state.config());
    let static_files = ServeDir::new(&state.config().static_dir);

    let router = Router::new()
        .merge(routes::routes())
        .nest_service(STATIC_MOUNT, static_files)
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    Ok(router)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{StatusCode, header},
    };
    use tower::ServiceExt;
    use url::Url;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::test_support::test_pool;

    async fn test_app() -> Router {
        let config = StorefrontConfig::local(Url::parse("http://tienda.test/").unwrap());
        app(AppState::new(config, test_pool().await)).await.unwrap()
    }

    async fn get(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(test_app().await, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");

        let ready = get(test_app().await, "/health/ready").await;
        assert_eq!(ready.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_pages_render() {
        for (uri, needle) in [
            ("/", "Bienvenido"),
            ("/contact", "name=\"message\""),
            ("/register", "action=\"/register\""),
            ("/login", "action=\"/login\""),
            ("/cart", "Total: $0.00"),
        ] {
            let response = get(test_app().await, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_string(response).await.contains(needle), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_store_page_lists_first_page() {
        let response = get(test_app().await, "/store").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("Remera Negra - $20.00"));
        assert!(html.contains("Buzo Negro"));
        assert!(!html.contains("Buzo Blanco"));
        assert!(html.contains("data-initial-count=\"3\""));
        assert!(html.contains("http://tienda.test/static/img/remera_negra.png"));
    }

    #[tokio::test]
    async fn test_load_more_json() {
        let response = get(test_app().await, "/load_more?offset=6").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 7,
                "name": "Sandalias Blancas",
                "price": 25.0,
                "image": "http://tienda.test/static/img/crocs.jpg"
            }])
        );
    }

    #[tokio::test]
    async fn test_load_more_past_end_and_default() {
        let past = get(test_app().await, "/load_more?offset=7").await;
        assert_eq!(body_string(past).await, "[]");

        let default = get(test_app().await, "/load_more").await;
        let json: serde_json::Value = serde_json::from_str(&body_string(default).await).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_load_more_huge_offset_is_past_end() {
        let response = get(test_app().await, "/load_more?offset=99999999999999999999").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn test_add_to_cart_redirects_with_see_other() {
        let response = get(test_app().await, "/add_to_cart/1").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/cart");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[tokio::test]
    async fn test_empty_contact_field_is_bad_request() {
        let response = test_app()
            .await
            .oneshot(
                Request::post("/contact")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Ana&email=&message=hola"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = get(test_app().await, "/").await;
        assert!(response.headers().contains_key(header::CONTENT_SECURITY_POLICY));
        assert!(response.headers().contains_key("x-request-id"));
    }
}
