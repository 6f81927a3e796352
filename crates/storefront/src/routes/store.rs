//! Catalog route handlers: the store page and incremental loading.

use std::num::IntErrorKind;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::services::{CatalogItem, CatalogService};
use crate::state::AppState;

/// Store page template.
#[derive(Template, WebTemplate)]
#[template(path = "store.html")]
pub struct StoreTemplate {
    pub logged_in: bool,
    pub products: Vec<CatalogItem>,
}

/// Query parameters for `/load_more`.
///
/// `offset` is kept as raw text; anything that is not an integer counts as 0,
/// and integers too large for `i64` land past the end of the catalog.
#[derive(Debug, Deserialize)]
pub struct LoadMoreQuery {
    pub offset: Option<String>,
}

impl LoadMoreQuery {
    fn offset(&self) -> i64 {
        self.offset
            .as_deref()
            .map_or(0, |raw| match raw.trim().parse::<i64>() {
                Ok(offset) => offset,
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
                Err(_) => 0,
            })
    }
}

/// Display the first page of products.
#[instrument(skip(state, user))]
pub async fn store_page(
    State(state): State<AppState>,
    user: OptionalUser,
) -> Result<StoreTemplate> {
    let products = CatalogService::new(state.pool(), state.static_base())
        .list_first_page()
        .await?;

    Ok(StoreTemplate {
        logged_in: user.is_logged_in(),
        products,
    })
}

/// Return the page of products starting at `offset` as JSON.
#[instrument(skip(state))]
pub async fn load_more(
    State(state): State<AppState>,
    Query(query): Query<LoadMoreQuery>,
) -> Result<Json<Vec<CatalogItem>>> {
    let items = CatalogService::new(state.pool(), state.static_base())
        .list_page(query.offset())
        .await?;

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: Option<&str>) -> LoadMoreQuery {
        LoadMoreQuery {
            offset: raw.map(String::from),
        }
    }

    #[test]
    fn test_offset_parsing() {
        assert_eq!(query(None).offset(), 0);
        assert_eq!(query(Some("3")).offset(), 3);
        assert_eq!(query(Some("-2")).offset(), -2);
        assert_eq!(query(Some("tres")).offset(), 0);
        assert_eq!(query(Some("")).offset(), 0);
        assert_eq!(query(Some("99999999999999999999")).offset(), i64::MAX);
        assert_eq!(query(Some("-99999999999999999999")).offset(), 0);
    }
}
