//! Custom Askama template filters.

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Resolves an asset path under the `/static/` mount.
///
/// Usage in templates: `{{ "css/main.css"|asset }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn asset(path: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let path = path.to_string();
    Ok(format!(
        "{}/{}",
        crate::config::STATIC_MOUNT,
        path.trim_start_matches('/')
    ))
}
