//! HTTP endpoint handlers, one module per entity family.
//!
//! Read handlers fetch through the stores, shape through the projections,
//! and render a page. Write handlers validate a typed form, commit through
//! a store, and render the outcome page directly with a flash message --
//! every failure mode (validation, constraint, connectivity) collapses
//! into one generic flash while the detail goes to the logs.
//!
//! A missing or malformed ID on a detail route is a not-found: flash plus
//! landing page at HTTP 200, never an error status.

pub mod artists;
pub mod pages;
pub mod shows;
pub mod venues;

use axum::response::Html;
use serde_json::json;

use crate::error::AppError;
use crate::flash::Flash;
use crate::state::AppState;

/// Render a page template to an HTML response.
pub(crate) fn page(
    state: &AppState,
    name: &str,
    context: &serde_json::Value,
) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(name, context)?))
}

/// Render the landing page, optionally with a flash message.
///
/// This is the safe page every failed or redirect-less write lands on.
pub(crate) fn home_page(
    state: &AppState,
    flash: Option<Flash>,
) -> Result<Html<String>, AppError> {
    page(state, "home", &json!({ "flash": flash }))
}

/// Parse a path segment into a typed ID; `None` means not-found.
pub(crate) fn parse_id<T: core::str::FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}
