//! Show endpoints: the joined listing and creation.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use marquee_db::ShowStore;
use marquee_views::show_view;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::flash::Flash;
use crate::forms::ShowForm;
use crate::handlers::{home_page, page};
use crate::state::AppState;

/// The generic write-failure flash for shows.
const SHOW_FAILED: &str = "An error occurred. Show could not be listed.";

/// `GET /shows` -- every show, joined to its venue and artist, ordered by
/// start time ascending.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let listings = ShowStore::new(state.db.pool()).list_all().await?;
    let shows: Vec<_> = listings.iter().map(show_view).collect();
    page(&state, "shows", &json!({ "shows": shows }))
}

/// `GET /shows/create` -- the blank show form.
pub async fn create_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    page(&state, "show_form", &json!({}))
}

/// `POST /shows/create` -- validate, convert, insert, flash the outcome.
///
/// A show referencing a nonexistent venue or artist is rejected by the
/// schema's foreign keys; that constraint violation collapses into the
/// same generic flash as any other write failure.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Html<String>, AppError> {
    if let Err(errors) = form.validate() {
        tracing::warn!(%errors, "Show form rejected");
        return home_page(&state, Some(Flash::error(SHOW_FAILED)));
    }

    let new_show = match form.into_new_show() {
        Ok(new_show) => new_show,
        Err(e) => {
            tracing::warn!(error = %e, "Show form conversion failed");
            return home_page(&state, Some(Flash::error(SHOW_FAILED)));
        }
    };

    match ShowStore::new(state.db.pool()).insert(&new_show).await {
        Ok(_) => home_page(&state, Some(Flash::success("Show was successfully listed!"))),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind(), "Show insert failed");
            home_page(&state, Some(Flash::error(SHOW_FAILED)))
        }
    }
}
