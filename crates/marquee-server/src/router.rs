//! Axum router construction for the directory's HTTP surface.
//!
//! Assembles every page route into a single [`Router`] with request
//! tracing enabled. Unmatched paths fall through to the rendered 404
//! page.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers::{artists, pages, shows, venues};
use crate::state::AppState;

/// Build the complete Axum router for the directory.
///
/// The router includes:
/// - `GET /` -- landing page
/// - `GET /venues` -- venues grouped by area
/// - `POST /venues/search` -- venue name search
/// - `GET|POST /venues/create` -- venue creation form and submission
/// - `GET|DELETE /venues/{id}` -- venue detail page and deletion
/// - `GET|POST /venues/{id}/edit` -- venue edit form and submission
/// - `GET /artists`, `POST /artists/search` -- artist listing and search
/// - `GET|POST /artists/create`, `GET /artists/{id}`,
///   `GET|POST /artists/{id}/edit` -- artist pages
/// - `GET /shows`, `GET|POST /shows/create` -- show listing and creation
/// - fallback -- rendered 404 page
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(pages::index))
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/search", axum::routing::post(venues::search))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create_submit),
        )
        .route("/venues/{id}", get(venues::detail).delete(venues::delete))
        .route(
            "/venues/{id}/edit",
            get(venues::edit_form).post(venues::edit_submit),
        )
        // Artists
        .route("/artists", get(artists::list))
        .route("/artists/search", axum::routing::post(artists::search))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create_submit),
        )
        .route("/artists/{id}", get(artists::detail))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_form).post(artists::edit_submit),
        )
        // Shows
        .route("/shows", get(shows::list))
        .route(
            "/shows/create",
            get(shows::create_form).post(shows::create_submit),
        )
        // 404 fallback
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
