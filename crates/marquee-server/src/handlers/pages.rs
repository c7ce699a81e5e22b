//! Landing page and the 404 fallback.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::handlers::home_page;
use crate::state::AppState;

/// Static 404 body used when the 404 template itself fails to render.
const NOT_FOUND_FALLBACK: &str = "<!DOCTYPE html><html><body><h1>Page not found</h1>\
                                  <p><a href=\"/\">Back to the directory</a></p></body></html>";

/// `GET /` -- the landing page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    home_page(&state, None)
}

/// Fallback for unmatched routes: the rendered 404 page.
pub async fn not_found(State(state): State<AppState>) -> Response {
    match state.templates.render("404", serde_json::json!({})) {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "404 template failed to render");
            (StatusCode::NOT_FOUND, Html(NOT_FOUND_FALLBACK)).into_response()
        }
    }
}
