//! Error types for the web application layer.
//!
//! [`AppError`] covers the failures a handler cannot turn into a flash
//! message: read-path database errors, template rendering failures, and
//! configuration problems. Its [`IntoResponse`] implementation renders the
//! 500 fallback page. Write-path failures never reach this type -- write
//! handlers catch [`marquee_db::DbError`] and flash a generic message
//! instead (see the handlers module).

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use marquee_db::DbError;

/// Static 500 fallback page.
///
/// Kept template-free: this page must render even when the template
/// engine itself is what failed.
const INTERNAL_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Marquee -- server error</title>
</head>
<body>
    <h1>Something went wrong</h1>
    <p>An internal error occurred. Please try again later.</p>
    <p><a href="/">Back to the directory</a></p>
</body>
</html>"#;

/// Errors that can occur in the web application layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A read-path database operation failed.
    #[error("database error: {0}")]
    Db(#[from] DbError),

    /// A page template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// A configuration error at startup.
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_the_500_page() {
        let response = AppError::Template("boom".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
