//! Shared application state for the web server.
//!
//! [`AppState`] carries the two collaborators every handler needs: the
//! `PostgreSQL` pool and the template engine. It is injected through
//! Axum's `State` extractor rather than held as ambient global state, so
//! tests can build one against any pool and templates directory.

use std::sync::Arc;

use marquee_db::PostgresPool;

use crate::templates::TemplateEngine;

/// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// The injected `PostgreSQL` connection pool.
    pub db: PostgresPool,
    /// The loaded page templates.
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// Create the application state from its collaborators.
    pub fn new(db: PostgresPool, templates: TemplateEngine) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
        }
    }
}
