//! Server-rendered web application for the Marquee booking directory.
//!
//! This crate wires the HTTP surface: an Axum router mapping the CRUD and
//! search paths for venues, artists, and shows onto handlers that fetch
//! through the `marquee-db` stores, shape data through the `marquee-views`
//! projections, and render HTML through minijinja page templates.
//!
//! # Architecture
//!
//! ```text
//! HTTP route --> store (fetch) --> projection (shape) --> template (render)
//! ```
//!
//! Writes parse a typed form payload, validate it, commit through a store
//! inside a transaction, and render the outcome page with a flash message.
//! All write failures -- validation, constraint, connectivity -- collapse
//! into one generic user-facing flash; the distinction survives in the
//! logs.
//!
//! The connection pool and template engine live in [`AppState`] and are
//! injected through Axum's `State` extractor; there is no process-wide
//! store handle.

pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;

// Re-export primary types for convenience.
pub use config::AppConfig;
pub use error::AppError;
pub use flash::{Flash, FlashKind};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
pub use templates::TemplateEngine;
