//! Data layer (`PostgreSQL`) for the Marquee booking directory.
//!
//! One table per record type (venues, artists, shows), accessed through
//! per-entity stores that issue parameterized runtime queries against a
//! shared connection pool. There is no query-builder abstraction: each
//! operation is a direct predicate (equality on city+state, inequality on
//! `start_time`, case-insensitive substring on name, equality on a foreign
//! key) over a single table, plus one join for show listings.
//!
//! Referential integrity is enforced by the schema: `shows.venue_id` and
//! `shows.artist_id` are foreign keys with restrict semantics, so deleting
//! a referenced venue fails with [`DbError::Constraint`] instead of leaving
//! a dangling reference.
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`venue_store`] -- Venue inserts, lookups, search, area grouping
//! - [`artist_store`] -- Artist inserts, lookups, search
//! - [`show_store`] -- Show inserts and joined listings
//! - [`error`] -- Shared error types with write-failure classification

pub mod artist_store;
pub mod error;
pub mod postgres;
pub mod show_store;
pub mod venue_store;

// Re-export primary types for convenience.
pub use artist_store::ArtistStore;
pub use error::DbError;
pub use postgres::{PostgresConfig, PostgresPool};
pub use show_store::ShowStore;
pub use venue_store::VenueStore;
