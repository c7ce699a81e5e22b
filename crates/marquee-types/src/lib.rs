//! Shared type definitions for the Marquee booking directory.
//!
//! This crate is the single source of truth for the three record types the
//! directory stores (venues, artists, shows) and the conventions attached to
//! them: type-safe identifiers and the delimited genre-string encoding.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`genres`] -- Comma-delimited genre string encoding
//! - [`records`] -- Entity records and insert payloads

pub mod genres;
pub mod ids;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use genres::{GENRE_DELIMITER, join_genres, split_genres};
pub use ids::{ArtistId, ShowId, VenueId};
pub use records::{Artist, NewArtist, NewShow, NewVenue, ShowListing, Venue};
