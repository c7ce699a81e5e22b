//! View projections for the Marquee booking directory.
//!
//! Pure functions that reshape stored records into the nested,
//! display-ready structures the page templates consume. Related data
//! (shows, upcoming counts) arrives already fetched -- projection never
//! queries, so the query cost of a page is visible in its handler and
//! batchable.
//!
//! Four shapes per entity family: `short` for list and search results,
//! `full` for detail pages, `by-area` for the venue listing, and the
//! joined show view with its fixed `MM/DD/YYYY, HH:MM:SS` timestamp
//! format.
//!
//! # Modules
//!
//! - [`show`] -- Show projection, timestamp formatting, time partitioning
//! - [`venue`] -- Venue short/full projections and area grouping
//! - [`artist`] -- Artist short/full projections

pub mod artist;
pub mod show;
pub mod venue;

// Re-export primary types for convenience.
pub use artist::{ArtistFull, ArtistShort, artist_full, artist_short};
pub use show::{START_TIME_FORMAT, ShowView, format_start_time, partition_show_views, show_view};
pub use venue::{AreaView, VenueFull, VenueShort, group_by_area, lookup_count, venue_full, venue_short};
