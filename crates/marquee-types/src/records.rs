//! Entity records for venues, artists, and shows.
//!
//! These are the stored shapes: flat columns, genres as a single delimited
//! string (see [`crate::genres`]). Display shaping happens downstream in the
//! projection layer, never here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ArtistId, ShowId, VenueId};

/// A venue record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier, generated on insert.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// City, half of the area grouping key.
    pub city: String,
    /// State, the other half of the area grouping key.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// URL of the venue's image.
    pub image_link: String,
    /// URL of the venue's Facebook page.
    pub facebook_link: String,
    /// URL of the venue's website.
    pub website: String,
    /// Comma-delimited genre tag list.
    pub genres: String,
    /// Whether the venue is currently looking for artists to book.
    pub seeking_talent: bool,
    /// Free-text pitch shown when `seeking_talent` is set.
    pub seeking_description: String,
    /// Insertion timestamp; list queries order by this.
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a venue, or overwriting one on edit.
///
/// Edits overwrite every mutable field, so insert and update share this
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVenue {
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// URL of the venue's image.
    pub image_link: String,
    /// URL of the venue's Facebook page.
    pub facebook_link: String,
    /// URL of the venue's website.
    pub website: String,
    /// Comma-delimited genre tag list.
    pub genres: String,
    /// Whether the venue is currently looking for artists to book.
    pub seeking_talent: bool,
    /// Free-text pitch shown when `seeking_talent` is set.
    pub seeking_description: String,
}

/// An artist record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique identifier, generated on insert.
    pub id: ArtistId,
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Comma-delimited genre tag list.
    pub genres: String,
    /// URL of the artist's image.
    pub image_link: String,
    /// URL of the artist's Facebook page.
    pub facebook_link: String,
    /// URL of the artist's website.
    pub website: String,
    /// Whether the artist is currently looking for venues to play.
    pub seeking_venue: bool,
    /// Free-text pitch shown when `seeking_venue` is set.
    pub seeking_description: String,
    /// Insertion timestamp; list queries order by this.
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting an artist, or overwriting one on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtist {
    /// Display name.
    pub name: String,
    /// Home city.
    pub city: String,
    /// Home state.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Comma-delimited genre tag list.
    pub genres: String,
    /// URL of the artist's image.
    pub image_link: String,
    /// URL of the artist's Facebook page.
    pub facebook_link: String,
    /// URL of the artist's website.
    pub website: String,
    /// Whether the artist is currently looking for venues to play.
    pub seeking_venue: bool,
    /// Free-text pitch shown when `seeking_venue` is set.
    pub seeking_description: String,
}

/// Fields for inserting a show: a pure join entity between a venue and an
/// artist with a start time, nothing denormalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    /// The venue hosting the show.
    pub venue_id: VenueId,
    /// The artist playing the show.
    pub artist_id: ArtistId,
    /// When the show starts.
    pub start_time: DateTime<Utc>,
}

/// A show with its venue and artist display fields resolved by a join.
///
/// Display data is never denormalized onto the show row; the store resolves
/// names and image links with one join per list request and returns this
/// shape. Time partitioning (past versus upcoming) happens downstream
/// against a single captured "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    /// The show's identifier.
    pub id: ShowId,
    /// The venue hosting the show.
    pub venue_id: VenueId,
    /// The venue's name at read time.
    pub venue_name: String,
    /// The venue's image link at read time.
    pub venue_image_link: String,
    /// The artist playing the show.
    pub artist_id: ArtistId,
    /// The artist's name at read time.
    pub artist_name: String,
    /// The artist's image link at read time.
    pub artist_image_link: String,
    /// When the show starts.
    pub start_time: DateTime<Utc>,
}
