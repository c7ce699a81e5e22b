//! Artist projections: short and full.
//!
//! Mirrors the venue projections with `seeking_venue` in place of
//! `seeking_talent` and no address; artists have no by-area grouping.

use chrono::{DateTime, Utc};
use marquee_types::{Artist, ArtistId, ShowListing, split_genres};
use serde::Serialize;

use crate::show::{ShowView, partition_show_views};

/// The short artist projection used by list and search views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShort {
    /// The artist's identifier.
    pub id: ArtistId,
    /// The artist's name.
    pub name: String,
    /// Number of shows strictly after the captured "now".
    pub num_upcoming_shows: usize,
}

/// The full artist projection for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistFull {
    /// The artist's identifier.
    pub id: ArtistId,
    /// The artist's name.
    pub name: String,
    /// Genre tags, split from the stored delimited string.
    pub genres: Vec<String>,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Website URL.
    pub website: String,
    /// Facebook page URL.
    pub facebook_link: String,
    /// Whether the artist is currently looking for venues to play.
    pub seeking_venue: bool,
    /// Free-text pitch shown when `seeking_venue` is set.
    pub seeking_description: String,
    /// Image URL.
    pub image_link: String,
    /// Shows strictly before the captured "now".
    pub past_shows: Vec<ShowView>,
    /// Shows strictly after the captured "now".
    pub upcoming_shows: Vec<ShowView>,
    /// Always `past_shows.len()`.
    pub past_shows_count: usize,
    /// Always `upcoming_shows.len()`.
    pub upcoming_shows_count: usize,
}

/// Project an artist into its short shape.
pub fn artist_short(artist: &Artist, num_upcoming_shows: usize) -> ArtistShort {
    ArtistShort {
        id: artist.id,
        name: artist.name.clone(),
        num_upcoming_shows,
    }
}

/// Project an artist into its full detail shape.
///
/// `shows` is the artist's complete show list, already joined; both
/// buckets and both counts come from this one fetch and one `now`.
pub fn artist_full(artist: &Artist, shows: &[ShowListing], now: DateTime<Utc>) -> ArtistFull {
    let (past_shows, upcoming_shows) = partition_show_views(shows, now);
    ArtistFull {
        id: artist.id,
        name: artist.name.clone(),
        genres: split_genres(&artist.genres),
        city: artist.city.clone(),
        state: artist.state.clone(),
        phone: artist.phone.clone(),
        website: artist.website.clone(),
        facebook_link: artist.facebook_link.clone(),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description.clone(),
        image_link: artist.image_link.clone(),
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{Duration, TimeZone};
    use marquee_types::{ShowId, VenueId};

    use super::*;

    fn artist() -> Artist {
        Artist {
            id: ArtistId::new(),
            name: "The Harmonics".to_owned(),
            city: "Portland".to_owned(),
            state: "OR".to_owned(),
            phone: "555-0101".to_owned(),
            genres: "Folk,Blues".to_owned(),
            image_link: "https://example.com/artist.png".to_owned(),
            facebook_link: "https://facebook.com/harmonics".to_owned(),
            website: "https://harmonics.example.com".to_owned(),
            seeking_venue: true,
            seeking_description: "Open to bookings".to_owned(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn listing_at(artist_id: ArtistId, start_time: DateTime<Utc>) -> ShowListing {
        ShowListing {
            id: ShowId::new(),
            venue_id: VenueId::new(),
            venue_name: "Test Hall".to_owned(),
            venue_image_link: "https://example.com/venue.png".to_owned(),
            artist_id,
            artist_name: "The Harmonics".to_owned(),
            artist_image_link: "https://example.com/artist.png".to_owned(),
            start_time,
        }
    }

    #[test]
    fn full_projection_partitions_and_counts() {
        let a = artist();
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let shows = vec![
            listing_at(a.id, now - Duration::days(10)),
            listing_at(a.id, now - Duration::days(5)),
            listing_at(a.id, now + Duration::days(5)),
        ];

        let full = artist_full(&a, &shows, now);
        assert_eq!(full.genres, vec!["Folk", "Blues"]);
        assert_eq!(full.past_shows_count, 2);
        assert_eq!(full.upcoming_shows_count, 1);
        assert_eq!(full.past_shows_count, full.past_shows.len());
        assert_eq!(full.upcoming_shows_count, full.upcoming_shows.len());
    }

    #[test]
    fn short_projection_has_expected_fields() {
        let a = artist();
        let value = serde_json::to_value(artist_short(&a, 4)).unwrap();
        assert_eq!(value["name"], "The Harmonics");
        assert_eq!(value["num_upcoming_shows"], 4);
    }

    #[test]
    fn full_projection_uses_seeking_venue_field() {
        let a = artist();
        let value = serde_json::to_value(artist_full(&a, &[], Utc::now())).unwrap();
        assert_eq!(value["seeking_venue"], true);
        assert!(value.get("seeking_talent").is_none());
        assert!(value.get("address").is_none());
    }
}
