//! Show projection and time partitioning.
//!
//! A show's display data (venue name/image, artist name/image) is already
//! resolved by the store's join; this module only reshapes and formats.
//! Partitioning into past and upcoming uses one captured "now" for both
//! buckets -- a show starting exactly at "now" falls into neither, which
//! is defined behavior.

use chrono::{DateTime, Utc};
use marquee_types::{ArtistId, ShowId, ShowListing, VenueId};
use serde::Serialize;

/// The fixed display format for show start times: `MM/DD/YYYY, HH:MM:SS`.
pub const START_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// A show as rendered on the shows list and on detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowView {
    /// The show's identifier.
    pub id: ShowId,
    /// The venue hosting the show.
    pub venue_id: VenueId,
    /// The venue's name.
    pub venue_name: String,
    /// The venue's image link.
    pub venue_image_link: String,
    /// The artist playing the show.
    pub artist_id: ArtistId,
    /// The artist's name.
    pub artist_name: String,
    /// The artist's image link.
    pub artist_image_link: String,
    /// Start time formatted with [`START_TIME_FORMAT`].
    pub start_time: String,
}

/// Format a start time for display.
pub fn format_start_time(start_time: DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

/// Project one joined show row into its display shape.
pub fn show_view(listing: &ShowListing) -> ShowView {
    ShowView {
        id: listing.id,
        venue_id: listing.venue_id,
        venue_name: listing.venue_name.clone(),
        venue_image_link: listing.venue_image_link.clone(),
        artist_id: listing.artist_id,
        artist_name: listing.artist_name.clone(),
        artist_image_link: listing.artist_image_link.clone(),
        start_time: format_start_time(listing.start_time),
    }
}

/// Partition shows into (past, upcoming) against a single captured `now`.
///
/// Past is strictly before `now`, upcoming strictly after; a show starting
/// exactly at `now` appears in neither bucket. Input order is preserved
/// within each bucket. Counts for detail pages are the lengths of the
/// returned vectors, so count always equals fetch-then-measure.
pub fn partition_show_views(
    listings: &[ShowListing],
    now: DateTime<Utc>,
) -> (Vec<ShowView>, Vec<ShowView>) {
    let past = listings
        .iter()
        .filter(|s| s.start_time < now)
        .map(show_view)
        .collect();
    let upcoming = listings
        .iter()
        .filter(|s| s.start_time > now)
        .map(show_view)
        .collect();
    (past, upcoming)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{Duration, TimeZone};
    use marquee_types::{ArtistId, ShowId, VenueId};

    use super::*;

    fn listing(start_time: DateTime<Utc>) -> ShowListing {
        ShowListing {
            id: ShowId::new(),
            venue_id: VenueId::new(),
            venue_name: "Test Hall".to_owned(),
            venue_image_link: "https://example.com/venue.png".to_owned(),
            artist_id: ArtistId::new(),
            artist_name: "The Harmonics".to_owned(),
            artist_image_link: "https://example.com/artist.png".to_owned(),
            start_time,
        }
    }

    #[test]
    fn start_time_uses_fixed_format() {
        let t = Utc.with_ymd_and_hms(2026, 7, 4, 19, 30, 5).unwrap();
        assert_eq!(format_start_time(t), "07/04/2026, 19:30:05");
    }

    #[test]
    fn show_view_carries_joined_fields_verbatim() {
        let t = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let l = listing(t);
        let view = show_view(&l);
        assert_eq!(view.venue_name, "Test Hall");
        assert_eq!(view.artist_name, "The Harmonics");
        assert_eq!(view.start_time, "01/02/2026, 03:04:05");
        assert_eq!(view.id, l.id);
        assert_eq!(view.venue_id, l.venue_id);
        assert_eq!(view.artist_id, l.artist_id);
    }

    #[test]
    fn partition_is_strict_around_now() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let shows = vec![
            listing(now - Duration::hours(1)),
            listing(now),
            listing(now + Duration::hours(1)),
        ];

        let (past, upcoming) = partition_show_views(&shows, now);
        assert_eq!(past.len(), 1);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(past[0].id, shows[0].id);
        assert_eq!(upcoming[0].id, shows[2].id);
        // The boundary show falls into neither bucket.
        assert!(past.iter().chain(&upcoming).all(|s| s.id != shows[1].id));
    }

    #[test]
    fn partition_preserves_input_order() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let shows = vec![
            listing(now - Duration::days(3)),
            listing(now - Duration::days(2)),
            listing(now - Duration::days(1)),
        ];

        let (past, upcoming) = partition_show_views(&shows, now);
        assert!(upcoming.is_empty());
        let ids: Vec<ShowId> = past.iter().map(|s| s.id).collect();
        let expected: Vec<ShowId> = shows.iter().map(|s| s.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn serialized_field_names_match_display_contract() {
        let t = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let value = serde_json::to_value(show_view(&listing(t))).unwrap();
        for key in [
            "id",
            "venue_id",
            "venue_name",
            "venue_image_link",
            "artist_id",
            "artist_name",
            "artist_image_link",
            "start_time",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
    }
}
