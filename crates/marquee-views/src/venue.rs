//! Venue projections: short, full, and the by-area grouping.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use marquee_types::{ShowListing, Venue, VenueId, split_genres};
use serde::Serialize;
use uuid::Uuid;

use crate::show::{ShowView, partition_show_views};

/// The short venue projection used by list and search views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShort {
    /// The venue's identifier.
    pub id: VenueId,
    /// The venue's name.
    pub name: String,
    /// Number of shows strictly after the captured "now".
    pub num_upcoming_shows: usize,
}

/// The full venue projection for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueFull {
    /// The venue's identifier.
    pub id: VenueId,
    /// The venue's name.
    pub name: String,
    /// Genre tags, split from the stored delimited string.
    pub genres: Vec<String>,
    /// Street address.
    pub address: String,
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
    /// Whether the venue is currently looking for artists to book.
    pub seeking_talent: bool,
    /// Free-text pitch shown when `seeking_talent` is set.
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

/// One (city, state) area with the short projection of each of its venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaView {
    /// City, half of the grouping key.
    pub city: String,
    /// State, the other half of the grouping key.
    pub state: String,
    /// Every venue in this area, each exactly once.
    pub venues: Vec<VenueShort>,
}

/// Project a venue into its short shape.
pub fn venue_short(venue: &Venue, num_upcoming_shows: usize) -> VenueShort {
    VenueShort {
        id: venue.id,
        name: venue.name.clone(),
        num_upcoming_shows,
    }
}

/// Project a venue into its full detail shape.
///
/// `shows` is the venue's complete show list, already joined; it is
/// partitioned here against `now` so both buckets and both counts come
/// from the same fetch and the same clock reading.
pub fn venue_full(venue: &Venue, shows: &[ShowListing], now: DateTime<Utc>) -> VenueFull {
    let (past_shows, upcoming_shows) = partition_show_views(shows, now);
    VenueFull {
        id: venue.id,
        name: venue.name.clone(),
        genres: split_genres(&venue.genres),
        address: venue.address.clone(),
        city: venue.city.clone(),
        state: venue.state.clone(),
        phone: venue.phone.clone(),
        website: venue.website.clone(),
        facebook_link: venue.facebook_link.clone(),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.clone(),
        image_link: venue.image_link.clone(),
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Group venues into areas by their (city, state) pair.
///
/// Grouping is explicit: every venue lands in exactly one area and no
/// arbitrary representative row is involved. Areas come out ordered by
/// (city, state); venues keep their input order within an area.
/// `upcoming_counts` maps venue IDs to their upcoming-show count; absent
/// IDs count as zero.
pub fn group_by_area(venues: &[Venue], upcoming_counts: &HashMap<Uuid, i64>) -> Vec<AreaView> {
    let mut grouped: BTreeMap<(String, String), Vec<VenueShort>> = BTreeMap::new();
    for venue in venues {
        let count = lookup_count(upcoming_counts, venue.id.into_inner());
        grouped
            .entry((venue.city.clone(), venue.state.clone()))
            .or_default()
            .push(venue_short(venue, count));
    }

    grouped
        .into_iter()
        .map(|((city, state), venues)| AreaView { city, state, venues })
        .collect()
}

/// Look up a count map entry, treating absence and negative values as zero.
pub fn lookup_count(counts: &HashMap<Uuid, i64>, id: Uuid) -> usize {
    counts
        .get(&id)
        .copied()
        .and_then(|c| usize::try_from(c).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{Duration, TimeZone};
    use marquee_types::{ArtistId, ShowId};

    use super::*;

    fn venue(name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id: VenueId::new(),
            name: name.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            address: "1 Main St".to_owned(),
            phone: "555-0100".to_owned(),
            image_link: "https://example.com/venue.png".to_owned(),
            facebook_link: "https://facebook.com/venue".to_owned(),
            website: "https://venue.example.com".to_owned(),
            genres: "Rock,Jazz".to_owned(),
            seeking_talent: true,
            seeking_description: "Weekend acts wanted".to_owned(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn listing_at(venue_id: VenueId, start_time: DateTime<Utc>) -> ShowListing {
        ShowListing {
            id: ShowId::new(),
            venue_id,
            venue_name: "Test Hall".to_owned(),
            venue_image_link: "https://example.com/venue.png".to_owned(),
            artist_id: ArtistId::new(),
            artist_name: "The Harmonics".to_owned(),
            artist_image_link: "https://example.com/artist.png".to_owned(),
            start_time,
        }
    }

    #[test]
    fn full_projection_splits_genres_and_counts_partitions() {
        let v = venue("Test Hall", "Springfield", "IL");
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let shows = vec![
            listing_at(v.id, now - Duration::days(1)),
            listing_at(v.id, now + Duration::days(1)),
            listing_at(v.id, now + Duration::days(2)),
        ];

        let full = venue_full(&v, &shows, now);
        assert_eq!(full.genres, vec!["Rock", "Jazz"]);
        assert_eq!(full.past_shows_count, full.past_shows.len());
        assert_eq!(full.upcoming_shows_count, full.upcoming_shows.len());
        assert_eq!(full.past_shows_count, 1);
        assert_eq!(full.upcoming_shows_count, 2);
        assert!(full.seeking_talent);
    }

    #[test]
    fn full_projection_of_fresh_venue_is_empty_both_ways() {
        let v = venue("Test Hall", "Springfield", "IL");
        let now = Utc::now();
        let full = venue_full(&v, &[], now);
        assert!(full.past_shows.is_empty());
        assert!(full.upcoming_shows.is_empty());
        assert_eq!(full.past_shows_count, 0);
        assert_eq!(full.upcoming_shows_count, 0);
    }

    #[test]
    fn empty_genre_string_projects_as_single_empty_tag() {
        let mut v = venue("Test Hall", "Springfield", "IL");
        v.genres = String::new();
        let full = venue_full(&v, &[], Utc::now());
        assert_eq!(full.genres, vec![String::new()]);
    }

    #[test]
    fn area_grouping_lists_every_venue_exactly_once() {
        let a = venue("Alpha", "Springfield", "IL");
        let b = venue("Beta", "Springfield", "IL");
        let c = venue("Gamma", "Portland", "OR");
        let venues = vec![a.clone(), b.clone(), c.clone()];

        let areas = group_by_area(&venues, &HashMap::new());
        assert_eq!(areas.len(), 2);

        // Ordered by (city, state): Portland before Springfield.
        assert_eq!(areas[0].city, "Portland");
        assert_eq!(areas[1].city, "Springfield");

        let springfield: Vec<&VenueShort> = areas[1].venues.iter().collect();
        assert_eq!(springfield.len(), 2);
        assert_eq!(springfield[0].id, a.id);
        assert_eq!(springfield[1].id, b.id);

        let total: usize = areas.iter().map(|area| area.venues.len()).sum();
        assert_eq!(total, venues.len());
    }

    #[test]
    fn upcoming_counts_flow_into_short_projections() {
        let a = venue("Alpha", "Springfield", "IL");
        let b = venue("Beta", "Springfield", "IL");
        let mut counts = HashMap::new();
        counts.insert(a.id.into_inner(), 3_i64);

        let areas = group_by_area(&[a, b], &counts);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 3);
        // Absent from the map counts as zero.
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 0);
    }

    #[test]
    fn serialized_field_names_match_display_contract() {
        let v = venue("Test Hall", "Springfield", "IL");
        let value = serde_json::to_value(venue_full(&v, &[], Utc::now())).unwrap();
        for key in [
            "id",
            "name",
            "genres",
            "address",
            "city",
            "state",
            "phone",
            "website",
            "facebook_link",
            "seeking_talent",
            "seeking_description",
            "image_link",
            "past_shows",
            "upcoming_shows",
            "past_shows_count",
            "upcoming_shows_count",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }

        let short = serde_json::to_value(venue_short(&v, 2)).unwrap();
        assert_eq!(short["num_upcoming_shows"], 2);
    }
}
