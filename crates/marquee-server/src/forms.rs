//! Typed form payloads for the write endpoints.
//!
//! Each write endpoint deserializes into an explicit struct with
//! field-level validation rules -- no dynamic field access. Genres arrive
//! as one comma-separated text field and are normalized (tags trimmed)
//! into the stored delimited encoding at this boundary. Checkboxes follow
//! the HTML convention of being present only when checked.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use marquee_types::{ArtistId, NewArtist, NewShow, NewVenue, VenueId, join_genres, split_genres};
use serde::Deserialize;
use validator::Validate;

/// Timestamp formats accepted from the show form: HTML `datetime-local`
/// (with and without seconds) plus the plain space-separated form.
const START_TIME_INPUT_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// A field that failed conversion after syntactic validation passed.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A field value could not be converted to its typed form.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// The offending form field.
        field: &'static str,
        /// Why conversion failed.
        reason: String,
    },
}

/// The search box payload shared by venue and artist search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchForm {
    /// The raw search term; empty (or absent) matches all records.
    #[serde(default)]
    pub search_term: String,
}

/// Venue creation and edit payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VenueForm {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// City.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// State.
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Image URL.
    #[serde(default)]
    pub image_link: String,
    /// Facebook page URL.
    #[serde(default)]
    pub facebook_link: String,
    /// Website URL.
    #[serde(default)]
    pub website: String,
    /// Comma-separated genre tags.
    #[serde(default)]
    pub genres: String,
    /// Checkbox; present only when checked.
    #[serde(default)]
    pub seeking_talent: Option<String>,
    /// Free-text pitch.
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    /// Convert the validated form into an insert/update payload.
    pub fn into_new_venue(self) -> NewVenue {
        NewVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            genres: normalize_genres(&self.genres),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: self.seeking_description,
        }
    }
}

/// Artist creation and edit payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ArtistForm {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Home city.
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// Home state.
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Comma-separated genre tags.
    #[serde(default)]
    pub genres: String,
    /// Image URL.
    #[serde(default)]
    pub image_link: String,
    /// Facebook page URL.
    #[serde(default)]
    pub facebook_link: String,
    /// Website URL.
    #[serde(default)]
    pub website: String,
    /// Checkbox; present only when checked.
    #[serde(default)]
    pub seeking_venue: Option<String>,
    /// Free-text pitch.
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    /// Convert the validated form into an insert/update payload.
    pub fn into_new_artist(self) -> NewArtist {
        NewArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: normalize_genres(&self.genres),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: self.seeking_description,
        }
    }
}

/// Show creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShowForm {
    /// The hosting venue's ID.
    #[validate(length(min = 1, message = "venue_id is required"))]
    pub venue_id: String,
    /// The playing artist's ID.
    #[validate(length(min = 1, message = "artist_id is required"))]
    pub artist_id: String,
    /// The show start time.
    #[validate(length(min = 1, message = "start_time is required"))]
    pub start_time: String,
}

impl ShowForm {
    /// Convert the validated form into a typed insert payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] when an ID is not a UUID or the
    /// start time matches none of the accepted formats.
    pub fn into_new_show(self) -> Result<NewShow, FormError> {
        let venue_id: VenueId = self.venue_id.trim().parse().map_err(|e: uuid::Error| {
            FormError::Invalid {
                field: "venue_id",
                reason: e.to_string(),
            }
        })?;

        let artist_id: ArtistId = self.artist_id.trim().parse().map_err(|e: uuid::Error| {
            FormError::Invalid {
                field: "artist_id",
                reason: e.to_string(),
            }
        })?;

        let start_time =
            parse_start_time(self.start_time.trim()).ok_or_else(|| FormError::Invalid {
                field: "start_time",
                reason: format!("unrecognized timestamp {:?}", self.start_time),
            })?;

        Ok(NewShow {
            venue_id,
            artist_id,
            start_time,
        })
    }
}

/// Normalize a submitted genre field into the stored delimited encoding.
///
/// Tags are trimmed; order and count are preserved, including empty tags.
pub fn normalize_genres(raw: &str) -> String {
    let tags: Vec<String> = split_genres(raw)
        .into_iter()
        .map(|tag| tag.trim().to_owned())
        .collect();
    join_genres(&tags)
}

/// Parse a submitted start time, trying each accepted format in order.
/// Times are interpreted as UTC.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    START_TIME_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::Timelike;

    use super::*;

    fn venue_form() -> VenueForm {
        VenueForm {
            name: "Test Hall".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            address: "1 Main St".to_owned(),
            phone: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            website: String::new(),
            genres: "Rock, Jazz".to_owned(),
            seeking_talent: Some("on".to_owned()),
            seeking_description: String::new(),
        }
    }

    #[test]
    fn venue_form_normalizes_genres_and_checkbox() {
        let new_venue = venue_form().into_new_venue();
        assert_eq!(new_venue.genres, "Rock,Jazz");
        assert!(new_venue.seeking_talent);
    }

    #[test]
    fn absent_checkbox_means_false() {
        let mut form = venue_form();
        form.seeking_talent = None;
        assert!(!form.into_new_venue().seeking_talent);
    }

    #[test]
    fn blank_name_fails_validation() {
        let mut form = venue_form();
        form.name = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn normalize_preserves_the_splitting_contract() {
        assert_eq!(normalize_genres(""), "");
        assert_eq!(normalize_genres("Rock"), "Rock");
        assert_eq!(normalize_genres(" Folk , Blues "), "Folk,Blues");
        // Round-trip through the stored encoding.
        assert_eq!(split_genres(&normalize_genres("Rock, Jazz")), vec!["Rock", "Jazz"]);
    }

    #[test]
    fn start_time_accepts_datetime_local_with_and_without_seconds() {
        let with_seconds = parse_start_time("2026-07-04T19:30:05").unwrap();
        assert_eq!(with_seconds.second(), 5);

        let without_seconds = parse_start_time("2026-07-04T19:30").unwrap();
        assert_eq!(without_seconds.second(), 0);

        let spaced = parse_start_time("2026-07-04 19:30:05").unwrap();
        assert_eq!(spaced, with_seconds);
    }

    #[test]
    fn garbage_start_time_is_rejected() {
        assert!(parse_start_time("next friday").is_none());
    }

    #[test]
    fn show_form_converts_to_typed_payload() {
        let venue_id = VenueId::new();
        let artist_id = ArtistId::new();
        let form = ShowForm {
            venue_id: venue_id.to_string(),
            artist_id: artist_id.to_string(),
            start_time: "2026-07-04T19:30".to_owned(),
        };

        let show = form.into_new_show().unwrap();
        assert_eq!(show.venue_id, venue_id);
        assert_eq!(show.artist_id, artist_id);
    }

    #[test]
    fn show_form_rejects_malformed_ids() {
        let form = ShowForm {
            venue_id: "not-a-uuid".to_owned(),
            artist_id: ArtistId::new().to_string(),
            start_time: "2026-07-04T19:30".to_owned(),
        };

        let err = form.into_new_show().unwrap_err();
        assert!(matches!(err, FormError::Invalid { field: "venue_id", .. }));
    }
}
