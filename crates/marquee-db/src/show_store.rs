//! Show store operations.
//!
//! Shows are pure join rows (venue, artist, start time). Every listing
//! resolves venue and artist display fields with a single join per request
//! instead of per-field point lookups. Time partitioning into past and
//! upcoming happens in the projection layer against one captured "now";
//! this store only fetches and counts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use marquee_types::{ArtistId, NewShow, ShowId, ShowListing, VenueId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// The joined select shared by every show listing query.
const SHOW_JOIN: &str = r"SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                                 s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                                 s.start_time
                          FROM shows s
                          JOIN venues v ON v.id = s.venue_id
                          JOIN artists a ON a.id = s.artist_id";

/// Operations on the `shows` table.
pub struct ShowStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowStore<'a> {
    /// Create a new show store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a show and return its generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] when `venue_id` or `artist_id`
    /// references a nonexistent row, [`DbError`] on any other failure.
    pub async fn insert(&self, show: &NewShow) -> Result<ShowId, DbError> {
        let mut tx = self.pool.begin().await?;

        let row: (Uuid,) = sqlx::query_as(
            r"INSERT INTO shows (venue_id, artist_id, start_time)
              VALUES ($1, $2, $3)
              RETURNING id",
        )
        .bind(show.venue_id.into_inner())
        .bind(show.artist_id.into_inner())
        .bind(show.start_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(show_id = %row.0, venue_id = %show.venue_id, artist_id = %show.artist_id, "Inserted show");
        Ok(ShowId::from(row.0))
    }

    /// Fetch every show with joined display fields, ordered by start time
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<ShowListing>, DbError> {
        let rows: Vec<ShowJoinRow> =
            sqlx::query_as(&format!("{SHOW_JOIN} ORDER BY s.start_time, s.id"))
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    /// Fetch every show at one venue, unpartitioned.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_for_venue(&self, venue_id: VenueId) -> Result<Vec<ShowListing>, DbError> {
        let rows: Vec<ShowJoinRow> = sqlx::query_as(&format!(
            "{SHOW_JOIN} WHERE s.venue_id = $1 ORDER BY s.start_time, s.id"
        ))
        .bind(venue_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    /// Fetch every show by one artist, unpartitioned.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_for_artist(&self, artist_id: ArtistId) -> Result<Vec<ShowListing>, DbError> {
        let rows: Vec<ShowJoinRow> = sqlx::query_as(&format!(
            "{SHOW_JOIN} WHERE s.artist_id = $1 ORDER BY s.start_time, s.id"
        ))
        .bind(artist_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    /// Upcoming-show counts for a set of venues, keyed by venue ID.
    ///
    /// One `GROUP BY` query for the whole set. Venues with no upcoming
    /// shows are absent from the map; "upcoming" is strictly after `now`,
    /// and the same captured `now` must be reused for any fetch the caller
    /// pairs this with so the count equals fetch-then-measure.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn upcoming_counts_for_venues(
        &self,
        venue_ids: &[Uuid],
        now: DateTime<Utc>,
    ) -> Result<HashMap<Uuid, i64>, DbError> {
        self.upcoming_counts("venue_id", venue_ids, now).await
    }

    /// Upcoming-show counts for a set of artists, keyed by artist ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn upcoming_counts_for_artists(
        &self,
        artist_ids: &[Uuid],
        now: DateTime<Utc>,
    ) -> Result<HashMap<Uuid, i64>, DbError> {
        self.upcoming_counts("artist_id", artist_ids, now).await
    }

    /// Shared `GROUP BY` count over one of the two foreign-key columns.
    async fn upcoming_counts(
        &self,
        key_column: &str,
        ids: &[Uuid],
        now: DateTime<Utc>,
    ) -> Result<HashMap<Uuid, i64>, DbError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = sqlx::query_as(&format!(
            r"SELECT {key_column}, COUNT(*)
              FROM shows
              WHERE {key_column} = ANY($1) AND start_time > $2
              GROUP BY {key_column}",
        ))
        .bind(ids)
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}

/// A row from the show listing join.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ShowJoinRow {
    id: Uuid,
    venue_id: Uuid,
    venue_name: String,
    venue_image_link: String,
    artist_id: Uuid,
    artist_name: String,
    artist_image_link: String,
    start_time: DateTime<Utc>,
}

impl From<ShowJoinRow> for ShowListing {
    fn from(row: ShowJoinRow) -> Self {
        Self {
            id: ShowId::from(row.id),
            venue_id: VenueId::from(row.venue_id),
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            artist_id: ArtistId::from(row.artist_id),
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}
