//! Venue store operations.
//!
//! Lookups, name search, and the area grouping query used by the venues
//! listing page. Writes run in an explicit transaction so a failed
//! statement rolls back and the pooled connection is always returned.

use marquee_types::{NewVenue, Venue, VenueId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Columns selected for every venue read, in [`VenueRow`] field order.
const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             website, genres, seeking_talent, seeking_description, created_at";

/// Operations on the `venues` table.
pub struct VenueStore<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueStore<'a> {
    /// Create a new venue store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a venue and return its generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the insert fails; [`DbError::Constraint`]
    /// when a schema constraint rejects the row.
    pub async fn insert(&self, venue: &NewVenue) -> Result<VenueId, DbError> {
        let mut tx = self.pool.begin().await?;

        let row: (Uuid,) = sqlx::query_as(
            r"INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, website, genres, seeking_talent, seeking_description)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
              RETURNING id",
        )
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.image_link)
        .bind(&venue.facebook_link)
        .bind(&venue.website)
        .bind(&venue.genres)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(venue_id = %row.0, name = %venue.name, "Inserted venue");
        Ok(VenueId::from(row.0))
    }

    /// Fetch a venue by ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn get(&self, id: VenueId) -> Result<Option<Venue>, DbError> {
        let row: Option<VenueRow> =
            sqlx::query_as(&format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"))
                .bind(id.into_inner())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Venue::from))
    }

    /// Overwrite every mutable field of a venue.
    ///
    /// Returns the number of rows affected: 0 when the ID does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the update fails.
    pub async fn update(&self, id: VenueId, venue: &NewVenue) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"UPDATE venues
              SET name = $2, city = $3, state = $4, address = $5, phone = $6, image_link = $7,
                  facebook_link = $8, website = $9, genres = $10, seeking_talent = $11,
                  seeking_description = $12
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.image_link)
        .bind(&venue.facebook_link)
        .bind(&venue.website)
        .bind(&venue.genres)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(venue_id = %id, rows = result.rows_affected(), "Updated venue");
        Ok(result.rows_affected())
    }

    /// Hard-delete a venue by ID.
    ///
    /// Returns the number of rows affected. A delete matching zero rows
    /// still commits -- success with zero effect, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] when shows still reference the
    /// venue, [`DbError`] on any other failure.
    pub async fn delete(&self, id: VenueId) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(venue_id = %id, rows = result.rows_affected(), "Deleted venue");
        Ok(result.rows_affected())
    }

    /// Case-insensitive substring search on the name column only.
    ///
    /// An empty term matches every venue.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, DbError> {
        let rows: Vec<VenueRow> = sqlx::query_as(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE name ILIKE $1 ORDER BY created_at"
        ))
        .bind(format!("%{term}%"))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    /// Fetch all venues in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Venue>, DbError> {
        let rows: Vec<VenueRow> =
            sqlx::query_as(&format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY created_at"))
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    /// Distinct (city, state) pairs, grouped explicitly and ordered.
    ///
    /// Explicit `GROUP BY` rather than distinct-row selection: no arbitrary
    /// representative row is picked for an area.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_areas(&self) -> Result<Vec<(String, String)>, DbError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT city, state FROM venues GROUP BY city, state ORDER BY city, state",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Fetch every venue in one (city, state) area, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_in_area(&self, city: &str, state: &str) -> Result<Vec<Venue>, DbError> {
        let rows: Vec<VenueRow> = sqlx::query_as(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE city = $1 AND state = $2 ORDER BY created_at"
        ))
        .bind(city)
        .bind(state)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }
}

/// A row from the `venues` table.
///
/// Uses raw column types; conversion to the typed record happens in
/// [`From`].
#[derive(Debug, Clone, sqlx::FromRow)]
struct VenueRow {
    id: Uuid,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: String,
    image_link: String,
    facebook_link: String,
    website: String,
    genres: String,
    seeking_talent: bool,
    seeking_description: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Self {
            id: VenueId::from(row.id),
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            genres: row.genres,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
            created_at: row.created_at,
        }
    }
}
