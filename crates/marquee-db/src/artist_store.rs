//! Artist store operations.
//!
//! The artist surface mirrors the venue store minus deletion and area
//! grouping: the directory only groups venues by area, and only venues are
//! deletable from the observed pages.

use marquee_types::{Artist, ArtistId, NewArtist};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Columns selected for every artist read, in [`ArtistRow`] field order.
const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                              website, seeking_venue, seeking_description, created_at";

/// Operations on the `artists` table.
pub struct ArtistStore<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistStore<'a> {
    /// Create a new artist store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an artist and return its generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the insert fails.
    pub async fn insert(&self, artist: &NewArtist) -> Result<ArtistId, DbError> {
        let mut tx = self.pool.begin().await?;

        let row: (Uuid,) = sqlx::query_as(
            r"INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, website, seeking_venue, seeking_description)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
              RETURNING id",
        )
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.genres)
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(artist_id = %row.0, name = %artist.name, "Inserted artist");
        Ok(ArtistId::from(row.0))
    }

    /// Fetch an artist by ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn get(&self, id: ArtistId) -> Result<Option<Artist>, DbError> {
        let row: Option<ArtistRow> =
            sqlx::query_as(&format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"))
                .bind(id.into_inner())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Artist::from))
    }

    /// Overwrite every mutable field of an artist.
    ///
    /// Returns the number of rows affected: 0 when the ID does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the update fails.
    pub async fn update(&self, id: ArtistId, artist: &NewArtist) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"UPDATE artists
              SET name = $2, city = $3, state = $4, phone = $5, genres = $6, image_link = $7,
                  facebook_link = $8, website = $9, seeking_venue = $10, seeking_description = $11
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(&artist.genres)
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(artist_id = %id, rows = result.rows_affected(), "Updated artist");
        Ok(result.rows_affected())
    }

    /// Case-insensitive substring search on the name column only.
    ///
    /// An empty term matches every artist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, DbError> {
        let rows: Vec<ArtistRow> = sqlx::query_as(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE name ILIKE $1 ORDER BY created_at"
        ))
        .bind(format!("%{term}%"))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }

    /// Fetch all artists in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Artist>, DbError> {
        let rows: Vec<ArtistRow> =
            sqlx::query_as(&format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY created_at"))
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }
}

/// A row from the `artists` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ArtistRow {
    id: Uuid,
    name: String,
    city: String,
    state: String,
    phone: String,
    genres: String,
    image_link: String,
    facebook_link: String,
    website: String,
    seeking_venue: bool,
    seeking_description: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Self {
            id: ArtistId::from(row.id),
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            genres: row.genres,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website: row.website,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
            created_at: row.created_at,
        }
    }
}
