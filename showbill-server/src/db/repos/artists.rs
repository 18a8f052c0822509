//! Artist repository
//!
//! Same surface as the venue repository minus the area grouping: the
//! artists page is a flat id/name listing.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use showbill_core::classify::Scheduled;

use super::DbError;

/// Artist record from database
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Field set for insert and full-overwrite update
#[derive(Debug, Clone, Default)]
pub struct NewArtist {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// id/name pair for the flat artists listing
#[derive(Debug, Clone, FromRow)]
pub struct ArtistRef {
    pub id: i64,
    pub name: Option<String>,
}

/// One of an artist's shows, joined with the venue display fields the
/// detail page renders
#[derive(Debug, Clone, FromRow)]
pub struct ArtistShowRow {
    pub venue_id: i64,
    pub venue_name: Option<String>,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl Scheduled for ArtistShowRow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an artist; constraint violations surface as opaque store
    /// errors for the caller to catch.
    pub async fn create(&self, a: &NewArtist) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            r#"
            INSERT INTO artists
                (name, city, state, phone, genres, image_link, facebook_link,
                 website, seeking_venue, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(&a.name)
        .bind(&a.city)
        .bind(&a.state)
        .bind(&a.phone)
        .bind(&a.genres)
        .bind(&a.image_link)
        .bind(&a.facebook_link)
        .bind(&a.website)
        .bind(a.seeking_venue)
        .bind(&a.seeking_description)
        .fetch_one(self.pool)
        .await?;

        Ok(artist)
    }

    /// Get a single artist by id.
    pub async fn get(&self, id: i64) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "artist",
            id: id.to_string(),
        })?;

        Ok(artist)
    }

    /// All artists, id and name only.
    pub async fn list(&self) -> Result<Vec<ArtistRef>, DbError> {
        let artists = sqlx::query_as::<_, ArtistRef>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(artists)
    }

    /// Case-insensitive substring search on name.
    pub async fn search(&self, term: &str) -> Result<Vec<Artist>, DbError> {
        let artists = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE name ILIKE '%' || $1 || '%' ORDER BY id"
        ))
        .bind(term)
        .fetch_all(self.pool)
        .await?;

        Ok(artists)
    }

    /// Start times of every show an artist is booked for, insertion order.
    pub async fn show_times(&self, artist_id: i64) -> Result<Vec<NaiveDateTime>, DbError> {
        let times = sqlx::query_scalar::<_, NaiveDateTime>(
            "SELECT start_time FROM shows WHERE artist_id = $1 ORDER BY id",
        )
        .bind(artist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(times)
    }

    /// An artist's shows joined with their venue's display fields.
    pub async fn shows_with_venues(&self, artist_id: i64) -> Result<Vec<ArtistShowRow>, DbError> {
        let rows = sqlx::query_as::<_, ArtistShowRow>(
            r#"
            SELECT s.venue_id,
                   v.name AS venue_name,
                   v.image_link AS venue_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(artist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrite every column from the submitted field set.
    pub async fn update(&self, id: i64, a: &NewArtist) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            r#"
            UPDATE artists SET
                name = $2, city = $3, state = $4, phone = $5, genres = $6,
                image_link = $7, facebook_link = $8, website = $9,
                seeking_venue = $10, seeking_description = $11
            WHERE id = $1
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&a.name)
        .bind(&a.city)
        .bind(&a.state)
        .bind(&a.phone)
        .bind(&a.genres)
        .bind(&a.image_link)
        .bind(&a.facebook_link)
        .bind(&a.website)
        .bind(a.seeking_venue)
        .bind(&a.seeking_description)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "artist",
            id: id.to_string(),
        })?;

        Ok(artist)
    }

    /// Delete an artist; its shows cascade in the store.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "artist",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
