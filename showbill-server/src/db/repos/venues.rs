//! Venue repository
//!
//! The venues page is assembled group-first: distinct (city, state) pairs,
//! then one query per pair for that area's venues. Upcoming counts are
//! computed by the caller from the venue's fetched show times, not by SQL
//! aggregation.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use showbill_core::classify::Scheduled;

use super::DbError;

/// Venue record from database. Every column except the genre list and the
/// seeking flag is nullable; a missing form field lands here as None.
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Field set for insert and full-overwrite update
#[derive(Debug, Clone, Default)]
pub struct NewVenue {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A distinct (city, state) pair
#[derive(Debug, Clone, FromRow)]
pub struct Area {
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One of a venue's shows, joined with the artist display fields the
/// detail page renders
#[derive(Debug, Clone, FromRow)]
pub struct VenueShowRow {
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl Scheduled for VenueShowRow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, \
     facebook_link, website, genres, seeking_talent, seeking_description";

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a venue. No field-level validation happens first; constraint
    /// violations surface as opaque store errors for the caller to catch.
    pub async fn create(&self, v: &NewVenue) -> Result<Venue, DbError> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            r#"
            INSERT INTO venues
                (name, city, state, address, phone, image_link, facebook_link,
                 website, genres, seeking_talent, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(&v.name)
        .bind(&v.city)
        .bind(&v.state)
        .bind(&v.address)
        .bind(&v.phone)
        .bind(&v.image_link)
        .bind(&v.facebook_link)
        .bind(&v.website)
        .bind(&v.genres)
        .bind(v.seeking_talent)
        .bind(&v.seeking_description)
        .fetch_one(self.pool)
        .await?;

        Ok(venue)
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i64) -> Result<Venue, DbError> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "venue",
            id: id.to_string(),
        })?;

        Ok(venue)
    }

    /// Distinct (city, state) pairs across all venues.
    pub async fn list_areas(&self) -> Result<Vec<Area>, DbError> {
        let areas = sqlx::query_as::<_, Area>(
            "SELECT city, state FROM venues GROUP BY city, state ORDER BY city, state",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(areas)
    }

    /// Venues matching one exact (city, state) pair.
    ///
    /// IS NOT DISTINCT FROM so a NULL city or state matches its own group.
    pub async fn list_for_area(
        &self,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Vec<Venue>, DbError> {
        let venues = sqlx::query_as::<_, Venue>(&format!(
            r#"
            SELECT {VENUE_COLUMNS} FROM venues
            WHERE city IS NOT DISTINCT FROM $1 AND state IS NOT DISTINCT FROM $2
            ORDER BY id
            "#
        ))
        .bind(city)
        .bind(state)
        .fetch_all(self.pool)
        .await?;

        Ok(venues)
    }

    /// Case-insensitive substring search on name.
    pub async fn search(&self, term: &str) -> Result<Vec<Venue>, DbError> {
        let venues = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE name ILIKE '%' || $1 || '%' ORDER BY id"
        ))
        .bind(term)
        .fetch_all(self.pool)
        .await?;

        Ok(venues)
    }

    /// Start times of every show booked at a venue, insertion order.
    pub async fn show_times(&self, venue_id: i64) -> Result<Vec<NaiveDateTime>, DbError> {
        let times = sqlx::query_scalar::<_, NaiveDateTime>(
            "SELECT start_time FROM shows WHERE venue_id = $1 ORDER BY id",
        )
        .bind(venue_id)
        .fetch_all(self.pool)
        .await?;

        Ok(times)
    }

    /// A venue's shows joined with their artist's display fields.
    pub async fn shows_with_artists(&self, venue_id: i64) -> Result<Vec<VenueShowRow>, DbError> {
        let rows = sqlx::query_as::<_, VenueShowRow>(
            r#"
            SELECT s.artist_id,
                   a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(venue_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrite every column from the submitted field set.
    ///
    /// There is no partial patch: absent form fields overwrite with NULL
    /// (or false for the seeking flag), exactly as submitted.
    pub async fn update(&self, id: i64, v: &NewVenue) -> Result<Venue, DbError> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            r#"
            UPDATE venues SET
                name = $2, city = $3, state = $4, address = $5, phone = $6,
                image_link = $7, facebook_link = $8, website = $9,
                genres = $10, seeking_talent = $11, seeking_description = $12
            WHERE id = $1
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&v.name)
        .bind(&v.city)
        .bind(&v.state)
        .bind(&v.address)
        .bind(&v.phone)
        .bind(&v.image_link)
        .bind(&v.facebook_link)
        .bind(&v.website)
        .bind(&v.genres)
        .bind(v.seeking_talent)
        .bind(&v.seeking_description)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "venue",
            id: id.to_string(),
        })?;

        Ok(venue)
    }

    /// Delete a venue; its shows cascade in the store.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "venue",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
