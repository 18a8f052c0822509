//! Show repository
//!
//! A show has no identity beyond its (venue, artist, start_time)
//! association: no edit route, no per-show lookup. Create and list-all is
//! the whole surface.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Show record from database
#[derive(Debug, Clone, FromRow)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// Field set for insert
#[derive(Debug, Clone)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show joined with both parents' display fields, for the shows page
#[derive(Debug, Clone, FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: Option<String>,
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a show. The foreign keys are enforced by the store; a dangling
    /// venue or artist id comes back as an opaque constraint error.
    pub async fn create(&self, s: &NewShow) -> Result<Show, DbError> {
        let show = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (venue_id, artist_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, venue_id, artist_id, start_time
            "#,
        )
        .bind(s.venue_id)
        .bind(s.artist_id)
        .bind(s.start_time)
        .fetch_one(self.pool)
        .await?;

        Ok(show)
    }

    /// Every show, joined with venue and artist display fields.
    pub async fn list_all(&self) -> Result<Vec<ShowListing>, DbError> {
        let rows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT s.venue_id,
                   v.name AS venue_name,
                   s.artist_id,
                   a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            JOIN artists a ON a.id = s.artist_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
