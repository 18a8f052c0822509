//! Schema migrations for the booking tables
//!
//! Idempotent CREATE statements, run once at startup (or via the
//! `showbill migrate` subcommand). Shows cascade from their venue and
//! artist: the store owns referential integrity, not the application.

use sqlx::PgPool;

use super::DbError;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id BIGSERIAL PRIMARY KEY,
            name TEXT,
            city TEXT,
            state TEXT,
            address TEXT,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website TEXT,
            genres TEXT[] NOT NULL DEFAULT '{}',
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id BIGSERIAL PRIMARY KEY,
            name TEXT,
            city TEXT,
            state TEXT,
            phone TEXT,
            genres TEXT[] NOT NULL DEFAULT '{}',
            image_link TEXT,
            facebook_link TEXT,
            website TEXT,
            seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id BIGSERIAL PRIMARY KEY,
            venue_id BIGINT NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            artist_id BIGINT NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
            start_time TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(pool)
        .await?;
    // The venue page groups by (city, state) and then requeries per pair
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_area ON venues(city, state)")
        .execute(pool)
        .await?;

    Ok(())
}
