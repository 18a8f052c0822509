//! Repository implementations for database access
//!
//! One repository per record type, borrowing the pool per call. Reads that
//! the templates consume come back pre-joined with their display fields;
//! writes are single statements (cascade lives in the schema).

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{Artist, ArtistRef, ArtistRepo, ArtistShowRow, NewArtist};
pub use shows::{NewShow, Show, ShowListing, ShowRepo};
pub use venues::{Area, NewVenue, Venue, VenueRepo, VenueShowRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
