//! Artist endpoints
//!
//! Same handler shapes as the venue endpoints; the listing page is flat
//! (no area grouping) and the detail page swaps in venue display fields.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use showbill_core::classify::{partition_shows, upcoming_shows_count};
use showbill_core::timefmt;

use crate::db::repos::{Artist, ArtistRepo, ArtistShowRow, NewArtist};
use crate::http::error::ApiError;
use crate::http::forms;
use crate::http::routes::{DeleteStatus, Notice, SearchForm};
use crate::state::AppState;

/// Artist form fields; optional throughout, coerced rather than validated.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ArtistForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    /// Comma-separated list
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    /// Checkbox; "y" means checked
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    fn into_record(self) -> NewArtist {
        NewArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: forms::split_genres(self.genres.as_deref()),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_venue: forms::checkbox(self.seeking_venue.as_deref()),
            seeking_description: self.seeking_description,
        }
    }
}

impl From<Artist> for ArtistForm {
    fn from(a: Artist) -> Self {
        Self {
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            genres: if a.genres.is_empty() {
                None
            } else {
                Some(a.genres.join(", "))
            },
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            website: a.website,
            seeking_venue: a.seeking_venue.then(|| "y".to_string()),
            seeking_description: a.seeking_description,
        }
    }
}

/// One artist row on the listing page
#[derive(Debug, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: Option<String>,
}

/// One artist row in search results, with its live upcoming count
#[derive(Debug, Serialize)]
pub struct ArtistMatch {
    pub id: i64,
    pub name: Option<String>,
    pub num_upcoming_shows: usize,
}

/// Search results page model
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<ArtistMatch>,
}

/// One show row on the artist detail page
#[derive(Debug, Serialize)]
pub struct ArtistShowEntry {
    pub venue_id: i64,
    pub venue_name: Option<String>,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ArtistShowRow> for ArtistShowEntry {
    fn from(row: ArtistShowRow) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            start_time: timefmt::format_start_time(row.start_time),
        }
    }
}

/// Artist detail page model
#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub id: i64,
    pub name: Option<String>,
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

fn artist_page(artist: Artist, shows: Vec<ArtistShowRow>, now: NaiveDateTime) -> ArtistPage {
    let (past, upcoming) = partition_shows(shows, now);

    ArtistPage {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past.len(),
        upcoming_shows_count: upcoming.len(),
        past_shows: past.into_iter().map(ArtistShowEntry::from).collect(),
        upcoming_shows: upcoming.into_iter().map(ArtistShowEntry::from).collect(),
    }
}

/// GET /artists - flat id/name listing
async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<ArtistSummary>>, ApiError> {
    let artists = ArtistRepo::new(state.pool())
        .list()
        .await?
        .into_iter()
        .map(|a| ArtistSummary {
            id: a.id,
            name: a.name,
        })
        .collect();

    Ok(Json(artists))
}

/// POST /artists/search - case-insensitive substring match on name
async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults>, ApiError> {
    let term = form.search_term.unwrap_or_default();
    let repo = ArtistRepo::new(state.pool());
    let now = timefmt::now();

    let mut data = Vec::new();
    for artist in repo.search(&term).await? {
        let times = repo.show_times(artist.id).await?;
        data.push(ArtistMatch {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows: upcoming_shows_count(&times, now),
        });
    }

    Ok(Json(SearchResults {
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id} - detail page with past/upcoming show partition
async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtistPage>, ApiError> {
    let repo = ArtistRepo::new(state.pool());
    let artist = repo.get(id).await?;
    let shows = repo.shows_with_venues(id).await?;

    Ok(Json(artist_page(artist, shows, timefmt::now())))
}

/// GET /artists/create - empty form model
async fn create_artist_form() -> Json<ArtistForm> {
    Json(ArtistForm::default())
}

/// POST /artists/create - insert; failures are caught and reported in-band
async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Json<Notice> {
    let name = form.name.clone().unwrap_or_default();

    match ArtistRepo::new(state.pool())
        .create(&form.into_record())
        .await
    {
        Ok(artist) => {
            tracing::info!(id = artist.id, "artist listed");
            Json(Notice::success(format!(
                "Artist {name} was successfully listed!"
            )))
        }
        Err(err) => {
            tracing::error!(error = %err, "artist create failed");
            Json(Notice::failure(format!(
                "An error occurred. Artist {name} could not be listed."
            )))
        }
    }
}

/// GET /artists/{id}/edit - current record as form prefill
async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtistForm>, ApiError> {
    let artist = ArtistRepo::new(state.pool()).get(id).await?;
    Ok(Json(ArtistForm::from(artist)))
}

/// POST /artists/{id}/edit - full overwrite, then redirect to the detail page
async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect, ApiError> {
    ArtistRepo::new(state.pool())
        .update(id, &form.into_record())
        .await?;

    Ok(Redirect::to(&format!("/artists/{id}")))
}

/// DELETE /artists/{id} - status JSON, success or fail
async fn delete_artist(State(state): State<AppState>, Path(id): Path<i64>) -> Json<DeleteStatus> {
    match ArtistRepo::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(id, "artist deleted");
            Json(DeleteStatus::success())
        }
        Err(err) => {
            tracing::error!(error = %err, id, "artist delete failed");
            Json(DeleteStatus::fail())
        }
    }
}

/// Artist routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist).delete(delete_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(update_artist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, day)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample_artist() -> Artist {
        Artist {
            id: 4,
            name: Some("Guns N Petals".into()),
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            phone: Some("326-123-5000".into()),
            genres: vec!["Rock n Roll".into()],
            image_link: None,
            facebook_link: Some("https://www.facebook.com/GunsNPetals".into()),
            website: Some("https://www.gunsnpetalsband.com".into()),
            seeking_venue: true,
            seeking_description: Some("Looking for shows to perform at".into()),
        }
    }

    #[test]
    fn form_coercion_checkbox() {
        let form = ArtistForm {
            seeking_venue: Some("y".into()),
            ..Default::default()
        };
        assert!(form.into_record().seeking_venue);

        let form = ArtistForm {
            seeking_venue: Some("on".into()),
            ..Default::default()
        };
        assert!(!form.into_record().seeking_venue);
    }

    #[test]
    fn edit_prefill_keeps_seeking_state() {
        let form = ArtistForm::from(sample_artist());
        assert_eq!(form.seeking_venue.as_deref(), Some("y"));
        assert_eq!(form.genres.as_deref(), Some("Rock n Roll"));
    }

    #[test]
    fn detail_page_partitions_and_counts() {
        let shows = vec![
            ArtistShowRow {
                venue_id: 1,
                venue_name: Some("The Musical Hop".into()),
                venue_image_link: None,
                start_time: t(2, 20),
            },
            ArtistShowRow {
                venue_id: 3,
                venue_name: Some("Park Square Live Music & Coffee".into()),
                venue_image_link: None,
                start_time: t(8, 20),
            },
            ArtistShowRow {
                venue_id: 3,
                venue_name: Some("Park Square Live Music & Coffee".into()),
                venue_image_link: None,
                start_time: t(9, 20),
            },
        ];

        let page = artist_page(sample_artist(), shows, t(5, 12));
        assert_eq!(page.past_shows_count, 1);
        assert_eq!(page.upcoming_shows_count, 2);
        assert_eq!(page.past_shows[0].venue_id, 1);
        assert_eq!(page.upcoming_shows[0].start_time, "2026-08-08T20:00:00");
        assert!(page.seeking_venue);
    }
}
