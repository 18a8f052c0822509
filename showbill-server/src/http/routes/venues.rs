//! Venue endpoints
//!
//! One handler per CRUD action, each a single linear request/response
//! transaction: parse the form, hit the store, assemble the page model.
//! Create and delete catch store failures and report them in-band; update
//! lets them propagate to the generic 500 handler.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use showbill_core::classify::{partition_shows, upcoming_shows_count};
use showbill_core::timefmt;

use crate::db::repos::{NewVenue, Venue, VenueRepo, VenueShowRow};
use crate::http::error::ApiError;
use crate::http::forms;
use crate::http::routes::{DeleteStatus, Notice, SearchForm};
use crate::state::AppState;

/// Venue form fields. Every field is optional; a missing field becomes an
/// absent value, not an error.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VenueForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Comma-separated list
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    /// Checkbox; "y" means checked
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Coerce the raw form into the full field set. Nothing is validated;
    /// absent checkboxes read as false and the genre field splits on commas.
    fn into_record(self) -> NewVenue {
        NewVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres: forms::split_genres(self.genres.as_deref()),
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_talent: forms::checkbox(self.seeking_talent.as_deref()),
            seeking_description: self.seeking_description,
        }
    }
}

impl From<Venue> for VenueForm {
    /// Edit-form prefill: the stored record rendered back into form shape.
    fn from(v: Venue) -> Self {
        Self {
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            genres: if v.genres.is_empty() {
                None
            } else {
                Some(v.genres.join(", "))
            },
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            website: v.website,
            seeking_talent: v.seeking_talent.then(|| "y".to_string()),
            seeking_description: v.seeking_description,
        }
    }
}

/// One venue row on the list and search pages
#[derive(Debug, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: Option<String>,
    pub num_upcoming_shows: usize,
}

/// One (city, state) group on the venues page
#[derive(Debug, Serialize)]
pub struct AreaGroup {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<VenueSummary>,
}

/// Search results page model
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

/// One show row on the venue detail page
#[derive(Debug, Serialize)]
pub struct VenueShowEntry {
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<VenueShowRow> for VenueShowEntry {
    fn from(row: VenueShowRow) -> Self {
        Self {
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: timefmt::format_start_time(row.start_time),
        }
    }
}

/// Venue detail page model: every persisted field, both counts, and the
/// show lists partitioned by the read instant
#[derive(Debug, Serialize)]
pub struct VenuePage {
    pub id: i64,
    pub name: Option<String>,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

fn venue_page(venue: Venue, shows: Vec<VenueShowRow>, now: NaiveDateTime) -> VenuePage {
    let (past, upcoming) = partition_shows(shows, now);

    VenuePage {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past.len(),
        upcoming_shows_count: upcoming.len(),
        past_shows: past.into_iter().map(VenueShowEntry::from).collect(),
        upcoming_shows: upcoming.into_iter().map(VenueShowEntry::from).collect(),
    }
}

/// GET /venues - all venues grouped by (city, state)
///
/// Reads run group-first: distinct pairs, then one query per pair, then
/// each venue's live upcoming count from its show times.
async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<AreaGroup>>, ApiError> {
    let repo = VenueRepo::new(state.pool());
    let now = timefmt::now();

    let mut areas = Vec::new();
    for area in repo.list_areas().await? {
        let mut venues = Vec::new();
        for venue in repo
            .list_for_area(area.city.as_deref(), area.state.as_deref())
            .await?
        {
            let times = repo.show_times(venue.id).await?;
            venues.push(VenueSummary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows: upcoming_shows_count(&times, now),
            });
        }
        areas.push(AreaGroup {
            city: area.city,
            state: area.state,
            venues,
        });
    }

    Ok(Json(areas))
}

/// POST /venues/search - case-insensitive substring match on name
async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Json<SearchResults>, ApiError> {
    let term = form.search_term.unwrap_or_default();
    let repo = VenueRepo::new(state.pool());
    let now = timefmt::now();

    let mut data = Vec::new();
    for venue in repo.search(&term).await? {
        let times = repo.show_times(venue.id).await?;
        data.push(VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming_shows_count(&times, now),
        });
    }

    Ok(Json(SearchResults {
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id} - detail page with past/upcoming show partition
async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VenuePage>, ApiError> {
    let repo = VenueRepo::new(state.pool());
    let venue = repo.get(id).await?;
    let shows = repo.shows_with_artists(id).await?;

    Ok(Json(venue_page(venue, shows, timefmt::now())))
}

/// GET /venues/create - empty form model
async fn create_venue_form() -> Json<VenueForm> {
    Json(VenueForm::default())
}

/// POST /venues/create - insert; failures are caught and reported in-band
async fn create_venue(State(state): State<AppState>, Form(form): Form<VenueForm>) -> Json<Notice> {
    let name = form.name.clone().unwrap_or_default();

    match VenueRepo::new(state.pool()).create(&form.into_record()).await {
        Ok(venue) => {
            tracing::info!(id = venue.id, "venue listed");
            Json(Notice::success(format!(
                "Venue {name} was successfully listed!"
            )))
        }
        Err(err) => {
            tracing::error!(error = %err, "venue create failed");
            Json(Notice::failure(format!(
                "An error occurred. Venue {name} could not be listed."
            )))
        }
    }
}

/// GET /venues/{id}/edit - current record as form prefill
async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VenueForm>, ApiError> {
    let venue = VenueRepo::new(state.pool()).get(id).await?;
    Ok(Json(VenueForm::from(venue)))
}

/// POST /venues/{id}/edit - full overwrite, then redirect to the detail page
///
/// No catch on this path: a store failure propagates to the 500 handler.
async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> Result<Redirect, ApiError> {
    VenueRepo::new(state.pool())
        .update(id, &form.into_record())
        .await?;

    Ok(Redirect::to(&format!("/venues/{id}")))
}

/// DELETE /venues/{id} - status JSON, success or fail, never a page
async fn delete_venue(State(state): State<AppState>, Path(id): Path<i64>) -> Json<DeleteStatus> {
    match VenueRepo::new(state.pool()).delete(id).await {
        Ok(()) => {
            tracing::info!(id, "venue deleted");
            Json(DeleteStatus::success())
        }
        Err(err) => {
            tracing::error!(error = %err, id, "venue delete failed");
            Json(DeleteStatus::fail())
        }
    }
}

/// Venue routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(update_venue))
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

    fn sample_venue() -> Venue {
        Venue {
            id: 7,
            name: Some("The Dueling Pianos Bar".into()),
            city: Some("New York".into()),
            state: Some("NY".into()),
            address: Some("335 Delancey Street".into()),
            phone: Some("914-003-1132".into()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/theduelingpianos".into()),
            website: None,
            genres: vec!["Classical".into(), "R&B".into(), "Hip-Hop".into()],
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn form_coercion_defaults() {
        let record = VenueForm::default().into_record();
        assert_eq!(record.name, None);
        assert!(record.genres.is_empty());
        assert!(!record.seeking_talent);
    }

    #[test]
    fn form_coercion_checkbox_and_genres() {
        let form = VenueForm {
            name: Some("Park Square Live Music & Coffee".into()),
            genres: Some("Rock n Roll, Jazz, Classical, Folk".into()),
            seeking_talent: Some("y".into()),
            ..Default::default()
        };
        let record = form.into_record();
        assert_eq!(
            record.genres,
            vec!["Rock n Roll", "Jazz", "Classical", "Folk"]
        );
        assert!(record.seeking_talent);
    }

    #[test]
    fn absent_checkbox_resets_flag() {
        let form = VenueForm {
            seeking_talent: None,
            ..Default::default()
        };
        assert!(!form.into_record().seeking_talent);
    }

    #[test]
    fn edit_prefill_round_trips() {
        let form = VenueForm::from(sample_venue());
        assert_eq!(form.genres.as_deref(), Some("Classical, R&B, Hip-Hop"));
        assert_eq!(form.seeking_talent, None);

        let record = form.into_record();
        assert_eq!(record.genres, vec!["Classical", "R&B", "Hip-Hop"]);
        assert!(!record.seeking_talent);
    }

    #[test]
    fn detail_page_partitions_and_counts() {
        let shows = vec![
            VenueShowRow {
                artist_id: 1,
                artist_name: Some("Guns N Petals".into()),
                artist_image_link: None,
                start_time: t(1, 20),
            },
            VenueShowRow {
                artist_id: 2,
                artist_name: Some("The Wild Sax Band".into()),
                artist_image_link: None,
                start_time: t(9, 21),
            },
        ];

        let page = venue_page(sample_venue(), shows, t(5, 12));
        assert_eq!(page.past_shows_count, 1);
        assert_eq!(page.upcoming_shows_count, 1);
        assert_eq!(page.past_shows[0].artist_id, 1);
        assert_eq!(page.past_shows[0].start_time, "2026-08-01T20:00:00");
        assert_eq!(page.upcoming_shows[0].artist_id, 2);
        assert_eq!(page.upcoming_shows[0].start_time, "2026-08-09T21:00:00");
    }

    #[test]
    fn detail_page_projects_all_fields() {
        let page = venue_page(sample_venue(), vec![], t(5, 12));
        assert_eq!(page.id, 7);
        assert_eq!(page.name.as_deref(), Some("The Dueling Pianos Bar"));
        assert_eq!(page.city.as_deref(), Some("New York"));
        assert_eq!(page.state.as_deref(), Some("NY"));
        assert_eq!(page.address.as_deref(), Some("335 Delancey Street"));
        assert!(!page.seeking_talent);
        assert_eq!(page.past_shows_count, 0);
        assert_eq!(page.upcoming_shows_count, 0);
    }
}
