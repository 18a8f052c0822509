//! Show endpoints
//!
//! Shows are create-and-list only; there is no edit or delete route.
//! Form fields arrive as raw strings, and a malformed id or start time
//! takes the same caught-failure path as a store constraint violation.

use axum::extract::State;
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};

use showbill_core::timefmt;

use crate::db::repos::{NewShow, ShowListing, ShowRepo};
use crate::http::error::ApiError;
use crate::http::routes::Notice;
use crate::state::AppState;

/// Show form fields, raw strings throughout
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ShowForm {
    pub venue_id: Option<String>,
    pub artist_id: Option<String>,
    pub start_time: Option<String>,
}

impl ShowForm {
    fn into_record(self) -> Result<NewShow, String> {
        let venue_id = parse_id("venue_id", self.venue_id.as_deref())?;
        let artist_id = parse_id("artist_id", self.artist_id.as_deref())?;
        let start_time = timefmt::parse_start_time(self.start_time.as_deref().unwrap_or_default())
            .map_err(|e| e.to_string())?;

        Ok(NewShow {
            venue_id,
            artist_id,
            start_time,
        })
    }
}

fn parse_id(field: &str, value: Option<&str>) -> Result<i64, String> {
    let value = value.unwrap_or_default().trim();
    value
        .parse::<i64>()
        .map_err(|_| format!("{field} '{value}' is not an integer"))
}

/// One row on the shows page
#[derive(Debug, Serialize)]
pub struct ShowEntry {
    pub venue_id: i64,
    pub venue_name: Option<String>,
    pub artist_id: i64,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowEntry {
    fn from(row: ShowListing) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: timefmt::format_start_time(row.start_time),
        }
    }
}

/// GET /shows - every show with both parents' display fields
async fn list_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowEntry>>, ApiError> {
    let shows = ShowRepo::new(state.pool())
        .list_all()
        .await?
        .into_iter()
        .map(ShowEntry::from)
        .collect();

    Ok(Json(shows))
}

/// GET /shows/create - empty form model
async fn create_show_form() -> Json<ShowForm> {
    Json(ShowForm::default())
}

/// POST /shows/create - insert; any failure reports the generic notice
async fn create_show(State(state): State<AppState>, Form(form): Form<ShowForm>) -> Json<Notice> {
    let record = match form.into_record() {
        Ok(record) => record,
        Err(reason) => {
            tracing::error!(%reason, "show form rejected by coercion");
            return Json(Notice::failure(
                "An error occurred. Show could not be listed.",
            ));
        }
    };

    match ShowRepo::new(state.pool()).create(&record).await {
        Ok(show) => {
            tracing::info!(id = show.id, "show listed");
            Json(Notice::success("Show was successfully listed!"))
        }
        Err(err) => {
            tracing::error!(error = %err, "show create failed");
            Json(Notice::failure(
                "An error occurred. Show could not be listed.",
            ))
        }
    }
}

/// Show routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn t() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[test]
    fn form_parses_complete_submission() {
        let form = ShowForm {
            venue_id: Some("3".into()),
            artist_id: Some("12".into()),
            start_time: Some("2026-09-01T20:00:00".into()),
        };
        let record = form.into_record().unwrap();
        assert_eq!(record.venue_id, 3);
        assert_eq!(record.artist_id, 12);
        assert_eq!(record.start_time, t());
    }

    #[test]
    fn form_accepts_space_separated_time() {
        let form = ShowForm {
            venue_id: Some("3".into()),
            artist_id: Some("12".into()),
            start_time: Some("2026-09-01 20:00:00".into()),
        };
        assert_eq!(form.into_record().unwrap().start_time, t());
    }

    #[test]
    fn missing_fields_fail_coercion() {
        assert!(ShowForm::default().into_record().is_err());
    }

    #[test]
    fn malformed_id_fails_coercion() {
        let form = ShowForm {
            venue_id: Some("the big one".into()),
            artist_id: Some("12".into()),
            start_time: Some("2026-09-01T20:00:00".into()),
        };
        let err = form.into_record().unwrap_err();
        assert!(err.contains("venue_id"));
    }

    #[test]
    fn listing_formats_start_time() {
        let entry = ShowEntry::from(ShowListing {
            venue_id: 1,
            venue_name: Some("The Musical Hop".into()),
            artist_id: 4,
            artist_name: Some("Guns N Petals".into()),
            artist_image_link: None,
            start_time: t(),
        });
        assert_eq!(entry.start_time, "2026-09-01T20:00:00");
    }
}
