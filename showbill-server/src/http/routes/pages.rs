//! Home page

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Home page model; the landing page itself is static.
#[derive(Serialize)]
pub struct HomePage {
    pub title: &'static str,
}

/// GET /
async fn home() -> Json<HomePage> {
    Json(HomePage { title: "Showbill" })
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}
