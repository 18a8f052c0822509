//! showbill-server: HTTP server for the showbill booking site
//!
//! Venues and artists are bookable entities; a show pairs one venue with
//! one artist at a start time. The server exposes the CRUD surface over
//! PostgreSQL and returns, for each page, the view model the template
//! collaborator consumes.

pub mod db;
pub mod http;
pub mod state;

pub use http::{run_server, ApiError, ServerConfig};
pub use state::AppState;
