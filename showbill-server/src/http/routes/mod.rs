//! Route modules, one per page group
//!
//! Handlers return the view model the template collaborator consumes.
//! Create and delete report outcomes in-band, as notices and status JSON,
//! instead of raising.

pub mod artists;
pub mod health;
pub mod pages;
pub mod shows;
pub mod venues;

use serde::{Deserialize, Serialize};

/// Search form body, shared by the venue and artist search routes
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub search_term: Option<String>,
}

/// Outcome of a create submission. HTTP 200 either way; the notice text is
/// what the page banner renders.
#[derive(Debug, Serialize)]
pub struct Notice {
    pub status: &'static str,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: message.into(),
        }
    }
}

/// Body of a delete response: `{"status": "success"}` or `{"status": "fail"}`
#[derive(Debug, Serialize)]
pub struct DeleteStatus {
    pub status: &'static str,
}

impl DeleteStatus {
    pub fn success() -> Self {
        Self { status: "success" }
    }

    pub fn fail() -> Self {
        Self { status: "fail" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_status_wire_shape() {
        let body = serde_json::to_value(DeleteStatus::success()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "success"}));

        let body = serde_json::to_value(DeleteStatus::fail()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "fail"}));
    }

    #[test]
    fn notice_carries_message() {
        let notice = Notice::failure("An error occurred.");
        assert_eq!(notice.status, "fail");
        assert_eq!(notice.message, "An error occurred.");
    }
}
