//! showbill-core: shared domain layer for the showbill booking site
//!
//! Everything the server and CLI crates both need:
//! - past/upcoming show classification (`classify`)
//! - the offset-free show-time wire format (`timefmt`)
//! - TOML configuration loading (`config`)

pub mod classify;
pub mod config;
pub mod error;
pub mod timefmt;

pub use config::AppConfig;
pub use error::{CoreError, Result};
