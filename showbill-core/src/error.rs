/// Structured error types for showbill-core.
///
/// Uses `thiserror` for composable library errors. The binary crate
/// (showbill-cli) wraps these in `anyhow` for convenience.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for showbill-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but is not valid TOML for the expected shape
    #[error("Failed to parse config file {path:?}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Show start time not in an accepted wire format
    #[error("Invalid start time '{value}': expected YYYY-MM-DDTHH:MM:SS")]
    InvalidStartTime { value: String },
}

/// Result type alias for showbill-core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid start time error
    pub fn invalid_start_time(value: impl Into<String>) -> Self {
        Self::InvalidStartTime {
            value: value.into(),
        }
    }
}
