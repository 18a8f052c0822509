//! TOML configuration for the showbill binary.
//!
//! The whole deployment surface is a connection string, a secret key, and
//! a bind address, read from a single config file:
//!
//! ```toml
//! secret_key = "change-me"
//!
//! [database]
//! url = "postgres://localhost/showbill"
//!
//! [server]
//! bind = "127.0.0.1:3030"
//! ```
//!
//! Loaded from `--config <path>` or `~/.showbill/config.toml`; every field
//! has a built-in default so a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reserved for the session layer the template collaborator needs;
    /// the JSON notice surface does not sign anything itself.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    /// Address the HTTP server binds to
    pub bind: String,
}

fn default_secret_key() -> String {
    "dev-secret".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            database: DatabaseConfig::default(),
            server: ServerSection::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/showbill".to_string(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3030".to_string(),
        }
    }
}

impl AppConfig {
    /// Default config file path: ~/.showbill/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".showbill/config.toml")
    }

    /// Load config from an explicit path. The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CoreError::config_parse(path, e.to_string()))
    }

    /// Load config from `path` (or the default location), falling back to
    /// built-in defaults when the file is absent.
    ///
    /// A file that exists but fails to parse is still an error: silently
    /// ignoring a broken config would mask a misconfigured deployment.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database.url, "postgres://localhost/showbill");
        assert_eq!(config.server.bind, "127.0.0.1:3030");
        assert_eq!(config.secret_key, "dev-secret");
    }

    #[test]
    fn parses_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
secret_key = "s3kr1t"

[database]
url = "postgres://db.internal/showbill_prod"

[server]
bind = "0.0.0.0:8080"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.secret_key, "s3kr1t");
        assert_eq!(config.database.url, "postgres://db.internal/showbill_prod");
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[database]
url = "postgres://elsewhere/showbill"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.database.url, "postgres://elsewhere/showbill");
        assert_eq!(config.server.bind, "127.0.0.1:3030");
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = AppConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3030");
    }

    #[test]
    fn broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[database\nurl = ").unwrap();

        let err = AppConfig::load_or_default(Some(file.path())).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
    }
}
