//! Connection configuration loaded from environment variables.
//!
//! # Responsibility
//! - Resolve the single `DATABASE_URL` value that selects the store endpoint.
//! - Load `.env` exactly once per process, without overriding real env vars.
//!
//! # Invariants
//! - `DATABASE_URL` is the only externally visible configuration value.
//! - Accepted forms: bare file path, `sqlite://<path>`, or `:memory:`.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable naming the store endpoint.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    // Missing .env files are fine; real environment always wins.
    let _ = dotenv();
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingDatabaseUrl,
    UnsupportedScheme(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDatabaseUrl => {
                write!(f, "{DATABASE_URL_VAR} is not set or empty")
            }
            Self::UnsupportedScheme(url) => {
                write!(f, "unsupported database url `{url}`; expected a sqlite path")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// SQLite database path as accepted by `db::open_db`.
    pub database_path: String,
}

impl DbConfig {
    /// Reads configuration from the process environment (and `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        let raw = env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;
        Ok(Self {
            database_path: parse_database_url(&raw)?,
        })
    }
}

fn parse_database_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingDatabaseUrl);
    }
    if let Some(path) = trimmed.strip_prefix("sqlite://") {
        if path.is_empty() {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        return Ok(path.to_string());
    }
    if trimmed.contains("://") {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse_database_url, ConfigError};

    #[test]
    fn accepts_bare_path_and_memory() {
        assert_eq!(
            parse_database_url("/tmp/catalog.sqlite3").unwrap(),
            "/tmp/catalog.sqlite3"
        );
        assert_eq!(parse_database_url(":memory:").unwrap(), ":memory:");
    }

    #[test]
    fn strips_sqlite_scheme() {
        assert_eq!(
            parse_database_url("sqlite:///var/lib/edubase.db").unwrap(),
            "/var/lib/edubase.db"
        );
    }

    #[test]
    fn rejects_foreign_schemes_and_blank_values() {
        assert!(matches!(
            parse_database_url("mysql://root@localhost/dados"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            parse_database_url("   "),
            Err(ConfigError::MissingDatabaseUrl)
        ));
        assert!(matches!(
            parse_database_url("sqlite://"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
