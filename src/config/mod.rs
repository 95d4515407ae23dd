//! Typed configuration from environment variables.
//!
//! Loads once at startup. The database URL is optional here and only
//! demanded by commands that talk to Postgres; it is wrapped in
//! secrecy::SecretString so it never shows up in logs.

pub mod secrets;

use crate::error::{Error, Result};
use secrecy::SecretString;
use std::path::PathBuf;

pub const DEFAULT_CSV_FILE_PATH: &str = "./data/Movielist.csv";

#[derive(Debug)]
pub struct Config {
    pub csv_file_path: PathBuf,
    pub database_url: Option<SecretString>,
    pub otel_endpoint: Option<String>,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            csv_file_path: optional_var("CSV_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE_PATH)),
            database_url: optional_var("DATABASE_URL").map(SecretString::from),
            otel_endpoint: optional_var("OTEL_ENDPOINT"),
            log_level: optional_var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            environment: optional_var("APP_ENV").unwrap_or_else(|| "development".to_string()),
        })
    }

    /// The database URL, or a config error naming the missing variable.
    pub fn require_database_url(&self) -> Result<&SecretString> {
        self.database_url.as_ref().ok_or_else(|| {
            Error::Config("required environment variable DATABASE_URL is not set".to_string())
        })
    }
}

/// Unset and empty both count as absent.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
