//! Error types for award-intervals.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    /// An interval fact would break its ordering invariant. Signals bad
    /// upstream data (e.g. two wins in one year) or a derivation defect.
    #[error(
        "invalid interval for {producer}: {previous_win} -> {following_win} (interval {interval})"
    )]
    InvalidInterval {
        producer: String,
        previous_win: i32,
        following_win: i32,
        interval: i32,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Ingest(String),

    #[error("Failed to parse CSV file. {count} invalid rows found:\n{}", .errors.join("\n"))]
    InvalidRows { count: usize, errors: Vec<String> },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
