//! CSV ingestion of the movie list.
//!
//! The file is `;`-separated with the header
//! `year;title;studios;producers;winner`. Producers inside a cell are
//! separated by `,` or ` and `. One bad row rejects the whole file; every
//! bad row is reported, not just the first.

use std::path::Path;

use opentelemetry::KeyValue;

use crate::error::{Error, Result};
use crate::model::NewMovie;
use crate::telemetry::metrics;

const EXPECTED_HEADERS: [&str; 5] = ["year", "title", "studios", "producers", "winner"];
const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Load and validate every movie in the file at `path`.
pub fn load_movies_from_csv(path: impl AsRef<Path>) -> Result<Vec<NewMovie>> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading movies from CSV");

    let absolute = std::path::absolute(path)?;
    if !absolute.exists() {
        return Err(Error::Ingest(format!(
            "CSV file not found: {}",
            absolute.display()
        )));
    }

    let content = std::fs::read_to_string(&absolute)?;
    let result = parse_movies(&content);

    let outcome = if result.is_ok() { "ok" } else { "error" };
    let loaded = result.as_ref().map(Vec::len).unwrap_or(0);
    metrics::movies_loaded().add(loaded as u64, &[KeyValue::new("result", outcome)]);

    if let Ok(ref movies) = result {
        tracing::info!(count = movies.len(), "loaded movies from CSV");
    }
    result
}

/// Parse CSV text already read into memory.
pub fn parse_movies(content: &str) -> Result<Vec<NewMovie>> {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first() else {
        return Err(Error::Ingest("CSV file is empty".to_string()));
    };

    if !headers_match(header) {
        return Err(Error::Ingest(format!(
            "Invalid CSV headers. Expected: {}",
            EXPECTED_HEADERS.join(", ")
        )));
    }

    let mut movies = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (i, line) in rows.iter().enumerate() {
        let line_no = i + 2;
        match parse_row(line) {
            Ok(movie) => movies.push(movie),
            Err(reason) => {
                tracing::warn!(line = line_no, %reason, "failed to parse CSV row");
                errors.push(format!("Line {line_no}: {reason}"));
            }
        }
    }

    if !errors.is_empty() {
        return Err(Error::InvalidRows {
            count: errors.len(),
            errors,
        });
    }

    Ok(movies)
}

/// Split a producers cell on `,` and `" and "`, trimming and dropping empties.
pub fn parse_producers(raw: &str) -> Vec<String> {
    raw.split(',')
        .flat_map(|part| part.split(" and "))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn headers_match(line: &str) -> bool {
    let actual: Vec<&str> = line.split(';').collect();
    actual.len() == EXPECTED_HEADERS.len()
        && actual
            .iter()
            .zip(EXPECTED_HEADERS)
            .all(|(a, e)| a.eq_ignore_ascii_case(e))
}

fn parse_row(line: &str) -> std::result::Result<NewMovie, String> {
    let columns: Vec<&str> = line.split(';').collect();
    let [year, title, studios, producers, winner] = columns.as_slice() else {
        return Err(format!("Expected 5 columns, got {}", columns.len()));
    };

    let year = year
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(|| format!("Invalid year: {year}"))?;

    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }

    let studios = studios.trim();
    if studios.is_empty() {
        return Err("Studios is required".to_string());
    }

    let producers = parse_producers(producers);
    if producers.is_empty() {
        return Err("At least one producer is required".to_string());
    }

    Ok(NewMovie::new(year, title)
        .studios(studios)
        .producers(producers)
        .winner(winner.trim().eq_ignore_ascii_case("yes")))
}
