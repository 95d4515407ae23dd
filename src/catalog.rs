//! Catalog operations over a movie store.
//!
//! Sits between the CLI and the store: adds not-found errors, input
//! validation, logging and metrics on top of raw repository calls.

use std::sync::Arc;

use opentelemetry::KeyValue;

use crate::error::{Error, Result};
use crate::ingest::parse_producers;
use crate::model::{Movie, MovieId, MovieUpdate, NewMovie};
use crate::store::MovieRepository;
use crate::telemetry::metrics;

const MIN_YEAR: i32 = 1900;
const MAX_TEXT_LEN: usize = 500;
const MAX_PRODUCERS_LEN: usize = 1000;

/// Raw movie fields as typed by a user. Producers arrive as one string.
#[derive(Debug, Clone, Default)]
pub struct MovieInput {
    pub year: Option<i32>,
    pub title: Option<String>,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: Option<bool>,
}

/// Movie catalog service.
#[derive(Clone)]
pub struct Catalog {
    repository: Arc<dyn MovieRepository>,
}

impl Catalog {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Movie>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: MovieId) -> Result<Movie> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("movie with id {id}")))
    }

    pub async fn by_year(&self, year: i32) -> Result<Vec<Movie>> {
        self.repository.find_by_year(year).await
    }

    pub async fn winners(&self) -> Result<Vec<Movie>> {
        self.repository.find_winners().await
    }

    pub async fn count(&self) -> Result<usize> {
        self.repository.count().await
    }

    /// Store a new movie under a fresh id.
    pub async fn create(&self, new: NewMovie) -> Result<Movie> {
        tracing::debug!(title = %new.title, year = new.year, "creating movie");
        let movie = self.repository.create(new.into_movie()).await?;
        record_mutation("create");
        tracing::info!(id = %movie.id, title = %movie.title, "movie created");
        Ok(movie)
    }

    /// Validate user input and store it as a new movie.
    ///
    /// Every field except `winner` is required.
    pub async fn create_from_input(&self, input: MovieInput) -> Result<Movie> {
        let update = validate(input)?;
        let (Some(year), Some(title), Some(studios), Some(producers)) =
            (update.year, update.title, update.studios, update.producers)
        else {
            return Err(Error::Validation(
                "year, title, studios and producers are required".to_string(),
            ));
        };

        let new = NewMovie::new(year, title)
            .studios(studios)
            .producers(producers)
            .winner(update.winner.unwrap_or(false));
        self.create(new).await
    }

    /// Validate user input and apply it to an existing movie.
    pub async fn update_from_input(&self, id: MovieId, input: MovieInput) -> Result<Movie> {
        let update = validate(input)?;
        self.update(id, update).await
    }

    /// Apply a partial update. Fails with `NotFound` if the movie is gone.
    pub async fn update(&self, id: MovieId, update: MovieUpdate) -> Result<Movie> {
        tracing::debug!(%id, ?update, "updating movie");
        let existing = self.get(id).await?;
        let updated = existing.apply(update);

        let Some(result) = self.repository.update(id, updated).await? else {
            tracing::error!(%id, "movie vanished from store during update");
            return Err(Error::NotFound(format!("movie with id {id}")));
        };

        record_mutation("update");
        tracing::info!(%id, title = %result.title, "movie updated");
        Ok(result)
    }

    pub async fn delete(&self, id: MovieId) -> Result<()> {
        tracing::debug!(%id, "deleting movie");
        if !self.repository.delete(id).await? {
            tracing::warn!(%id, "attempted to delete non-existent movie");
            return Err(Error::NotFound(format!("movie with id {id}")));
        }
        record_mutation("delete");
        tracing::info!(%id, "movie deleted");
        Ok(())
    }

    /// Store a batch of movies, e.g. from a CSV load. Returns how many were stored.
    pub async fn import(&self, movies: Vec<NewMovie>) -> Result<usize> {
        let movies: Vec<Movie> = movies.into_iter().map(NewMovie::into_movie).collect();
        let count = movies.len();
        self.repository.bulk_create(movies).await?;
        metrics::catalog_operations().add(count as u64, &[KeyValue::new("operation", "import")]);
        tracing::info!(count, "imported movies into catalog");
        Ok(count)
    }
}

fn record_mutation(operation: &'static str) {
    metrics::catalog_operations().add(1, &[KeyValue::new("operation", operation)]);
}

fn validate(input: MovieInput) -> Result<MovieUpdate> {
    if let Some(year) = input.year.filter(|y| *y < MIN_YEAR) {
        return Err(Error::Validation(format!(
            "year must be {MIN_YEAR} or later, got {year}"
        )));
    }

    let title = input
        .title
        .map(|t| required_text("title", t, MAX_TEXT_LEN))
        .transpose()?;
    let studios = input
        .studios
        .map(|s| required_text("studios", s, MAX_TEXT_LEN))
        .transpose()?;

    let producers = match input.producers {
        Some(raw) => {
            if raw.len() > MAX_PRODUCERS_LEN {
                return Err(Error::Validation(format!(
                    "producers must be at most {MAX_PRODUCERS_LEN} characters"
                )));
            }
            let names = parse_producers(&raw);
            if names.is_empty() {
                return Err(Error::Validation("producers must not be empty".to_string()));
            }
            Some(names)
        }
        None => None,
    };

    Ok(MovieUpdate {
        year: input.year,
        title,
        studios,
        producers,
        winner: input.winner,
    })
}

fn required_text(field: &str, value: String, max_len: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{field} must not be empty")));
    }
    if trimmed.len() > max_len {
        return Err(Error::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}
