//! In-memory movie store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::model::{Movie, MovieId};

use super::MovieRepository;

/// Insertion-ordered map of movies behind a `RwLock`.
///
/// Iteration follows insertion order. Replacing a movie keeps its slot;
/// deleting and re-creating moves it to the end.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    order: Vec<MovieId>,
    movies: HashMap<MovieId, Movie>,
}

impl Inner {
    fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.order.iter().filter_map(|id| self.movies.get(id))
    }

    fn insert(&mut self, movie: Movie) {
        if self.movies.insert(movie.id, movie.clone()).is_none() {
            self.order.push(movie.id);
        }
    }
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every stored movie.
    pub fn clear(&self) -> Result<()> {
        let mut inner = self.write()?;
        inner.order.clear();
        inner.movies.clear();
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|e| Error::Other(format!("movie store lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|e| Error::Other(format!("movie store lock poisoned: {e}")))
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        Ok(self.read()?.iter().cloned().collect())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.read()?.movies.get(&id).cloned())
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<Movie>> {
        Ok(self
            .read()?
            .iter()
            .filter(|m| m.year == year)
            .cloned()
            .collect())
    }

    async fn find_winners(&self) -> Result<Vec<Movie>> {
        Ok(self.read()?.iter().filter(|m| m.winner).cloned().collect())
    }

    async fn create(&self, movie: Movie) -> Result<Movie> {
        self.write()?.insert(movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: MovieId, movie: Movie) -> Result<Option<Movie>> {
        let mut inner = self.write()?;
        match inner.movies.get_mut(&id) {
            Some(slot) => {
                *slot = movie.clone();
                Ok(Some(movie))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: MovieId) -> Result<bool> {
        let mut inner = self.write()?;
        if inner.movies.remove(&id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|existing| *existing != id);
        Ok(true)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.movies.len())
    }

    async fn bulk_create(&self, movies: Vec<Movie>) -> Result<()> {
        let mut inner = self.write()?;
        for movie in movies {
            inner.insert(movie);
        }
        Ok(())
    }
}
