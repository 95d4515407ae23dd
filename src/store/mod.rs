//! Movie record storage.
//!
//! `MovieRepository` is the only thing the rest of the crate knows about
//! storage. Reads hand back owned copies, so callers can never alias the
//! store's own state.

pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Movie, MovieId};

pub use memory::InMemoryMovieRepository;

/// Backend-agnostic movie store.
///
/// Implemented by [`InMemoryMovieRepository`] and by the Postgres
/// [`Db`](crate::db::Db).
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Every stored movie, in insertion order.
    async fn find_all(&self) -> Result<Vec<Movie>>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>>;

    async fn find_by_year(&self, year: i32) -> Result<Vec<Movie>>;

    /// Movies flagged as winners, in insertion order.
    async fn find_winners(&self) -> Result<Vec<Movie>>;

    async fn create(&self, movie: Movie) -> Result<Movie>;

    /// Replace a stored movie. Returns `None` if `id` is unknown.
    async fn update(&self, id: MovieId, movie: Movie) -> Result<Option<Movie>>;

    /// Returns whether anything was deleted.
    async fn delete(&self, id: MovieId) -> Result<bool>;

    async fn count(&self) -> Result<usize>;

    async fn bulk_create(&self, movies: Vec<Movie>) -> Result<()>;
}
