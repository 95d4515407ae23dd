//! Movie catalog records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Movie
// ---------------------------------------------------------------------------

/// A nominated movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier.
    pub id: MovieId,

    /// Award year.
    pub year: i32,

    pub title: String,

    /// Production studios, as a single free-text field.
    pub studios: String,

    /// Credited producers, in credit order. Names are kept verbatim; the
    /// same person spelled two ways counts as two producers.
    pub producers: Vec<String>,

    /// Whether the movie won the award that year.
    pub winner: bool,
}

impl Movie {
    /// Apply a partial update, producing the updated record. The id never changes.
    pub fn apply(&self, update: MovieUpdate) -> Movie {
        Movie {
            id: self.id,
            year: update.year.unwrap_or(self.year),
            title: update.title.unwrap_or_else(|| self.title.clone()),
            studios: update.studios.unwrap_or_else(|| self.studios.clone()),
            producers: update
                .producers
                .unwrap_or_else(|| self.producers.clone()),
            winner: update.winner.unwrap_or(self.winner),
        }
    }
}

/// Newtype for movie IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MovieId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(MovieId)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for new catalog entries. An id is assigned by [`NewMovie::into_movie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producers: Vec<String>,
    pub winner: bool,
}

impl NewMovie {
    pub fn new(year: i32, title: impl Into<String>) -> Self {
        Self {
            year,
            title: title.into(),
            studios: String::new(),
            producers: Vec::new(),
            winner: false,
        }
    }

    pub fn studios(mut self, studios: impl Into<String>) -> Self {
        self.studios = studios.into();
        self
    }

    pub fn producer(mut self, name: impl Into<String>) -> Self {
        self.producers.push(name.into());
        self
    }

    pub fn producers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.producers.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn winner(mut self, winner: bool) -> Self {
        self.winner = winner;
        self
    }

    /// Assign a fresh id and produce the stored record.
    pub fn into_movie(self) -> Movie {
        Movie {
            id: MovieId::new(),
            year: self.year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner: self.winner,
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Partial update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieUpdate {
    pub year: Option<i32>,
    pub title: Option<String>,
    pub studios: Option<String>,
    pub producers: Option<Vec<String>>,
    pub winner: Option<bool>,
}
