//! `MovieRepository` over the `movies` table.
//!
//! Rows are returned in insertion order (`seq`), matching the in-memory
//! store, so producers are first seen in the same order on either backend.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Movie, MovieId};
use crate::store::MovieRepository;

const SELECT_MOVIES: &str = "SELECT id, year, title, studios, producers, winner FROM movies";

#[async_trait]
impl MovieRepository for super::Db {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        let rows: Vec<MovieRow> = sqlx::query_as(&format!("{SELECT_MOVIES} ORDER BY seq"))
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
        let row: Option<MovieRow> = sqlx::query_as(&format!("{SELECT_MOVIES} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(self.pool())
            .await?;
        Ok(row.map(Movie::from))
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<Movie>> {
        let rows: Vec<MovieRow> =
            sqlx::query_as(&format!("{SELECT_MOVIES} WHERE year = $1 ORDER BY seq"))
                .bind(year)
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_winners(&self) -> Result<Vec<Movie>> {
        let rows: Vec<MovieRow> = sqlx::query_as(&format!("{SELECT_MOVIES} WHERE winner ORDER BY seq"))
            .fetch_all(self.pool())
            .await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn create(&self, movie: Movie) -> Result<Movie> {
        insert_movie(self.pool(), &movie).await?;
        Ok(movie)
    }

    async fn update(&self, id: MovieId, movie: Movie) -> Result<Option<Movie>> {
        let rows_affected = sqlx::query(
            "UPDATE movies SET year = $1, title = $2, studios = $3, producers = $4, winner = $5
             WHERE id = $6",
        )
        .bind(movie.year)
        .bind(&movie.title)
        .bind(&movie.studios)
        .bind(&movie.producers)
        .bind(movie.winner)
        .bind(id.0)
        .execute(self.pool())
        .await?
        .rows_affected();

        Ok((rows_affected > 0).then_some(movie))
    }

    async fn delete(&self, id: MovieId) -> Result<bool> {
        let rows_affected = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id.0)
            .execute(self.pool())
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }

    async fn count(&self) -> Result<usize> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(self.pool())
            .await?;
        Ok(row.0 as usize)
    }

    /// All-or-nothing: the batch runs in one transaction.
    async fn bulk_create(&self, movies: Vec<Movie>) -> Result<()> {
        let mut tx = self.pool().begin().await?;
        for movie in &movies {
            insert_movie(&mut *tx, movie).await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

/// Insert or replace one movie, keeping its original `seq` on replace.
async fn insert_movie<'e, E>(executor: E, movie: &Movie) -> Result<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO movies (id, year, title, studios, producers, winner)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (id) DO UPDATE SET
            year = EXCLUDED.year, title = EXCLUDED.title, studios = EXCLUDED.studios,
            producers = EXCLUDED.producers, winner = EXCLUDED.winner",
    )
    .bind(movie.id.0)
    .bind(movie.year)
    .bind(&movie.title)
    .bind(&movie.studios)
    .bind(&movie.producers)
    .bind(movie.winner)
    .execute(executor)
    .await?;
    Ok(())
}

/// Internal row type for sqlx::FromRow.
#[derive(sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    year: i32,
    title: String,
    studios: String,
    producers: Vec<String>,
    winner: bool,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: MovieId(row.id),
            year: row.year,
            title: row.title,
            studios: row.studios,
            producers: row.producers,
            winner: row.winner,
        }
    }
}
