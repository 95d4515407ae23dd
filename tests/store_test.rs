//! Tests for the in-memory movie store.

use award_intervals::model::{Movie, MovieId, NewMovie};
use award_intervals::store::{InMemoryMovieRepository, MovieRepository};

fn movie(year: i32, title: &str, winner: bool) -> Movie {
    NewMovie::new(year, title)
        .studios("Studio")
        .producer("Producer")
        .winner(winner)
        .into_movie()
}

fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}

#[tokio::test]
async fn find_all_keeps_insertion_order() {
    let repo = InMemoryMovieRepository::new();
    for (year, title) in [(1999, "C"), (1980, "A"), (1990, "B")] {
        repo.create(movie(year, title, false)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(titles(&all), vec!["C", "A", "B"]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn find_winners_and_by_year_filter() {
    let repo = InMemoryMovieRepository::new();
    repo.bulk_create(vec![
        movie(1980, "Won 1980", true),
        movie(1980, "Lost 1980", false),
        movie(1981, "Won 1981", true),
    ])
    .await
    .unwrap();

    let winners = repo.find_winners().await.unwrap();
    assert_eq!(titles(&winners), vec!["Won 1980", "Won 1981"]);

    let in_1980 = repo.find_by_year(1980).await.unwrap();
    assert_eq!(titles(&in_1980), vec!["Won 1980", "Lost 1980"]);

    assert!(repo.find_by_year(2000).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_in_place() {
    let repo = InMemoryMovieRepository::new();
    let first = repo.create(movie(1980, "First", false)).await.unwrap();
    repo.create(movie(1981, "Second", false)).await.unwrap();

    let mut changed = first.clone();
    changed.title = "First (renamed)".to_string();
    changed.winner = true;

    let updated = repo.update(first.id, changed.clone()).await.unwrap();
    assert_eq!(updated, Some(changed.clone()));

    let all = repo.find_all().await.unwrap();
    assert_eq!(titles(&all), vec!["First (renamed)", "Second"]);
    assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(changed));
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
    let repo = InMemoryMovieRepository::new();
    let ghost = movie(1980, "Ghost", false);

    assert_eq!(repo.update(ghost.id, ghost).await.unwrap(), None);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_removes_and_reports() {
    let repo = InMemoryMovieRepository::new();
    let kept = repo.create(movie(1980, "Kept", false)).await.unwrap();
    let gone = repo.create(movie(1981, "Gone", false)).await.unwrap();

    assert!(repo.delete(gone.id).await.unwrap());
    assert!(!repo.delete(gone.id).await.unwrap());
    assert!(!repo.delete(MovieId::new()).await.unwrap());

    assert_eq!(repo.find_by_id(gone.id).await.unwrap(), None);
    assert_eq!(repo.find_all().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn reads_return_copies() {
    let repo = InMemoryMovieRepository::new();
    let stored = repo.create(movie(1980, "Original", true)).await.unwrap();

    let mut copy = repo.find_by_id(stored.id).await.unwrap().unwrap();
    copy.title = "Mutated".to_string();
    copy.producers.push("Intruder".to_string());

    let again = repo.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(again, stored);
}

#[tokio::test]
async fn clear_empties_the_store() {
    let repo = InMemoryMovieRepository::new();
    repo.bulk_create(vec![movie(1980, "A", true), movie(1981, "B", true)])
        .await
        .unwrap();

    repo.clear().unwrap();

    assert_eq!(repo.count().await.unwrap(), 0);
    assert!(repo.find_winners().await.unwrap().is_empty());
}
