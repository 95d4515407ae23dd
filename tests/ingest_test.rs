//! Integration tests for CSV ingestion.

use std::path::PathBuf;
use std::sync::Arc;

use award_intervals::catalog::Catalog;
use award_intervals::engine::{IntervalEngine, NoopObserver};
use award_intervals::error::Error;
use award_intervals::ingest::{load_movies_from_csv, parse_movies, parse_producers};
use award_intervals::store::InMemoryMovieRepository;
use serde_json::json;

const HEADER: &str = "year;title;studios;producers;winner";

const SAMPLE: &str = "\
year;title;studios;producers;winner
1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
1984;Bolero;Cannon Films;Bo Derek;yes
1990;The Adventures of Ford Fairlane;20th Century Fox;Steven Perry and Joel Silver;yes
1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes
1991;Hudson Hawk;TriStar Pictures;Joel Silver;yes
2002;Swept Away;Screen Gems;Matthew Vaughn;yes
2015;Fantastic Four;20th Century Fox;Simon Kinberg, Matthew Vaughn, Hutch Parker, Robert Kulzer and Gregory Goodman;yes
";

/// Write `content` to a fresh file under the system temp dir.
fn temp_csv(content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("award-intervals-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}.csv", uuid::Uuid::new_v4()));
    std::fs::write(&path, content).unwrap();
    path
}

fn invalid_rows(content: &str) -> (usize, Vec<String>) {
    match parse_movies(content) {
        Err(Error::InvalidRows { count, errors }) => (count, errors),
        other => panic!("expected InvalidRows, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn parses_rows_and_winner_flags() {
    let movies = parse_movies(SAMPLE).unwrap();

    assert_eq!(movies.len(), 8);
    assert_eq!(movies[0].year, 1980);
    assert_eq!(movies[0].title, "Can't Stop the Music");
    assert_eq!(movies[0].studios, "Associated Film Distribution");
    assert_eq!(movies[0].producers, vec!["Allan Carr"]);
    assert!(movies[0].winner);
    assert!(!movies[1].winner);
    assert_eq!(movies[3].producers, vec!["Steven Perry", "Joel Silver"]);
    assert_eq!(movies[7].producers.len(), 5);
}

#[test]
fn header_is_case_insensitive_and_blank_lines_are_skipped() {
    let content = "YEAR;Title;STUDIOS;producers;Winner\n\n1980;Movie;Studio;Producer;YES\n   \n";

    let movies = parse_movies(content).unwrap();

    assert_eq!(movies.len(), 1);
    assert!(movies[0].winner);
}

#[test]
fn splits_producers_on_commas_and_and() {
    assert_eq!(
        parse_producers("Gloria Katz, Willard Huyck"),
        vec!["Gloria Katz", "Willard Huyck"]
    );
    assert_eq!(
        parse_producers("A, B and C"),
        vec!["A", "B", "C"]
    );
    assert_eq!(parse_producers(" Solo "), vec!["Solo"]);
    assert!(parse_producers(" , ").is_empty());
    // "and" inside a name is not a separator
    assert_eq!(parse_producers("Alexander Sandberg"), vec!["Alexander Sandberg"]);
}

// ---------------------------------------------------------------------------
// Whole-file failures
// ---------------------------------------------------------------------------

#[test]
fn empty_content_is_rejected() {
    let err = parse_movies("\n  \n").unwrap_err();
    assert_eq!(err.to_string(), "CSV file is empty");
}

#[test]
fn wrong_headers_are_rejected() {
    let err = parse_movies("year;title;studios;producers\nyes").unwrap_err();
    assert!(err.to_string().starts_with("Invalid CSV headers"));
}

#[test]
fn missing_file_is_rejected() {
    let err = load_movies_from_csv("definitely-not-here.csv").unwrap_err();
    assert!(
        err.to_string().starts_with("CSV file not found"),
        "unexpected error: {err}"
    );
}

// ---------------------------------------------------------------------------
// Row failures
// ---------------------------------------------------------------------------

#[test]
fn invalid_year_rejects_the_file() {
    let (count, errors) = invalid_rows(&format!(
        "{HEADER}\ninvalid;Movie;Studio;Producer;yes\n1980;Valid Movie;Studio;Producer;no"
    ));

    assert_eq!(count, 1);
    assert_eq!(errors, vec!["Line 2: Invalid year: invalid"]);
}

#[test]
fn out_of_range_year_is_rejected() {
    let (count, _) = invalid_rows(&format!("{HEADER}\n1899;Movie;Studio;Producer;yes"));
    assert_eq!(count, 1);
}

#[test]
fn missing_fields_are_rejected() {
    let (_, errors) = invalid_rows(&format!("{HEADER}\n1980;;Studio;Producer;yes"));
    assert_eq!(errors, vec!["Line 2: Title is required"]);

    let (_, errors) = invalid_rows(&format!("{HEADER}\n1980;Title;;Producer;yes"));
    assert_eq!(errors, vec!["Line 2: Studios is required"]);

    let (_, errors) = invalid_rows(&format!("{HEADER}\n1980;Title;Studio;;yes"));
    assert_eq!(errors, vec!["Line 2: At least one producer is required"]);
}

#[test]
fn wrong_column_count_is_rejected() {
    let (_, errors) = invalid_rows(&format!("{HEADER}\n1980;Only;Three;Columns"));
    assert_eq!(errors, vec!["Line 2: Expected 5 columns, got 4"]);
}

#[test]
fn every_bad_row_is_reported() {
    let content = format!(
        "{HEADER}\nbad;Movie;Studio;Producer;yes\n1980;Fine;Studio;Producer;\n1981;;Studio;Producer;yes"
    );

    let err = parse_movies(&content).unwrap_err();

    assert!(err.to_string().starts_with("Failed to parse CSV file. 2 invalid rows found"));
    let Error::InvalidRows { errors, .. } = err else {
        panic!("expected InvalidRows");
    };
    assert_eq!(
        errors,
        vec!["Line 2: Invalid year: bad", "Line 4: Title is required"]
    );
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn csv_file_through_engine_matches_reference_intervals() {
    let path = temp_csv(SAMPLE);
    let movies = load_movies_from_csv(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let repo = Arc::new(InMemoryMovieRepository::new());
    let imported = Catalog::new(repo.clone()).import(movies).await.unwrap();
    assert_eq!(imported, 8);

    let result = IntervalEngine::new(repo)
        .with_observer(Arc::new(NoopObserver))
        .compute_intervals()
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "min": [{"producer": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991}],
            "max": [{"producer": "Matthew Vaughn", "interval": 13, "previousWin": 2002, "followingWin": 2015}],
        })
    );
}
