//! awards CLI: browse the nominee catalog and report producer win intervals.

use award_intervals::catalog::{Catalog, MovieInput};
use award_intervals::config::Config;
use award_intervals::config::secrets::ExposeSecret;
use award_intervals::db::Db;
use award_intervals::engine::IntervalEngine;
use award_intervals::error::Error;
use award_intervals::ingest::load_movies_from_csv;
use award_intervals::model::{Movie, MovieId};
use award_intervals::store::{InMemoryMovieRepository, MovieRepository};
use award_intervals::telemetry::{TelemetryConfig, init_telemetry};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "awards", about = "Golden Raspberry award catalog and producer win intervals")]
struct Cli {
    /// Use the Postgres store at DATABASE_URL instead of an in-memory store
    #[arg(long, global = true)]
    database: bool,
    /// CSV movie list (defaults to CSV_FILE_PATH)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Producers with the shortest and longest gaps between consecutive wins
    Intervals,
    /// Movie catalog operations
    Movies {
        #[command(subcommand)]
        action: MovieAction,
    },
    /// Load the CSV movie list into Postgres
    Import,
    /// Report service health as JSON
    Health,
}

#[derive(Subcommand)]
enum MovieAction {
    /// List movies
    List {
        /// Only movies from this year
        #[arg(long)]
        year: Option<i32>,
        /// Only winners
        #[arg(long)]
        winners: bool,
    },
    /// Show a movie
    Show {
        /// Movie ID (UUID)
        id: MovieId,
    },
    /// Add a movie
    Add {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        studios: String,
        /// Producers separated by "," or " and "
        #[arg(long)]
        producers: String,
        #[arg(long)]
        winner: bool,
    },
    /// Update fields of a movie
    Update {
        /// Movie ID (UUID)
        id: MovieId,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        studios: Option<String>,
        /// Producers separated by "," or " and "
        #[arg(long)]
        producers: Option<String>,
        #[arg(long)]
        winner: Option<bool>,
    },
    /// Delete a movie
    Delete {
        /// Movie ID (UUID)
        id: MovieId,
    },
    /// Count movies
    Count,
}

/// Where movies are read from for this invocation.
enum Backend {
    Memory(Arc<InMemoryMovieRepository>),
    Postgres(Arc<Db>),
}

impl Backend {
    fn repository(&self) -> Arc<dyn MovieRepository> {
        match self {
            Backend::Memory(repo) => Arc::clone(repo) as Arc<dyn MovieRepository>,
            Backend::Postgres(db) => Arc::clone(db) as Arc<dyn MovieRepository>,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli, started).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(cli: Cli, started: Instant) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let guard = init_telemetry(TelemetryConfig {
        endpoint: config.otel_endpoint.clone(),
        service_name: "awards".to_string(),
        log_level: config.log_level.clone(),
    })?;

    let csv_path = cli.csv.unwrap_or_else(|| config.csv_file_path.clone());
    let result = match cli.command {
        Command::Import => cmd_import(&config, &csv_path, cli.database).await,
        Command::Health => cmd_health(&config, cli.database, started).await,
        Command::Intervals => {
            let backend = open_backend(&config, &csv_path, cli.database).await?;
            cmd_intervals(backend.repository()).await
        }
        Command::Movies { action } => {
            let backend = open_backend(&config, &csv_path, cli.database).await?;
            cmd_movies(Catalog::new(backend.repository()), action).await
        }
    };

    guard.force_flush();
    result
}

/// Postgres when asked for, otherwise a fresh in-memory store seeded from the CSV.
async fn open_backend(config: &Config, csv_path: &Path, database: bool) -> anyhow::Result<Backend> {
    if database {
        return Ok(Backend::Postgres(Arc::new(connect_db(config).await?)));
    }

    let repo = Arc::new(InMemoryMovieRepository::new());
    let movies = load_movies_from_csv(csv_path)?;
    Catalog::new(Arc::clone(&repo) as Arc<dyn MovieRepository>)
        .import(movies)
        .await?;
    Ok(Backend::Memory(repo))
}

async fn connect_db(config: &Config) -> anyhow::Result<Db> {
    let url = config.require_database_url()?;
    let db = Db::connect(url.expose_secret()).await?;
    db.migrate().await?;
    Ok(db)
}

async fn cmd_intervals(repository: Arc<dyn MovieRepository>) -> anyhow::Result<()> {
    let intervals = IntervalEngine::new(repository).compute_intervals().await?;
    println!("{}", serde_json::to_string_pretty(&intervals)?);
    Ok(())
}

async fn cmd_import(config: &Config, csv_path: &Path, database: bool) -> anyhow::Result<()> {
    if !database {
        anyhow::bail!("import writes to Postgres; pass --database");
    }
    let db = connect_db(config).await?;
    let movies = load_movies_from_csv(csv_path)?;
    let count = Catalog::new(Arc::new(db)).import(movies).await?;
    println!("Imported {count} movie(s) from {}", csv_path.display());
    Ok(())
}

async fn cmd_health(config: &Config, database: bool, started: Instant) -> anyhow::Result<()> {
    let healthy = if database {
        match connect_db(config).await {
            Ok(db) => db.health_check().await.is_ok(),
            Err(e) => {
                tracing::warn!(error = %e, "database unreachable");
                false
            }
        }
    } else {
        true
    };
    let status = if healthy { "healthy" } else { "unhealthy" };

    let report = serde_json::json!({
        "status": status,
        "uptime": started.elapsed().as_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": config.environment,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !healthy {
        anyhow::bail!("database health check failed");
    }
    Ok(())
}

async fn cmd_movies(catalog: Catalog, action: MovieAction) -> anyhow::Result<()> {
    match action {
        MovieAction::List { year, winners } => {
            let mut movies = match year {
                Some(year) => catalog.by_year(year).await?,
                None => catalog.list().await?,
            };
            if winners {
                movies.retain(|m| m.winner);
            }
            print_movie_table(&movies);
        }
        MovieAction::Show { id } => {
            print_movie(&catalog.get(id).await?);
        }
        MovieAction::Add {
            year,
            title,
            studios,
            producers,
            winner,
        } => {
            let movie = catalog
                .create_from_input(MovieInput {
                    year: Some(year),
                    title: Some(title),
                    studios: Some(studios),
                    producers: Some(producers),
                    winner: Some(winner),
                })
                .await?;
            println!("Created: {}", movie.id);
        }
        MovieAction::Update {
            id,
            year,
            title,
            studios,
            producers,
            winner,
        } => {
            let movie = catalog
                .update_from_input(
                    id,
                    MovieInput {
                        year,
                        title,
                        studios,
                        producers,
                        winner,
                    },
                )
                .await?;
            print_movie(&movie);
        }
        MovieAction::Delete { id } => {
            catalog.delete(id).await?;
            println!("Deleted: {id}");
        }
        MovieAction::Count => {
            println!("{}", catalog.count().await?);
        }
    }
    Ok(())
}

fn print_movie_table(movies: &[Movie]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }

    println!(
        "{:<36}  {:<4}  {:<6}  {:<40}  PRODUCERS",
        "ID", "YEAR", "WINNER", "TITLE"
    );
    println!("{}", "-".repeat(120));

    for movie in movies {
        let title: String = movie.title.chars().take(40).collect();
        println!(
            "{:<36}  {:<4}  {:<6}  {:<40}  {}",
            movie.id,
            movie.year,
            if movie.winner { "yes" } else { "" },
            title,
            movie.producers.join(", ")
        );
    }

    println!("\n{} movie(s)", movies.len());
}

fn print_movie(movie: &Movie) {
    println!("ID:         {}", movie.id);
    println!("Year:       {}", movie.year);
    println!("Title:      {}", movie.title);
    println!("Studios:    {}", movie.studios);
    println!("Producers:  {}", movie.producers.join(", "));
    println!("Winner:     {}", if movie.winner { "yes" } else { "no" });
}

/// 2 bad input, 3 not found, 4 corrupt win data, 1 anything else.
fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<Error>() {
        Some(Error::Validation(_) | Error::Ingest(_) | Error::InvalidRows { .. }) => 2,
        Some(Error::NotFound(_)) => 3,
        Some(Error::InvalidInterval { .. }) => 4,
        _ => 1,
    }
}
