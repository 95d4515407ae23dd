//! # award-intervals
//!
//! Catalog of Golden Raspberry worst-picture nominees, and the statistic
//! built on it: which producers went the shortest and the longest time
//! between two consecutive wins.
//!
//! Movies live behind the [`store::MovieRepository`] trait (in memory or in
//! Postgres), are loaded from a `;`-separated CSV file by [`ingest`], and
//! are analyzed by [`engine::IntervalEngine`].

pub mod catalog;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod store;
pub mod telemetry;
