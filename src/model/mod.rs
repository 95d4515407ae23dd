//! Core data model.
//!
//! A movie is a catalog record: one nominee for the worst-picture award,
//! with its credited producers and whether it won. Producer records and
//! award intervals are derived from winning movies and never stored.

pub mod interval;
pub mod movie;
pub mod producer;

pub use interval::{AwardInterval, AwardIntervals, ProducerIntervalItem};
pub use movie::{Movie, MovieId, MovieUpdate, NewMovie};
pub use producer::{ProducerRecord, ProducerWin};
