//! Producer award-interval engine.
//!
//! Pipeline: winning movies → per-producer win histories
//! ([`accumulate`]) → consecutive-win intervals ([`derive`]) → global
//! min/max selection ([`select`]). Every call starts from a fresh read of the
//! store; nothing is cached between calls.

pub mod accumulate;
pub mod derive;
pub mod observer;
pub mod select;

use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use crate::error::{Error, Result};
use crate::model::{AwardInterval, AwardIntervals, Movie};
use crate::store::MovieRepository;
use crate::telemetry::spans::{record_compute_result, start_compute_span};

pub use accumulate::accumulate_producers;
pub use derive::derive_intervals;
pub use observer::{ComputeStats, IntervalObserver, NoopObserver, TracingObserver};
pub use select::select_extremes;

/// Computes award intervals over whatever store it is given.
#[derive(Clone)]
pub struct IntervalEngine {
    repository: Arc<dyn MovieRepository>,
    observer: Arc<dyn IntervalObserver>,
}

impl IntervalEngine {
    /// Engine reporting through [`TracingObserver`].
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self {
            repository,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn IntervalObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Producers with the shortest and longest gaps between consecutive wins.
    ///
    /// Fails if the store read fails or if any producer has two wins in the
    /// same year.
    pub async fn compute_intervals(&self) -> Result<AwardIntervals> {
        let span = start_compute_span();
        let result = async {
            self.observer.before_compute();
            let started = Instant::now();

            let winners = self.repository.find_winners().await?;
            tracing::debug!(count = winners.len(), "found winner movies to analyze");

            match aggregate_with_stats(&winners) {
                Ok((result, mut stats)) => {
                    stats.elapsed = started.elapsed();
                    self.observer.after_compute(&stats, &result);
                    Ok(result)
                }
                Err(e) => {
                    if matches!(e, Error::InvalidInterval { .. }) {
                        self.observer.on_invariant_violation(&e);
                    }
                    Err(e)
                }
            }
        }
        .instrument(span.clone())
        .await;

        if let Ok(ref intervals) = result {
            record_compute_result(&span, intervals.min.len(), intervals.max.len());
        }
        result
    }
}

/// Run the whole pipeline over an already-fetched set of winners.
pub fn aggregate(winners: &[Movie]) -> Result<AwardIntervals> {
    aggregate_with_stats(winners).map(|(result, _)| result)
}

fn aggregate_with_stats(winners: &[Movie]) -> Result<(AwardIntervals, ComputeStats)> {
    let producers = accumulate_producers(winners);

    let mut intervals: Vec<AwardInterval> = Vec::new();
    for record in &producers {
        intervals.extend(derive_intervals(record)?);
    }

    let stats = ComputeStats {
        winners: winners.len(),
        producers: producers.len(),
        intervals: intervals.len(),
        elapsed: Default::default(),
    };

    Ok((select_extremes(intervals), stats))
}
