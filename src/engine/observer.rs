//! Hooks the interval engine calls around each computation.

use std::time::Duration;

use opentelemetry::KeyValue;

use crate::error::Error;
use crate::model::AwardIntervals;
use crate::telemetry::metrics;

/// Counts gathered during one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeStats {
    pub winners: usize,
    pub producers: usize,
    pub intervals: usize,
    pub elapsed: Duration,
}

/// Observability capability injected into [`IntervalEngine`](super::IntervalEngine).
///
/// All hooks default to doing nothing.
pub trait IntervalObserver: Send + Sync {
    fn before_compute(&self) {}

    fn after_compute(&self, _stats: &ComputeStats, _result: &AwardIntervals) {}

    fn on_invariant_violation(&self, _error: &Error) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl IntervalObserver for NoopObserver {}

/// Logs through `tracing` and records OTel metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl IntervalObserver for TracingObserver {
    fn before_compute(&self) {
        tracing::debug!("calculating producer award intervals");
    }

    fn after_compute(&self, stats: &ComputeStats, result: &AwardIntervals) {
        tracing::debug!(
            winners = stats.winners,
            producers = stats.producers,
            intervals = stats.intervals,
            "grouped winners and derived intervals"
        );
        if stats.intervals == 0 {
            tracing::info!("no producer intervals found (no producer with multiple wins)");
        }

        metrics::intervals_computed().add(
            stats.intervals as u64,
            &[KeyValue::new("result", if result.is_empty() { "empty" } else { "ok" })],
        );
        metrics::operation_duration_ms().record(
            stats.elapsed.as_secs_f64() * 1000.0,
            &[KeyValue::new("operation", "intervals.compute")],
        );
    }

    fn on_invariant_violation(&self, error: &Error) {
        tracing::error!(%error, "award interval invariant violated");
        metrics::invariant_violations().add(1, &[]);
    }
}
