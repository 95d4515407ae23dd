//! Metric instruments.
//!
//! Instruments come from the `"award-intervals"` meter on the globally
//! registered `MeterProvider`; without one they are no-ops.

use opentelemetry::metrics::{Counter, Histogram, Meter};

fn meter() -> Meter {
    opentelemetry::global::meter("award-intervals")
}

/// Counter: movies loaded from a CSV file.
/// Labels: `result` ("ok" | "error").
pub fn movies_loaded() -> Counter<u64> {
    meter()
        .u64_counter("awards.ingest.movies_loaded")
        .with_description("Number of movies loaded from CSV")
        .build()
}

/// Counter: interval facts derived by the engine.
/// Labels: `result` ("ok" | "empty").
pub fn intervals_computed() -> Counter<u64> {
    meter()
        .u64_counter("awards.intervals.computed")
        .with_description("Number of producer intervals derived")
        .build()
}

/// Counter: computations aborted on a broken interval invariant.
pub fn invariant_violations() -> Counter<u64> {
    meter()
        .u64_counter("awards.intervals.invariant_violations")
        .with_description("Interval computations failed by an invariant violation")
        .build()
}

/// Counter: catalog mutations.
/// Labels: `operation` ("create" | "update" | "delete" | "import").
pub fn catalog_operations() -> Counter<u64> {
    meter()
        .u64_counter("awards.catalog.operations")
        .with_description("Number of catalog mutations")
        .build()
}

/// Histogram: operation duration in milliseconds.
/// Labels: `operation`.
pub fn operation_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("awards.operation.duration_ms")
        .with_description("Operation duration in milliseconds")
        .with_unit("ms")
        .build()
}
