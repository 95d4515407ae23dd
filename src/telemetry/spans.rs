//! Span helpers for interval computation.

use tracing::Span;

/// Start a span for one interval computation.
///
/// Result sizes are declared empty and filled by [`record_compute_result`].
pub fn start_compute_span() -> Span {
    tracing::info_span!(
        "intervals.compute",
        "intervals.min_count" = tracing::field::Empty,
        "intervals.max_count" = tracing::field::Empty,
    )
}

/// Record how many items ended up in each list.
pub fn record_compute_result(span: &Span, min_count: usize, max_count: usize) {
    span.record("intervals.min_count", min_count as u64);
    span.record("intervals.max_count", max_count as u64);
}
