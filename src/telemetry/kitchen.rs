//! Span helpers for kitchen operations.

use std::time::Instant;

use opentelemetry::KeyValue;
use tracing::Span;

use super::metrics;

/// Start a span for one kitchen operation ("scan", "ask_chef", ...).
///
/// `kitchen.outcome` is declared empty and filled by [`record_outcome`].
pub fn start_operation_span(operation: &'static str) -> Span {
    tracing::info_span!(
        "kitchen.operation",
        "kitchen.operation" = operation,
        "kitchen.outcome" = tracing::field::Empty,
    )
}

/// Record how an operation ended and how long it took.
pub fn record_outcome(span: &Span, operation: &'static str, outcome: &str, started: Instant) {
    span.record("kitchen.outcome", outcome);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics::operation_duration_ms()
        .record(elapsed_ms, &[KeyValue::new("operation", operation)]);
    span.in_scope(|| {
        tracing::info!(operation, outcome, elapsed_ms, "operation finished");
    });
}
