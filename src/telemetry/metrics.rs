//! Metric instrument factories for purchais.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! Without an OTLP endpoint the global provider is a no-op.

use opentelemetry::metrics::{Counter, Histogram, Meter};

fn meter() -> Meter {
    opentelemetry::global::meter("purchais")
}

/// Counter: items merged into the inventory.
/// Labels: `source` ("scan" | "analyze" | "seed").
pub fn items_added() -> Counter<u64> {
    meter()
        .u64_counter("purchais.inventory.items_added")
        .with_description("Number of items added to the inventory")
        .build()
}

/// Counter: meals cooked.
pub fn meals_cooked() -> Counter<u64> {
    meter()
        .u64_counter("purchais.inventory.meals_cooked")
        .with_description("Number of meals cooked")
        .build()
}

/// Counter: items restocked.
pub fn items_restocked() -> Counter<u64> {
    meter()
        .u64_counter("purchais.inventory.items_restocked")
        .with_description("Number of items restocked")
        .build()
}

/// Counter: chef suggestions.
/// Labels: `rule` (rule name, or "none").
pub fn recipe_suggestions() -> Counter<u64> {
    meter()
        .u64_counter("purchais.chef.suggestions")
        .with_description("Number of recipe suggestions by matching rule")
        .build()
}

/// Counter: failed scan/analyze calls.
/// Labels: `source`.
pub fn ingestion_failures() -> Counter<u64> {
    meter()
        .u64_counter("purchais.ingest.failures")
        .with_description("Number of failed ingestion calls")
        .build()
}

/// Histogram: kitchen operation duration in milliseconds.
/// Labels: `operation`.
pub fn operation_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("purchais.operation.duration_ms")
        .with_description("Kitchen operation duration in milliseconds")
        .with_unit("ms")
        .build()
}
