//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the box office server:
//! - HTTP request metrics (latency, counts, in flight)
//! - Remaining inventory per category (collected dynamically)
//! - Booking counters from the core crate

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts,
    Registry, TextEncoder,
};

use crate::state::AppState;

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "boxoffice_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("boxoffice_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "boxoffice_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Inventory Metrics (collected dynamically)
// =============================================================================

/// Tickets still available per category.
pub static TICKETS_AVAILABLE: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new(
            "boxoffice_tickets_available",
            "Tickets still available per category",
        ),
        &["category"],
    )
    .unwrap()
});

/// Orders in the ledger.
pub static ORDERS_RECORDED: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("boxoffice_orders_recorded", "Orders currently in the ledger").unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Inventory
    registry
        .register(Box::new(TICKETS_AVAILABLE.clone()))
        .unwrap();
    registry
        .register(Box::new(ORDERS_RECORDED.clone()))
        .unwrap();

    // Core booking counters
    for metric in boxoffice_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so the inventory gauges reflect the box office at
/// scrape time.
pub fn collect_dynamic_metrics(state: &AppState) {
    if let Ok(event) = state.box_office().event_details() {
        for category in &event.categories {
            TICKETS_AVAILABLE
                .with_label_values(&[&category.name])
                .set(i64::from(category.available));
        }
    }
    if let Ok(count) = state.box_office().order_count() {
        ORDERS_RECORDED.set(count as i64);
    }
}
