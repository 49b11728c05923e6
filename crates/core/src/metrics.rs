//! Prometheus metrics for booking activity.
//!
//! The server registers these alongside its HTTP metrics; see
//! [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

/// Tickets sold by category.
pub static TICKETS_SOLD: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("boxoffice_tickets_sold_total", "Total tickets sold"),
        &["category"],
    )
    .unwrap()
});

/// Tickets returned to inventory by category.
pub static TICKETS_REFUNDED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "boxoffice_tickets_refunded_total",
            "Total tickets returned through cancellation",
        ),
        &["category"],
    )
    .unwrap()
});

/// Orders recorded in the ledger.
pub static ORDERS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("boxoffice_orders_total", "Total orders recorded").unwrap()
});

/// Rejected review/booking/cancel requests.
pub static BOOKING_REJECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "boxoffice_booking_rejections_total",
            "Total rejected booking operations",
        ),
        &["operation", "reason"], // reason: "unknown_category", "insufficient_inventory", ...
    )
    .unwrap()
});

/// Every core metric, for registration in the server's registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TICKETS_SOLD.clone()),
        Box::new(TICKETS_REFUNDED.clone()),
        Box::new(ORDERS_TOTAL.clone()),
        Box::new(BOOKING_REJECTIONS.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
        ORDERS_TOTAL.inc();
        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|f| f.get_name().to_string())
            .collect();
        assert!(names.contains(&"boxoffice_orders_total".to_string()));
    }
}
