//! Order record type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::TicketQuantities;

/// Placeholder username until requests carry an identity.
pub const ANONYMOUS_USER: &str = "anonymous";

/// A completed purchase. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Strictly increasing, starting at 1.
    pub id: u64,
    pub username: String,
    /// Per-category counts, flattened into the order on the wire.
    #[serde(flatten)]
    pub quantities: TicketQuantities,
    pub total_cost: Decimal,
    pub purchase_time: DateTime<Utc>,
}
