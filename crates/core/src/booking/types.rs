use rust_decimal::Decimal;

use crate::ledger::Order;

pub const REVIEW_MESSAGE: &str = "Review your order";
pub const BOOKED_MESSAGE: &str = "Tickets booked successfully";
pub const CANCELLED_MESSAGE: &str = "Ticket cancellation successful";

/// Result of a non-committing review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub message: String,
    pub total_cost: Decimal,
}

/// Result of a committed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub message: String,
    pub total_cost: Decimal,
    /// The order as recorded in the ledger.
    pub order: Order,
}

/// Result of a cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    pub message: String,
    pub category: String,
    pub quantity: u32,
}
