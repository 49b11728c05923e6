use thiserror::Error;

use crate::inventory::InventoryError;
use crate::ledger::LedgerError;

/// Errors returned by [`BoxOffice`](super::BoxOffice) operations.
///
/// Every variant leaves inventory and ledger exactly as they were before the call.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Box office state lock poisoned")]
    LockPoisoned,
}

impl BookingError {
    /// Short label for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            BookingError::Inventory(InventoryError::UnknownCategory(_)) => "unknown_category",
            BookingError::Inventory(InventoryError::InsufficientInventory { .. }) => {
                "insufficient_inventory"
            }
            BookingError::Inventory(InventoryError::QuantityOverflow { .. }) => "quantity_overflow",
            BookingError::Inventory(InventoryError::PriceOverflow { .. }) => "price_overflow",
            BookingError::Ledger(_) => "ledger",
            BookingError::LockPoisoned => "lock_poisoned",
        }
    }
}
