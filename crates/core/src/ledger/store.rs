//! Append-only order history.

use thiserror::Error;

use super::Order;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Order id {id} is not greater than the last recorded id {last}")]
    NonMonotonicId { id: u64, last: u64 },
}

/// Ordered record of completed orders; insertion order is history order.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    last_issued: u64,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh id, strictly greater than every id issued before.
    ///
    /// Only call this once the order is certain to be appended, otherwise the
    /// sequence gets a gap.
    pub fn next_id(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    pub fn append(&mut self, order: Order) -> Result<(), LedgerError> {
        if let Some(last) = self.orders.last() {
            if order.id <= last.id {
                return Err(LedgerError::NonMonotonicId {
                    id: order.id,
                    last: last.id,
                });
            }
        }
        self.orders.push(order);
        Ok(())
    }

    pub fn history(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
