//! In-memory inventory of the event's ticket categories.

use rust_decimal::Decimal;
use thiserror::Error;

use super::{Event, TicketCategory, TicketQuantities};

/// Errors produced by inventory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Unknown ticket category: {0}")]
    UnknownCategory(String),

    #[error("Not enough tickets available for {category}: requested {requested}, available {available}")]
    InsufficientInventory {
        category: String,
        requested: u32,
        available: u32,
    },

    #[error("Ticket count overflow for {category}")]
    QuantityOverflow { category: String },

    #[error("Order total overflows for {category}")]
    PriceOverflow { category: String },
}

/// Holds the event's categories and their remaining counts.
///
/// The store itself is not synchronized. Callers serialize access; see
/// [`BoxOffice`](crate::booking::BoxOffice).
#[derive(Debug, Clone)]
pub struct InventoryStore {
    event: Event,
}

impl InventoryStore {
    pub fn new(event: Event) -> Self {
        Self { event }
    }

    /// Current categories and counts.
    pub fn snapshot(&self) -> Event {
        self.event.clone()
    }

    pub fn category(&self, name: &str) -> Result<&TicketCategory, InventoryError> {
        self.event
            .category(name)
            .ok_or_else(|| InventoryError::UnknownCategory(name.to_string()))
    }

    fn category_mut(&mut self, name: &str) -> Result<&mut TicketCategory, InventoryError> {
        self.event
            .categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| InventoryError::UnknownCategory(name.to_string()))
    }

    pub fn price_of(&self, name: &str) -> Result<Decimal, InventoryError> {
        Ok(self.category(name)?.price)
    }

    /// Reject any category name the event doesn't define.
    pub fn validate(&self, requested: &TicketQuantities) -> Result<(), InventoryError> {
        for (name, _) in requested.iter() {
            self.category(name)?;
        }
        Ok(())
    }

    /// Like [`check_availability`](Self::check_availability) but reports the first
    /// category that falls short.
    pub fn ensure_available(&self, requested: &TicketQuantities) -> Result<(), InventoryError> {
        self.validate(requested)?;
        for (name, quantity) in requested.iter() {
            let category = self.category(name)?;
            if quantity > category.available {
                return Err(InventoryError::InsufficientInventory {
                    category: name.to_string(),
                    requested: quantity,
                    available: category.available,
                });
            }
        }
        Ok(())
    }

    /// True iff every requested count fits in what's left.
    pub fn check_availability(&self, requested: &TicketQuantities) -> Result<bool, InventoryError> {
        match self.ensure_available(requested) {
            Ok(()) => Ok(true),
            Err(InventoryError::InsufficientInventory { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Deduct the requested counts. Nothing is deducted unless all of them fit.
    pub fn reserve(&mut self, requested: &TicketQuantities) -> Result<(), InventoryError> {
        self.ensure_available(requested)?;
        for (name, quantity) in requested.iter() {
            let category = self.category_mut(name)?;
            category.available -= quantity;
        }
        Ok(())
    }

    /// Return tickets to a category. There is no cap against the initial allocation.
    pub fn refund(&mut self, name: &str, quantity: u32) -> Result<(), InventoryError> {
        let category = self.category_mut(name)?;
        category.available = category
            .available
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                category: name.to_string(),
            })?;
        Ok(())
    }
}
