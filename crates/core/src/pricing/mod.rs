//! Order pricing.

use rust_decimal::Decimal;

use crate::inventory::{InventoryError, InventoryStore, TicketQuantities};

/// Computes order totals against the inventory's current prices.
///
/// Used by both the non-committing review and the committing booking, so the
/// two can never disagree on a total.
pub struct PricingQuoter<'a> {
    inventory: &'a InventoryStore,
}

impl<'a> PricingQuoter<'a> {
    pub fn new(inventory: &'a InventoryStore) -> Self {
        Self { inventory }
    }

    /// `sum(price[c] * requested[c])`. Fails on any unknown category, or with
    /// `PriceOverflow` when the total does not fit in a `Decimal`.
    pub fn quote(&self, requested: &TicketQuantities) -> Result<Decimal, InventoryError> {
        requested
            .iter()
            .try_fold(Decimal::ZERO, |total, (name, quantity)| {
                let price = self.inventory.price_of(name)?;
                price
                    .checked_mul(Decimal::from(quantity))
                    .and_then(|subtotal| total.checked_add(subtotal))
                    .ok_or_else(|| InventoryError::PriceOverflow {
                        category: name.to_string(),
                    })
            })
    }
}
