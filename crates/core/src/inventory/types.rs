//! Event and ticket category data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name of the general admission category.
pub const GENERAL_ADMISSION: &str = "general_admission";

/// Name of the VIP category.
pub const VIP: &str = "vip";

/// A named class of ticket with its own price and remaining count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCategory {
    /// Category identifier, e.g. `general_admission`.
    #[serde(rename = "type")]
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Tickets still available for sale.
    pub available: u32,
}

impl TicketCategory {
    pub fn new(name: impl Into<String>, price: Decimal, available: u32) -> Self {
        Self {
            name: name.into(),
            price,
            available,
        }
    }
}

/// The single event on sale, as exposed by `GET /event-details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    /// Categories in configured order.
    #[serde(rename = "tickets")]
    pub categories: Vec<TicketCategory>,
}

impl Event {
    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&TicketCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Remaining tickets for a category, or `None` if it doesn't exist.
    pub fn available(&self, name: &str) -> Option<u32> {
        self.category(name).map(|c| c.available)
    }
}

/// Requested ticket counts keyed by category name.
///
/// Serializes as a flat map (`{"general_admission": 2, "vip": 0}`) so it can be
/// flattened into an [`Order`](crate::ledger::Order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketQuantities(BTreeMap<String, u32>);

impl TicketQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. Setting the same category twice keeps the last value.
    pub fn with(mut self, category: impl Into<String>, quantity: u32) -> Self {
        self.0.insert(category.into(), quantity);
        self
    }

    /// Requested count for a category (0 if not requested).
    pub fn get(&self, category: &str) -> u32 {
        self.0.get(category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Sum of all requested tickets.
    pub fn total(&self) -> u64 {
        self.0.values().map(|q| u64::from(*q)).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TicketQuantities {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
