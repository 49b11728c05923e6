//! Ticket inventory for the single event on sale.

mod store;
mod types;

pub use store::{InventoryError, InventoryStore};
pub use types::{Event, TicketCategory, TicketQuantities, GENERAL_ADMISSION, VIP};
