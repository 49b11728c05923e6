//! Order ledger.

mod store;
mod types;

pub use store::{LedgerError, OrderLedger};
pub use types::{Order, ANONYMOUS_USER};
