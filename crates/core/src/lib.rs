pub mod booking;
pub mod config;
pub mod inventory;
pub mod ledger;
pub mod metrics;
pub mod pricing;

pub use booking::{BookingError, BookingReceipt, BoxOffice, Cancellation, Quote};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, CategoryConfig,
    Config, ConfigError, CorsConfig, EventConfig, ServerConfig,
};
pub use inventory::{
    Event, InventoryError, InventoryStore, TicketCategory, TicketQuantities, GENERAL_ADMISSION,
    VIP,
};
pub use ledger::{LedgerError, Order, OrderLedger, ANONYMOUS_USER};
pub use pricing::PricingQuoter;
