use std::collections::HashSet;

use rust_decimal::Decimal;

use super::{types::Config, ConfigError};
use crate::inventory::{GENERAL_ADMISSION, VIP};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Event has a title
/// - Category names are non-empty and unique, prices are not negative
/// - Both request-addressable categories (general admission, VIP) exist
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let event = &config.event;
    if event.title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "event.title cannot be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for category in &event.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "event category name cannot be empty".to_string(),
            ));
        }
        if !seen.insert(category.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate event category: {}",
                category.name
            )));
        }
        if category.price < Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "price for {} cannot be negative",
                category.name
            )));
        }
    }

    for required in [GENERAL_ADMISSION, VIP] {
        if !seen.contains(required) {
            return Err(ConfigError::ValidationError(format!(
                "event must define a {} category",
                required
            )));
        }
    }

    Ok(())
}
