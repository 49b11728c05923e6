use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use crate::inventory::{Event, TicketCategory, GENERAL_ADMISSION, VIP};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub event: EventConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    4000
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins. `"*"` reflects the caller's origin back, which keeps
    /// credentialed requests working.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// The event on sale and its initial inventory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            date: default_date(),
            categories: default_categories(),
        }
    }
}

impl EventConfig {
    /// Build the initial event state.
    pub fn to_event(&self) -> Event {
        Event {
            title: self.title.clone(),
            date: self.date.clone(),
            categories: self
                .categories
                .iter()
                .map(|c| TicketCategory::new(c.name.clone(), c.price, c.available))
                .collect(),
        }
    }
}

fn default_title() -> String {
    "Rock Concert".to_string()
}

fn default_date() -> String {
    "2024-12-31".to_string()
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            name: GENERAL_ADMISSION.to_string(),
            price: Decimal::from(50),
            available: 100,
        },
        CategoryConfig {
            name: VIP.to_string(),
            price: Decimal::from(150),
            available: 50,
        },
    ]
}

/// One ticket category
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryConfig {
    pub name: String,
    pub price: Decimal,
    pub available: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert!(config.cors.allows_any_origin());
        assert_eq!(config.event.title, "Rock Concert");
        assert_eq!(config.event.date, "2024-12-31");
        assert_eq!(config.event.categories.len(), 2);
    }

    #[test]
    fn test_deserialize_server_section() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_deserialize_event_categories() {
        let toml = r#"
[event]
title = "Jazz Night"
date = "2025-06-01"

[[event.categories]]
name = "general_admission"
price = 25.5
available = 10

[[event.categories]]
name = "vip"
price = 80
available = 2
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let event = config.event.to_event();
        assert_eq!(event.title, "Jazz Night");
        assert_eq!(event.categories[0].price, Decimal::new(255, 1));
        assert_eq!(event.categories[1].price, Decimal::from(80));
        assert_eq!(event.available(VIP), Some(2));
    }

    #[test]
    fn test_deserialize_cors_origins() {
        let toml = r#"
[cors]
allowed_origins = ["http://localhost:3000"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.cors.allows_any_origin());
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_default_event_matches_initial_inventory() {
        let event = EventConfig::default().to_event();
        assert_eq!(event.available(GENERAL_ADMISSION), Some(100));
        assert_eq!(event.available(VIP), Some(50));
        assert_eq!(event.category(VIP).unwrap().price, Decimal::from(150));
    }
}
