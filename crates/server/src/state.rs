use std::sync::Arc;
use boxoffice_core::{BoxOffice, Config};

/// Shared application state
pub struct AppState {
    config: Config,
    box_office: Arc<BoxOffice>,
}

impl AppState {
    pub fn new(config: Config, box_office: Arc<BoxOffice>) -> Self {
        Self { config, box_office }
    }

    /// Build state with a fresh box office seeded from the configured event.
    pub fn from_config(config: Config) -> Self {
        let box_office = Arc::new(BoxOffice::new(config.event.to_event()));
        Self::new(config, box_office)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn box_office(&self) -> &BoxOffice {
        self.box_office.as_ref()
    }
}
