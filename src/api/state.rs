use std::sync::Arc;

use crate::calendly::CalendlyClient;
use crate::core::AppConfig;

pub type SharedState = Arc<AppState>;

/// Read-only for the life of the process, so handlers share it without
/// locking
pub struct AppState {
    pub config: AppConfig,
    pub calendly: CalendlyClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let calendly = CalendlyClient::new(&config);
        Self { config, calendly }
    }
}
