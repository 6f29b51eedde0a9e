//! Application state for axum handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::services::ServiceFactory;

/// State shared across all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(services: ServiceFactory, settings: Settings) -> Self {
        Self {
            services: Arc::new(services),
            settings: Arc::new(settings),
        }
    }
}
