use std::sync::Arc;

use crate::config::Config;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable after startup; shared across requests.
    pub templates: Arc<TemplateRegistry>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            templates: Arc::new(TemplateRegistry::with_defaults()),
        }
    }
}
