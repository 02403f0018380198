use std::sync::Arc;

use crate::domain::repositories::ItemRepository;
use crate::health::HealthRegistry;

/// Shared application state injected into every handler.
///
/// Both members are constructed once at startup and passed in explicitly;
/// there is no ambient global lookup. Handlers never cache entities across
/// requests, so this is the only cross-request state in the process.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
    pub health: Arc<HealthRegistry>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>, health: Arc<HealthRegistry>) -> Self {
        Self { items, health }
    }
}
