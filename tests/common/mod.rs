#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use catalog_service::api::routes::routes;
use catalog_service::domain::entities::Item;
use catalog_service::domain::repositories::ItemRepository;
use catalog_service::error::AppError;
use catalog_service::health::{HealthProbe, HealthRegistry};
use catalog_service::state::AppState;

/// In-memory repository backing the handler integration tests.
///
/// Mirrors the backend contract: absence is `Ok(None)`/`Ok(false)`, never an
/// error, and update/delete report whether anything matched.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<HashMap<Uuid, Item>>,
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, AppError> {
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, item: Item) -> Result<(), AppError> {
        self.items.lock().unwrap().insert(item.id, item);
        Ok(())
    }

    async fn update(&self, item: Item) -> Result<bool, AppError> {
        let mut items = self.items.lock().unwrap();
        match items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.items.lock().unwrap().remove(&id).is_some())
    }
}

/// Builds application state over an in-memory repository and the given
/// health registry.
pub fn make_state(registry: HealthRegistry) -> AppState {
    AppState::new(
        Arc::new(InMemoryItemRepository::default()),
        Arc::new(registry),
    )
}

/// Test server with the full routing table and an empty (healthy) registry.
pub fn make_server() -> TestServer {
    make_server_with_probes(Vec::new(), Duration::from_secs(3))
}

/// Test server with the full routing table and the given readiness probes.
pub fn make_server_with_probes(
    probes: Vec<Arc<dyn HealthProbe>>,
    probe_timeout: Duration,
) -> TestServer {
    let mut registry = HealthRegistry::new(probe_timeout);
    for probe in probes {
        registry = registry.register(probe);
    }

    let app = routes().with_state(make_state(registry));
    TestServer::new(app).unwrap()
}
