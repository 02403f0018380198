//! # Catalog Service
//!
//! A catalog item CRUD service backed by MongoDB, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Item` entity and repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB repository and probes
//! - **Health Layer** ([`health`]) - Liveness/readiness probe registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and routing
//!
//! ## Behavioral contract
//!
//! - Items are updated only by full replacement: name and price change together,
//!   the identifier and creation timestamp never do.
//! - Absence ("not found") is distinct from backend failure at every layer.
//! - `/health/live` reports process liveness without touching dependencies;
//!   `/health/ready` evaluates `ready`-tagged probes under a bounded wait and
//!   returns a structured worst-of-all report.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MONGODB_URI="mongodb://localhost:27017"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod health;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::Item;
    pub use crate::domain::repositories::ItemRepository;
    pub use crate::error::AppError;
    pub use crate::health::{HealthProbe, HealthRegistry, HealthStatus, READY_TAG};
    pub use crate::state::AppState;
}
