//! HTTP server initialization and runtime setup.
//!
//! Handles MongoDB client construction, dependency wiring, and the Axum
//! server lifecycle. This is the single initialization point: repository,
//! probes, and state are constructed here and injected explicitly.

use crate::config::Config;
use crate::health::HealthRegistry;
use crate::infrastructure::persistence::MongoItemRepository;
use crate::infrastructure::probes::MongoPingProbe;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use mongodb::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client and database handle
/// - Item repository
/// - Health registry with the MongoDB readiness probe
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The MongoDB URI cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.mongo_database);
    tracing::info!("MongoDB client initialized");

    let items = Arc::new(MongoItemRepository::new(&db));

    let health = Arc::new(
        HealthRegistry::new(Duration::from_secs(config.ready_probe_timeout_secs))
            .register(Arc::new(MongoPingProbe::new(db))),
    );

    let state = AppState::new(items, health);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
///
/// In-flight requests are allowed to complete before the server exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
