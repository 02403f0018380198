//! Handlers for the liveness and readiness endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ReadinessResponse;
use crate::health::HealthStatus;
use crate::state::AppState;

/// Reports process liveness.
///
/// # Endpoint
///
/// `GET /health/live`
///
/// Always healthy by definition: no probes are evaluated, so dependency
/// outages never fail liveness. The body is the plain status string.
pub async fn liveness_handler(State(state): State<AppState>) -> String {
    state.health.liveness().status.to_string()
}

/// Reports dependency readiness.
///
/// # Endpoint
///
/// `GET /health/ready`
///
/// Evaluates every probe tagged `ready` and aggregates worst-of-all. The
/// structured report is always returned; probe failures become report data,
/// never errors.
///
/// # Response Codes
///
/// - **200 OK**: overall status Healthy or Degraded
/// - **503 Service Unavailable**: overall status Unhealthy (same body)
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let report = state.health.readiness().await;
    let unhealthy = report.status == HealthStatus::Unhealthy;

    let response = ReadinessResponse::from(report);

    if unhealthy {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    } else {
        Ok(Json(response))
    }
}
