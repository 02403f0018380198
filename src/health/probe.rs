//! Health probe trait and status values.

use async_trait::async_trait;
use std::fmt;

/// Tag selecting the probes evaluated by the readiness endpoint.
pub const READY_TAG: &str = "ready";

/// Outcome of a health evaluation.
///
/// Ordered from best to worst; aggregation across probes takes the worst
/// value. The string forms are part of the report contract consumed by
/// external probing infrastructure and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Unhealthy => "Unhealthy",
        }
    }

    /// Returns the worse of the two statuses.
    pub fn worst(self, other: HealthStatus) -> HealthStatus {
        self.max(other)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, tagged dependency check evaluated on demand.
///
/// Probes report dependency connectivity for the readiness report. A probe
/// signals failure by returning an error; the registry captures the message
/// as report data and never lets it propagate.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Probe name as it appears in the readiness report.
    fn name(&self) -> &str;

    /// Tags controlling which endpoints evaluate this probe.
    fn tags(&self) -> &[&'static str];

    /// Evaluates the probe once.
    async fn check(&self) -> anyhow::Result<()>;
}
