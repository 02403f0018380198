//! Probe registry aggregating dependency checks into health reports.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::health::probe::{HealthProbe, HealthStatus, READY_TAG};

/// Result of evaluating a single probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub name: String,
    pub status: HealthStatus,
    /// Failure message when unhealthy; `None` when the probe passed.
    pub exception: Option<String>,
    /// Wall-clock time the evaluation took, including a timed-out wait.
    pub duration: Duration,
}

/// Aggregated health report.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub probes: Vec<ProbeReport>,
}

/// Holds the registered probes and evaluates them on demand.
///
/// The registry is immutable after startup; evaluation holds no locks, so
/// concurrent readiness requests do not serialize each other.
pub struct HealthRegistry {
    probes: Vec<Arc<dyn HealthProbe>>,
    probe_timeout: Duration,
}

impl HealthRegistry {
    /// Creates an empty registry with the given per-probe timeout.
    pub fn new(probe_timeout: Duration) -> Self {
        Self {
            probes: Vec::new(),
            probe_timeout,
        }
    }

    /// Registers a probe. Called during startup wiring only.
    pub fn register(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    /// Liveness report: the process is up by definition.
    ///
    /// No probes are evaluated; dependency state does not affect liveness.
    pub fn liveness(&self) -> HealthReport {
        HealthReport {
            status: HealthStatus::Healthy,
            probes: Vec::new(),
        }
    }

    /// Readiness report over all probes tagged `ready`.
    ///
    /// Each probe is bounded by the registry timeout; a slow probe is
    /// reported as unhealthy/timed-out rather than hanging the response.
    /// Overall status is the worst of all evaluated probes, `Healthy` when
    /// no probe carries the tag.
    pub async fn readiness(&self) -> HealthReport {
        let mut reports = Vec::new();
        let mut overall = HealthStatus::Healthy;

        for probe in self.probes.iter().filter(|p| p.tags().contains(&READY_TAG)) {
            let report = self.evaluate(probe.as_ref()).await;
            overall = overall.worst(report.status);
            reports.push(report);
        }

        HealthReport {
            status: overall,
            probes: reports,
        }
    }

    async fn evaluate(&self, probe: &dyn HealthProbe) -> ProbeReport {
        let started = Instant::now();

        let (status, exception) =
            match tokio::time::timeout(self.probe_timeout, probe.check()).await {
                Ok(Ok(())) => (HealthStatus::Healthy, None),
                Ok(Err(e)) => (HealthStatus::Unhealthy, Some(e.to_string())),
                Err(_) => (
                    HealthStatus::Unhealthy,
                    Some(format!(
                        "probe timed out after {}s",
                        self.probe_timeout.as_secs_f64()
                    )),
                ),
            };

        if let Some(message) = &exception {
            tracing::warn!(probe = probe.name(), %message, "Health probe failed");
        }

        ProbeReport {
            name: probe.name().to_string(),
            status,
            exception,
            duration: started.elapsed(),
        }
    }
}

/// Formats a duration as `hh:mm:ss.fffffff`.
///
/// This is the format external probing tooling already parses; the seven
/// fractional digits are 100 ns ticks.
pub fn format_duration(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let ticks = d.subsec_nanos() / 100;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{ticks:07}")
}
