//! DTOs for the health endpoints.
//!
//! The readiness report shape is frozen: external probing infrastructure
//! parses these exact fields, including the `"none"` exception sentinel and
//! the `hh:mm:ss.fffffff` duration format.

use serde::Serialize;

use crate::health::registry::{HealthReport, ProbeReport, format_duration};

/// Readiness report returned by `GET /health/ready`.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: Vec<CheckEntry>,
}

/// Per-probe entry in the readiness report.
#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub name: String,
    pub status: String,
    /// Failure message, or the literal `"none"` when the probe passed.
    pub exception: String,
    pub duration: String,
}

impl From<ProbeReport> for CheckEntry {
    fn from(report: ProbeReport) -> Self {
        Self {
            name: report.name,
            status: report.status.to_string(),
            exception: report.exception.unwrap_or_else(|| "none".to_string()),
            duration: format_duration(report.duration),
        }
    }
}

impl From<HealthReport> for ReadinessResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status.to_string(),
            checks: report.probes.into_iter().map(CheckEntry::from).collect(),
        }
    }
}
