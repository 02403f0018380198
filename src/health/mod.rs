//! Health reporting: named dependency probes and their aggregation.
//!
//! Liveness ("the process can serve requests") and readiness ("the process's
//! dependencies are reachable") have distinct semantics:
//!
//! - [`HealthRegistry::liveness`] evaluates nothing and always reports healthy
//! - [`HealthRegistry::readiness`] evaluates probes tagged [`probe::READY_TAG`]
//!   under a bounded wait and aggregates worst-of-all
//!
//! Probe failures become report data, never errors; the readiness endpoint
//! always returns a structured report.

pub mod probe;
pub mod registry;

pub use probe::{HealthProbe, HealthStatus, READY_TAG};
pub use registry::{HealthRegistry, HealthReport, ProbeReport};
