//! Infrastructure layer: MongoDB persistence and dependency probes.
//!
//! Everything here implements a domain or health trait; nothing above this
//! layer touches the driver directly.

pub mod persistence;
pub mod probes;
