//! Domain layer containing business entities and data-access contracts.
//!
//! This layer has no knowledge of HTTP or MongoDB; it defines what a catalog
//! item is and what operations persistence must support.

pub mod entities;
pub mod repositories;
