//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. The catalog has a single entity:
//!
//! - [`Item`] - A catalog entry with a write-once identifier and timestamp
//!
//! Updates go through [`Item::replacing`], which constructs a new value from
//! the old one rather than mutating fields in place.

pub mod item;

pub use item::Item;
