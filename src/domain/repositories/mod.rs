//! Repository trait definitions for the domain layer.
//!
//! Repository interfaces abstract data access behind narrow capability
//! traits implemented by concrete repositories in the infrastructure layer.
//! Handlers depend on the traits only, never on a driver type.

pub mod item_repository;

pub use item_repository::ItemRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
