//! MongoDB-backed repository implementations.

pub mod mongo_item_repository;

pub use mongo_item_repository::MongoItemRepository;
