//! Data Transfer Objects for request/response serialization.

pub mod health;
pub mod item;

pub use health::{CheckEntry, ReadinessResponse};
pub use item::{CreateItemRequest, ItemResponse, UpdateItemRequest};
