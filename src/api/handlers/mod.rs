//! HTTP request handlers for API endpoints.

pub mod health;
pub mod items;

pub use health::{liveness_handler, readiness_handler};
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
