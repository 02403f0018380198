//! DTOs for the item CRUD endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Item;

/// Request body for `POST /items`.
///
/// The identifier and creation timestamp are server-assigned and cannot be
/// supplied by the caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

/// Request body for `PUT /items/{id}`.
///
/// Always replaces name and price together; the identifier comes from the
/// path, never the body.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

/// JSON representation of an item, the only entity shape returned to callers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            created_date: item.created_at,
        }
    }
}
