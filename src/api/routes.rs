//! API route configuration.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    liveness_handler, readiness_handler, update_item_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All application routes.
///
/// # Endpoints
///
/// - `GET    /items`         - List all items
/// - `POST   /items`         - Create an item (201 + Location header)
/// - `GET    /items/{id}`    - Fetch a single item
/// - `PUT    /items/{id}`    - Replace an item's name and price
/// - `DELETE /items/{id}`    - Remove an item
/// - `GET    /health/live`   - Process liveness (never touches dependencies)
/// - `GET    /health/ready`  - Dependency readiness report
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
}
