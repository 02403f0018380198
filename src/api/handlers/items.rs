//! Handlers for the item CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{CreateItemRequest, ItemResponse, UpdateItemRequest};
use crate::domain::entities::Item;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all items.
///
/// # Endpoint
///
/// `GET /items`
///
/// An empty catalog is a success (200 with an empty array). One info record
/// with the retrieved count is logged after retrieval completes, never on
/// error.
pub async fn list_items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = state.items.list().await?;

    tracing::info!(
        "{}: Retrieved {} items",
        Utc::now().format("%H:%M:%S"),
        items.len()
    );

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Returns a single item by identifier.
///
/// # Endpoint
///
/// `GET /items/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no item has this identifier. A syntactically
/// invalid identifier is rejected by path extraction before this handler
/// runs.
pub async fn get_item_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ItemResponse>, AppError> {
    match state.items.get(id).await? {
        Some(item) => Ok(Json(item.into())),
        None => Err(AppError::not_found("Item not found", json!({ "id": id }))),
    }
}

/// Creates a new item.
///
/// # Endpoint
///
/// `POST /items`
///
/// The identifier and creation timestamp are generated here, before the
/// repository call; the repository never assigns either. The response is
/// 201 Created with a `Location` header pointing at the new resource.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ItemResponse>), AppError> {
    payload.validate()?;

    let item = Item::new(payload.name, payload.price);
    state.items.create(item.clone()).await?;

    let location = format!("/items/{}", item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item.into()),
    ))
}

/// Replaces an existing item's name and price.
///
/// # Endpoint
///
/// `PUT /items/{id}`
///
/// The existing item is read first; its identifier and creation timestamp
/// are carried unchanged into the replacement. If the stored item vanishes
/// between the read and the replace, the unmatched write is reported as 404
/// rather than silently succeeding.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier does not exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_item_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let existing = state
        .items
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Item not found", json!({ "id": id })))?;

    let updated = existing.replacing(payload.name, payload.price);

    if !state.items.update(updated).await? {
        return Err(AppError::not_found("Item not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an item.
///
/// # Endpoint
///
/// `DELETE /items/{id}`
///
/// The repository delete is a single conditional operation keyed on the
/// identifier, so no separate existence read is needed and a racing delete
/// cannot slip between check and act. Deleting an absent identifier reports
/// 404 every time.
pub async fn delete_item_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    if !state.items.delete(id).await? {
        return Err(AppError::not_found("Item not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}
