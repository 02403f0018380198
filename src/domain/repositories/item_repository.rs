//! Repository trait for catalog item data access.

use crate::domain::entities::Item;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing catalog items.
///
/// This is the one seam in the system deliberately designed for
/// substitutability: handlers only see this trait, and the persistence
/// backend is injected at startup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoItemRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists all items.
    ///
    /// No pagination or filtering; ordering is whatever the backend returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn list(&self) -> Result<Vec<Item>, AppError>;

    /// Finds an item by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Item))` if found
    /// - `Ok(None)` if not found
    ///
    /// Absence is not an error; a backend failure must never be reported
    /// as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn get(&self, id: Uuid) -> Result<Option<Item>, AppError>;

    /// Persists a fully-populated item.
    ///
    /// The identifier and creation timestamp must already be set by the
    /// caller; the repository never generates either.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn create(&self, item: Item) -> Result<(), AppError>;

    /// Replaces the stored item matching `item.id`, wholesale.
    ///
    /// Returns `Ok(true)` if a stored item was replaced, `Ok(false)` if no
    /// item with that identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn update(&self, item: Item) -> Result<bool, AppError>;

    /// Removes the item with the given identifier, if present.
    ///
    /// Returns `Ok(true)` if an item was removed, `Ok(false)` if nothing
    /// matched. This is a single conditional operation keyed on the
    /// identifier, so callers need no separate existence check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
