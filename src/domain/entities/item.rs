//! Item entity representing a catalog entry.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A catalog item.
///
/// The identifier and creation timestamp are assigned once at creation and
/// never change afterwards. Every other field is replaced wholesale on
/// update; there is no partial-field merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with a freshly generated identifier and the
    /// current wall-clock time as its creation timestamp.
    pub fn new(name: String, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_at: Utc::now(),
        }
    }

    /// Builds the full-replacement update of this item.
    ///
    /// The identifier and creation timestamp are carried over from `self`;
    /// name and price always come from the caller together. Fields are never
    /// mutated in place.
    pub fn replacing(&self, name: String, price: f64) -> Self {
        Self {
            id: self.id,
            name,
            price,
            created_at: self.created_at,
        }
    }
}
