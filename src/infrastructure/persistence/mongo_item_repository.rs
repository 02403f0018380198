//! MongoDB implementation of the item repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::Item;
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

const COLLECTION: &str = "items";

/// Persisted shape of an item.
///
/// Field names and encodings match the collection's existing documents:
/// the uuid is stored as a string under `_id` and the creation timestamp
/// as an RFC 3339 string.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "CreatedDate")]
    created_date: String,
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price,
            created_date: item.created_at.to_rfc3339(),
        }
    }
}

impl TryFrom<ItemDocument> for Item {
    type Error = AppError;

    fn try_from(doc: ItemDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id).map_err(|e| {
            AppError::internal(
                "Corrupt item document",
                json!({ "field": "_id", "message": e.to_string() }),
            )
        })?;
        let created_at = DateTime::parse_from_rfc3339(&doc.created_date)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| {
                AppError::internal(
                    "Corrupt item document",
                    json!({ "field": "CreatedDate", "message": e.to_string() }),
                )
            })?;

        Ok(Item {
            id,
            name: doc.name,
            price: doc.price,
            created_at,
        })
    }
}

/// MongoDB repository for catalog item storage and retrieval.
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Creates a new repository over the `items` collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    async fn list(&self) -> Result<Vec<Item>, AppError> {
        let documents: Vec<ItemDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;

        documents.into_iter().map(Item::try_from).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, AppError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await?;

        document.map(Item::try_from).transpose()
    }

    async fn create(&self, item: Item) -> Result<(), AppError> {
        self.collection.insert_one(ItemDocument::from(&item)).await?;
        Ok(())
    }

    async fn update(&self, item: Item) -> Result<bool, AppError> {
        let result = self
            .collection
            .replace_one(
                doc! { "_id": item.id.to_string() },
                ItemDocument::from(&item),
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
