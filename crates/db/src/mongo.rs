//! MongoDB-backed dish store.

use std::time::Duration;

use async_trait::async_trait;
use cloudkitchen_core::dish::{Dish, DishInput};
use cloudkitchen_core::types::Timestamp;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime as BsonDateTime};
use mongodb::options::{
    Acknowledgment, ClientOptions, ReadPreference, ReturnDocument, SelectionCriteria,
    WriteConcern,
};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::store::{parse_id, DishStore};

/// Collection holding dish documents.
pub const DISH_COLLECTION: &str = "dishes";

/// A document in the `dishes` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DishDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    price: f64,
    category: String,
    available: bool,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl From<DishDocument> for Dish {
    fn from(doc: DishDocument) -> Self {
        Dish {
            id: doc.id.to_hex(),
            name: doc.name,
            price: doc.price,
            category: doc.category,
            available: doc.available,
            created_at: to_timestamp(doc.created_at),
            updated_at: to_timestamp(doc.updated_at),
        }
    }
}

/// Convert a BSON date, clamping values chrono cannot represent to the epoch.
fn to_timestamp(value: BsonDateTime) -> Timestamp {
    let millis = value.timestamp_millis();
    chrono::DateTime::from_timestamp_millis(millis).unwrap_or_else(|| {
        tracing::warn!(millis, "BSON date out of range, using the Unix epoch");
        Timestamp::default()
    })
}

/// Dish store backed by a MongoDB collection.
///
/// Cheap to clone; the driver client pools connections internally.
#[derive(Clone)]
pub struct MongoDishStore {
    database: Database,
    collection: Collection<DishDocument>,
}

impl MongoDishStore {
    /// Build a client for `uri` targeting the `database_name` database.
    ///
    /// Writes wait for majority acknowledgment, reads go to the primary, and
    /// server selection gives up after `server_selection_timeout`. No network
    /// traffic happens here; the driver connects on first use.
    pub async fn connect(
        uri: &str,
        database_name: &str,
        server_selection_timeout: Duration,
    ) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.retry_writes = Some(true);
        options.write_concern = Some(
            WriteConcern::builder()
                .w(Acknowledgment::Majority)
                .build(),
        );
        options.selection_criteria = Some(SelectionCriteria::ReadPreference(
            ReadPreference::Primary,
        ));
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(database_name);
        let collection = database.collection::<DishDocument>(DISH_COLLECTION);

        tracing::debug!(database = database_name, "MongoDB client created");

        Ok(Self {
            database,
            collection,
        })
    }
}

#[async_trait]
impl DishStore for MongoDishStore {
    async fn insert(&self, input: DishInput) -> StoreResult<Dish> {
        let now = BsonDateTime::now();
        let document = DishDocument {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
            category: input.category,
            available: true,
            created_at: now,
            updated_at: now,
        };

        self.collection.insert_one(&document).await?;
        Ok(document.into())
    }

    async fn list(&self) -> StoreResult<Vec<Dish>> {
        let documents: Vec<DishDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Dish::from).collect())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Dish>> {
        let oid = parse_id(id)?;
        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(Dish::from))
    }

    async fn update(&self, id: &str, input: DishInput) -> StoreResult<Option<Dish>> {
        let oid = parse_id(id)?;
        let update = doc! {
            "$set": {
                "name": input.name.as_str(),
                "category": input.category.as_str(),
                "price": input.price,
                "updatedAt": BsonDateTime::now(),
            }
        };

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await?;

        Ok(document.map(Dish::from))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongo"
    }
}
