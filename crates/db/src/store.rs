//! The record store seam between the HTTP layer and the database.

use async_trait::async_trait;
use cloudkitchen_core::dish::{Dish, DishInput};
use mongodb::bson::oid::ObjectId;

use crate::error::{StoreError, StoreResult};

/// Persistence operations for dishes.
///
/// Implementations own id assignment and the `createdAt` / `updatedAt`
/// timestamps. Callers never set `available`; it is `true` on insert and
/// left alone by update.
#[async_trait]
pub trait DishStore: Send + Sync {
    /// Insert a new dish and return it with its generated id and timestamps.
    async fn insert(&self, input: DishInput) -> StoreResult<Dish>;

    /// List every dish in insertion order.
    async fn list(&self) -> StoreResult<Vec<Dish>>;

    /// Find a dish by id.
    async fn find(&self, id: &str) -> StoreResult<Option<Dish>>;

    /// Overwrite `name`, `category` and `price`, returning the updated dish.
    ///
    /// Returns `Ok(None)` when no dish has the given id.
    async fn update(&self, id: &str, input: DishInput) -> StoreResult<Option<Dish>>;

    /// Delete a dish. Returns whether a record was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> StoreResult<()>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

/// Parse a path id into an [`ObjectId`].
pub(crate) fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_hex_object_id() {
        let oid = parse_id("65a1b2c3d4e5f60718293a4b").unwrap();
        assert_eq!(oid.to_hex(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn rejects_short_id() {
        assert_matches!(parse_id("123"), Err(StoreError::InvalidId(id)) if id == "123");
    }

    #[test]
    fn rejects_non_hex_id() {
        assert_matches!(
            parse_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(StoreError::InvalidId(_))
        );
    }
}
