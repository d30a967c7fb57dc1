//! In-process dish store.
//!
//! Keeps dishes in insertion order behind a `tokio` lock and uses the same
//! ObjectId format as MongoDB, so path ids are validated identically. Used by
//! the test suites and for running the API without a database.

use async_trait::async_trait;
use chrono::Utc;
use cloudkitchen_core::dish::{Dish, DishInput};
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::store::{parse_id, DishStore};

#[derive(Default)]
pub struct MemoryDishStore {
    dishes: RwLock<Vec<Dish>>,
}

impl MemoryDishStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DishStore for MemoryDishStore {
    async fn insert(&self, input: DishInput) -> StoreResult<Dish> {
        let now = Utc::now();
        let dish = Dish {
            id: ObjectId::new().to_hex(),
            name: input.name,
            price: input.price,
            category: input.category,
            available: true,
            created_at: now,
            updated_at: now,
        };

        self.dishes.write().await.push(dish.clone());
        Ok(dish)
    }

    async fn list(&self) -> StoreResult<Vec<Dish>> {
        Ok(self.dishes.read().await.clone())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Dish>> {
        let oid = parse_id(id)?.to_hex();
        let dishes = self.dishes.read().await;
        Ok(dishes.iter().find(|d| d.id == oid).cloned())
    }

    async fn update(&self, id: &str, input: DishInput) -> StoreResult<Option<Dish>> {
        let oid = parse_id(id)?.to_hex();
        let mut dishes = self.dishes.write().await;

        let Some(dish) = dishes.iter_mut().find(|d| d.id == oid) else {
            return Ok(None);
        };
        dish.name = input.name;
        dish.category = input.category;
        dish.price = input.price;
        dish.updated_at = Utc::now();

        Ok(Some(dish.clone()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_id(id)?.to_hex();
        let mut dishes = self.dishes.write().await;

        let before = dishes.len();
        dishes.retain(|d| d.id != oid);
        Ok(dishes.len() < before)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
