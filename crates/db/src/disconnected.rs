//! Placeholder store installed when startup could not build a real one.
//!
//! The process keeps serving; every data operation fails with the
//! bootstrap error so clients see a storage failure per request.

use async_trait::async_trait;
use cloudkitchen_core::dish::{Dish, DishInput};

use crate::error::{StoreError, StoreResult};
use crate::store::DishStore;

pub struct DisconnectedStore {
    reason: String,
}

impl DisconnectedStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable<T>(&self) -> StoreResult<T> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl DishStore for DisconnectedStore {
    async fn insert(&self, _input: DishInput) -> StoreResult<Dish> {
        self.unavailable()
    }

    async fn list(&self) -> StoreResult<Vec<Dish>> {
        self.unavailable()
    }

    async fn find(&self, _id: &str) -> StoreResult<Option<Dish>> {
        self.unavailable()
    }

    async fn update(&self, _id: &str, _input: DishInput) -> StoreResult<Option<Dish>> {
        self.unavailable()
    }

    async fn delete(&self, _id: &str) -> StoreResult<bool> {
        self.unavailable()
    }

    async fn ping(&self) -> StoreResult<()> {
        self.unavailable()
    }

    fn backend(&self) -> &'static str {
        "disconnected"
    }
}
