//! Behavioural tests for the in-memory dish store.
//!
//! These exercise the `DishStore` contract the HTTP layer relies on: id
//! assignment, update semantics, and delete results.

use assert_matches::assert_matches;
use cloudkitchen_core::dish::DishInput;
use cloudkitchen_db::{DishStore, MemoryDishStore, StoreError};

fn input(name: &str, category: &str, price: f64) -> DishInput {
    DishInput {
        name: name.into(),
        category: category.into(),
        price,
    }
}

const UNKNOWN_ID: &str = "000000000000000000000000";

// ---------------------------------------------------------------------------
// Insert / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_assigns_id_and_defaults() {
    let store = MemoryDishStore::new();
    let dish = store.insert(input("Burger", "Fast Food", 9.99)).await.unwrap();

    assert_eq!(dish.id.len(), 24);
    assert!(dish.available);
    assert_eq!(dish.price, 9.99);
    assert_eq!(dish.created_at, dish.updated_at);
}

#[tokio::test]
async fn inserted_dish_is_findable_and_listed() {
    let store = MemoryDishStore::new();
    let first = store.insert(input("Burger", "Fast Food", 9.99)).await.unwrap();
    let second = store.insert(input("Salad", "Healthy", 6.5)).await.unwrap();

    let found = store.find(&first.id).await.unwrap();
    assert_eq!(found, Some(first.clone()));

    let all = store.list().await.unwrap();
    let ids: Vec<_> = all.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
}

#[tokio::test]
async fn list_is_empty_for_new_store() {
    let store = MemoryDishStore::new();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn find_unknown_id_returns_none() {
    let store = MemoryDishStore::new();
    assert_eq!(store.find(UNKNOWN_ID).await.unwrap(), None);
}

#[tokio::test]
async fn malformed_id_is_rejected_everywhere() {
    let store = MemoryDishStore::new();

    assert_matches!(store.find("abc").await, Err(StoreError::InvalidId(_)));
    assert_matches!(
        store.update("abc", input("A", "B", 1.0)).await,
        Err(StoreError::InvalidId(_))
    );
    assert_matches!(store.delete("abc").await, Err(StoreError::InvalidId(_)));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_overwrites_fields_and_keeps_identity() {
    let store = MemoryDishStore::new();
    let original = store.insert(input("Burger", "Fast Food", 9.99)).await.unwrap();

    let updated = store
        .update(&original.id, input("Cheeseburger", "Grill", 11.5))
        .await
        .unwrap()
        .expect("dish should exist");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Cheeseburger");
    assert_eq!(updated.category, "Grill");
    assert_eq!(updated.price, 11.5);
    assert!(updated.available);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);

    let stored = store.find(&original.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
    let store = MemoryDishStore::new();
    let result = store.update(UNKNOWN_ID, input("A", "B", 1.0)).await.unwrap();
    assert_eq!(result, None);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_reports_whether_a_record_was_removed() {
    let store = MemoryDishStore::new();
    let dish = store.insert(input("Burger", "Fast Food", 9.99)).await.unwrap();

    assert!(store.delete(&dish.id).await.unwrap());
    assert!(!store.delete(&dish.id).await.unwrap());
    assert_eq!(store.find(&dish.id).await.unwrap(), None);
}

#[tokio::test]
async fn uppercase_hex_id_matches() {
    let store = MemoryDishStore::new();
    let dish = store.insert(input("Burger", "Fast Food", 9.99)).await.unwrap();

    let found = store.find(&dish.id.to_uppercase()).await.unwrap();
    assert_eq!(found.map(|d| d.id), Some(dish.id));
}
