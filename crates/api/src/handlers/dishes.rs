//! Handlers for the dish API.
//!
//! Each handler validates its input, performs one store call, and returns
//! the dish JSON directly (no response envelope).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cloudkitchen_core::dish::DishRequest;
use cloudkitchen_core::error::CoreError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Body returned by `DELETE /api/dishes/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Dish", id })
}

/// POST /api/dishes
///
/// Create a dish. `price` may be sent as a number or a numeric string.
pub async fn create_dish(
    State(state): State<AppState>,
    AppJson(body): AppJson<DishRequest>,
) -> AppResult<impl IntoResponse> {
    let input = body.validate()?;

    let dish = state
        .store
        .insert(input)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to create dish"))?;

    tracing::info!(dish_id = %dish.id, name = %dish.name, "Dish created");

    Ok((StatusCode::CREATED, Json(dish)))
}

/// GET /api/dishes
pub async fn list_dishes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dishes = state.store.list().await?;

    Ok(Json(dishes))
}

/// GET /api/dishes/{id}
pub async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dish = state
        .store
        .find(&id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(dish))
}

/// PUT /api/dishes/{id}
///
/// Overwrite `name`, `category` and `price`. `available` and `createdAt`
/// are left as stored.
pub async fn update_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<DishRequest>,
) -> AppResult<impl IntoResponse> {
    let input = body.validate()?;

    let dish = state
        .store
        .update(&id, input)
        .await
        .inspect_err(|e| tracing::error!(dish_id = %id, error = %e, "Failed to update dish"))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(dish_id = %dish.id, "Dish updated");

    Ok(Json(dish))
}

/// DELETE /api/dishes/{id}
///
/// Succeeds whether or not the dish existed.
pub async fn delete_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete(&id).await?;

    tracing::info!(dish_id = %id, deleted, "Dish delete requested");

    Ok(Json(MessageResponse {
        message: "Dish deleted",
    }))
}
