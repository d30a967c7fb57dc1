use axum::routing::get;
use axum::Router;

use crate::handlers::dishes;
use crate::state::AppState;

/// Dish routes mounted at `/api/dishes`.
///
/// ```text
/// GET    /        -> list_dishes
/// POST   /        -> create_dish
/// GET    /{id}    -> get_dish
/// PUT    /{id}    -> update_dish
/// DELETE /{id}    -> delete_dish
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dishes::list_dishes).post(dishes::create_dish))
        .route(
            "/{id}",
            get(dishes::get_dish)
                .put(dishes::update_dish)
                .delete(dishes::delete_dish),
        )
}
