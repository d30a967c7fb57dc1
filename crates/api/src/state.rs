use cloudkitchen_db::SharedStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Dish record store, built once at startup.
    pub store: SharedStore,
}
