/// Errors raised while talking to the dish store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The path id is not a well-formed store identifier.
    #[error("Invalid dish id: {0}")]
    InvalidId(String),

    /// Any failure reported by the MongoDB driver.
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// The store could not be set up at startup; carries the bootstrap failure.
    #[error("Dish store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
