use std::sync::Arc;
use std::time::Duration;

pub mod disconnected;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod store;

pub use disconnected::DisconnectedStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryDishStore;
pub use mongo::MongoDishStore;
pub use store::DishStore;

/// Shared handle to whichever store the process is running with.
pub type SharedStore = Arc<dyn DishStore>;

/// Which [`DishStore`] implementation to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown dish store backend '{other}'")),
        }
    }
}

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// MongoDB connection string (`MONGO_URI`).
    pub mongo_uri: Option<String>,
    /// Logical database name (default: `cloudkitchen`).
    pub database_name: String,
    pub server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Load storage configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default        |
    /// |-----------------|----------------|
    /// | `DISH_STORE`    | `mongo`        |
    /// | `MONGO_URI`     | (none)         |
    /// | `MONGO_DB_NAME` | `cloudkitchen` |
    pub fn from_env() -> Self {
        let backend = parse_backend(std::env::var("DISH_STORE").ok().as_deref());

        let mongo_uri = std::env::var("MONGO_URI")
            .ok()
            .filter(|uri| !uri.trim().is_empty());

        let database_name =
            std::env::var("MONGO_DB_NAME").unwrap_or_else(|_| "cloudkitchen".into());

        Self {
            backend,
            mongo_uri,
            database_name,
            server_selection_timeout: Duration::from_secs(30),
        }
    }
}

/// Resolve `DISH_STORE`, falling back to MongoDB when unset or unrecognised.
fn parse_backend(raw: Option<&str>) -> StoreBackend {
    match raw.map(str::parse::<StoreBackend>) {
        None => StoreBackend::Mongo,
        Some(Ok(backend)) => backend,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid DISH_STORE, using mongo");
            StoreBackend::Mongo
        }
    }
}

/// Build the store described by `config`.
///
/// Never fails: if the MongoDB client cannot be created the error is logged
/// and a [`DisconnectedStore`] is returned so the server still starts. A
/// reachability ping runs in the background and only logs its outcome.
pub async fn bootstrap(config: &StoreConfig) -> SharedStore {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory dish store; data is lost on restart");
            Arc::new(MemoryDishStore::new())
        }
        StoreBackend::Mongo => match connect_mongo(config).await {
            Ok(store) => {
                spawn_startup_ping(store.clone());
                Arc::new(store)
            }
            Err(e) => {
                tracing::error!(error = %e, "MongoDB connection failed, serving without storage");
                let reason = match e {
                    StoreError::Unavailable(reason) => reason,
                    other => other.to_string(),
                };
                Arc::new(DisconnectedStore::new(reason))
            }
        },
    }
}

async fn connect_mongo(config: &StoreConfig) -> StoreResult<MongoDishStore> {
    let uri = config
        .mongo_uri
        .as_deref()
        .ok_or_else(|| StoreError::Unavailable("MONGO_URI is not set".into()))?;

    MongoDishStore::connect(uri, &config.database_name, config.server_selection_timeout).await
}

fn spawn_startup_ping(store: MongoDishStore) {
    tokio::spawn(async move {
        match store.ping().await {
            Ok(()) => tracing::info!("MongoDB connected"),
            Err(e) => tracing::error!(error = %e, "MongoDB ping failed"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend: StoreBackend, mongo_uri: Option<&str>) -> StoreConfig {
        StoreConfig {
            backend,
            mongo_uri: mongo_uri.map(String::from),
            database_name: "cloudkitchen".into(),
            server_selection_timeout: Duration::from_millis(100),
        }
    }

    #[test]
    fn backend_parses_case_insensitively() {
        assert_eq!("Mongo".parse::<StoreBackend>(), Ok(StoreBackend::Mongo));
        assert_eq!("mongodb".parse::<StoreBackend>(), Ok(StoreBackend::Mongo));
        assert_eq!(" memory ".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("postgres".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn unknown_or_missing_backend_falls_back_to_mongo() {
        assert_eq!(parse_backend(None), StoreBackend::Mongo);
        assert_eq!(parse_backend(Some("mongdb")), StoreBackend::Mongo);
        assert_eq!(parse_backend(Some("")), StoreBackend::Mongo);
        assert_eq!(parse_backend(Some("memory")), StoreBackend::Memory);
    }

    #[tokio::test]
    async fn memory_backend_bootstraps_memory_store() {
        let store = bootstrap(&config(StoreBackend::Memory, None)).await;
        assert_eq!(store.backend(), "memory");
    }

    #[tokio::test]
    async fn missing_uri_falls_back_to_disconnected_store() {
        let store = bootstrap(&config(StoreBackend::Mongo, None)).await;
        assert_eq!(store.backend(), "disconnected");

        let err = store.list().await.unwrap_err();
        assert!(err.to_string().contains("MONGO_URI is not set"));
    }

    #[tokio::test]
    async fn malformed_uri_falls_back_to_disconnected_store() {
        let store = bootstrap(&config(StoreBackend::Mongo, Some("http://nope"))).await;
        assert_eq!(store.backend(), "disconnected");
        assert!(store.ping().await.is_err());
    }
}
