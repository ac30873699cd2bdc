//! # kku-storage
//!
//! Server-side stand-in for the browser's local storage: a per-client
//! key/value store behind [`kku_core::traits::LocalStorage`].

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::Store;

use std::sync::Arc;

use kku_core::config::StorageConfig;
use kku_core::error::GatewayError;
use kku_core::traits::LocalStorage;

/// Open the backend named by `config.backend`.
pub async fn open(config: &StorageConfig) -> Result<Arc<dyn LocalStorage>, GatewayError> {
    match config.backend.as_str() {
        "sqlite" => Ok(Arc::new(Store::new(config).await?)),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(GatewayError::Config(format!(
            "unsupported storage backend: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_backend() {
        let config = StorageConfig {
            backend: "memory".to_string(),
            db_path: String::new(),
        };
        let storage = open(&config).await.unwrap();
        assert_eq!(storage.name(), "memory");
    }

    #[tokio::test]
    async fn test_open_unknown_backend_fails() {
        let config = StorageConfig {
            backend: "redis".to_string(),
            db_path: String::new(),
        };
        assert!(matches!(open(&config).await, Err(GatewayError::Config(_))));
    }
}
