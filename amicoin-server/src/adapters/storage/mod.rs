//! Storage adapters for the `MemeStore` port

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use crate::config::{ServerConfig, StorageBackend};
use crate::core::{ArenaResult, MemeStore};
use std::sync::Arc;
use tracing::info;

/// Build the store selected by `storage.backend`
pub async fn build_store(config: &ServerConfig) -> ArenaResult<Arc<dyn MemeStore>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let store = PostgresStore::connect(&config.database).await?;
            if config.database.run_migrations {
                store.run_migrations().await?;
            }
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            info!("Using in-memory store, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
