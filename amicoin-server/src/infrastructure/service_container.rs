//! Service container for dependency injection

use crate::adapters::{minter::build_minter, storage::build_store};
use crate::api::ApiState;
use crate::config::ServerConfig;
use crate::core::{ArenaError, ArenaResult, CoinMinter, MemeStore};
use crate::domain::{MemeLauncher, MemeRegistry, VoteLedger, WalletProvider};
use std::sync::Arc;
use tracing::info;

/// Service container managing all dependencies
pub struct ServiceContainer {
    /// Configuration
    pub config: ServerConfig,

    /// Backing store for memes and votes
    pub store: Arc<dyn MemeStore>,

    pub minter: Arc<dyn CoinMinter>,
    pub registry: Arc<MemeRegistry>,
    pub ledger: Arc<VoteLedger>,
    pub wallet: Arc<WalletProvider>,
    pub launcher: Arc<MemeLauncher>,
}

impl ServiceContainer {
    /// Initialize the service container with all dependencies
    pub async fn new(config: ServerConfig) -> ArenaResult<Self> {
        info!("Initializing service container");

        let store = build_store(&config).await?;
        info!("Storage backend {:?} initialized", config.storage.backend);

        Self::with_store(config, store)
    }

    /// Wire services around an already constructed store
    pub fn with_store(config: ServerConfig, store: Arc<dyn MemeStore>) -> ArenaResult<Self> {
        let minter = build_minter(&config.minter)?;
        info!("Using {} coin minter", minter.name());

        let registry = Arc::new(MemeRegistry::new(store.clone()));
        let ledger = Arc::new(VoteLedger::new(store.clone(), config.voting.policy));
        let wallet = Arc::new(WalletProvider::new(config.wallet.clone()));
        if wallet.is_mock() {
            info!("Wallet sessions use the configured mock address");
        }
        let launcher = Arc::new(MemeLauncher::new(
            registry.clone(),
            minter.clone(),
            wallet.clone(),
        ));

        Ok(Self {
            config,
            store,
            minter,
            registry,
            ledger,
            wallet,
            launcher,
        })
    }

    /// Perform health check on all services
    pub async fn health_check(&self) -> ArenaResult<()> {
        let health = self.store.health_check().await?;

        if !health.is_healthy() {
            return Err(ArenaError::Configuration(format!(
                "Health check failed: {} store is unreachable",
                health.backend
            )));
        }

        info!("All services healthy");
        Ok(())
    }

    /// State shared by every HTTP handler
    pub fn api_state(&self) -> ApiState {
        ApiState {
            registry: self.registry.clone(),
            ledger: self.ledger.clone(),
            launcher: self.launcher.clone(),
            wallet: self.wallet.clone(),
            store: self.store.clone(),
        }
    }
}
