//! Coin minting adapters for the `CoinMinter` port

mod http;
mod mock;

pub use http::HttpCoinMinter;
pub use mock::MockCoinMinter;

use crate::config::{MinterConfig, MinterMode};
use crate::core::{ArenaResult, CoinMinter};
use std::sync::Arc;

/// Build the minter selected by `minter.mode`
pub fn build_minter(config: &MinterConfig) -> ArenaResult<Arc<dyn CoinMinter>> {
    match config.mode {
        MinterMode::Mock => Ok(Arc::new(MockCoinMinter::new())),
        MinterMode::Http => Ok(Arc::new(HttpCoinMinter::new(config)?)),
    }
}
