//! Wallet provider: builds wallet sessions from configuration
//!
//! In live mode the session is connected to whatever address the client
//! reports; in mock mode every session is connected to the configured
//! development address regardless of what the client sends.

use crate::config::WalletConfig;
use crate::core::{ArenaError, ArenaResult};
use amicoin_types::{Chain, WalletSession};
use serde::Serialize;

/// Public wallet settings handed to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDescriptor {
    pub app_name: String,
    pub project_id: String,
    pub default_chain_id: u64,
    pub chains: Vec<Chain>,
    pub mock: bool,
}

pub struct WalletProvider {
    config: WalletConfig,
}

impl WalletProvider {
    pub fn new(config: WalletConfig) -> Self {
        Self { config }
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock_address.is_some()
    }

    /// Build a session for a client-reported address and chain
    pub fn resolve(&self, address: Option<&str>, chain_id: Option<u64>) -> WalletSession {
        let address = match &self.config.mock_address {
            Some(mock) => Some(mock.as_str()),
            None => address.map(str::trim).filter(|a| !a.is_empty()),
        };

        match address {
            Some(address) => {
                let chain = Chain::from_id(chain_id.unwrap_or(self.config.default_chain_id));
                WalletSession::connected(address, chain)
            }
            None => WalletSession::Disconnected,
        }
    }

    /// Check that a session may mint, returning the payout address and chain
    pub fn ensure_mintable<'a>(
        &self,
        session: &'a WalletSession,
    ) -> ArenaResult<(&'a str, &'a Chain)> {
        let (Some(address), Some(chain)) = (session.address(), session.chain()) else {
            return Err(ArenaError::validation("Connect a wallet to create a meme"));
        };

        if !chain.is_known() {
            return Err(ArenaError::validation(format!("Unknown chain {}", chain.id)));
        }
        if !self.config.chain_ids.contains(&chain.id) {
            return Err(ArenaError::validation(format!(
                "Chain {} is not supported for minting; switch to one of {:?}",
                chain.id, self.config.chain_ids
            )));
        }

        Ok((address, chain))
    }

    pub fn describe(&self) -> WalletDescriptor {
        WalletDescriptor {
            app_name: self.config.app_name.clone(),
            project_id: self.config.project_id.clone(),
            default_chain_id: self.config.default_chain_id,
            chains: self.config.chain_ids.iter().map(|id| Chain::from_id(*id)).collect(),
            mock: self.is_mock(),
        }
    }
}
