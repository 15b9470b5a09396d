//! Wallet session model
//!
//! A session is either connected to an address on a chain or disconnected.
//! Whether the address comes from a real wallet or from a configured
//! development address is decided by whoever builds the session.

use crate::chain::Chain;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum WalletSession {
    Connected { address: String, chain: Chain },
    Disconnected,
}

impl WalletSession {
    pub fn connected(address: impl Into<String>, chain: Chain) -> Self {
        WalletSession::Connected {
            address: address.into(),
            chain,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { address, .. } => Some(address),
            WalletSession::Disconnected => None,
        }
    }

    pub fn chain(&self) -> Option<&Chain> {
        match self {
            WalletSession::Connected { chain, .. } => Some(chain),
            WalletSession::Disconnected => None,
        }
    }
}
