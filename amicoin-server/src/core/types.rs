//! Core value types shared by ports and domain services

use serde::{Deserialize, Serialize};

/// How repeated votes from the same voter are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotePolicy {
    /// Any voter may vote any number of times for any meme
    #[default]
    Unrestricted,
    /// A voter may vote at most once for a given meme
    OncePerMeme,
}

/// Parameters sent to the coin minting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub name: String,
    pub symbol: String,
    /// Metadata URI of the coin; the meme image
    pub uri: String,
    pub payout_recipient: String,
    pub chain_id: u64,
}

/// Result of a successful mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintedCoin {
    pub address: String,
    #[serde(default)]
    pub transaction_hash: Option<String>,
}

/// Health status of the backing store
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealth {
    pub backend: &'static str,
    pub healthy: bool,
}

impl StorageHealth {
    pub fn is_healthy(&self) -> bool {
        self.healthy
    }
}
