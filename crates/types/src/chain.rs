//! Registry of EVM chains a wallet may connect to

use crate::constants::*;
use serde::Serialize;

/// Static description of an EVM chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub network: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: Option<&'static str>,
    pub testnet: bool,
}

impl Chain {
    const fn known(
        id: u64,
        name: &'static str,
        network: &'static str,
        rpc_url: &'static str,
        explorer_url: &'static str,
        testnet: bool,
    ) -> Self {
        Self {
            id,
            name,
            network,
            rpc_url,
            explorer_url: Some(explorer_url),
            testnet,
        }
    }

    /// Placeholder for a chain id the registry does not know about
    pub const fn unknown(id: u64) -> Self {
        Self {
            id,
            name: "Unknown",
            network: "unknown",
            rpc_url: "",
            explorer_url: None,
            testnet: false,
        }
    }

    /// Look up a chain by id
    pub fn by_id(id: u64) -> Option<Chain> {
        KNOWN_CHAINS.iter().find(|chain| chain.id == id).cloned()
    }

    /// Look up a chain by id, falling back to [`Chain::unknown`]
    pub fn from_id(id: u64) -> Chain {
        Self::by_id(id).unwrap_or_else(|| Self::unknown(id))
    }

    pub fn is_known(&self) -> bool {
        KNOWN_CHAINS.iter().any(|chain| chain.id == self.id)
    }
}

/// Every chain the wallet layer knows how to describe
pub const KNOWN_CHAINS: [Chain; 8] = [
    Chain::known(
        ETHEREUM_MAINNET_ID,
        "Ethereum",
        "homestead",
        "https://cloudflare-eth.com",
        "https://etherscan.io",
        false,
    ),
    Chain::known(
        POLYGON_ID,
        "Polygon",
        "matic",
        "https://polygon-rpc.com",
        "https://polygonscan.com",
        false,
    ),
    Chain::known(
        OPTIMISM_ID,
        "OP Mainnet",
        "optimism",
        "https://mainnet.optimism.io",
        "https://optimistic.etherscan.io",
        false,
    ),
    Chain::known(
        ARBITRUM_ID,
        "Arbitrum One",
        "arbitrum",
        "https://arb1.arbitrum.io/rpc",
        "https://arbiscan.io",
        false,
    ),
    Chain::known(
        BASE_ID,
        "Base",
        "base",
        "https://mainnet.base.org",
        "https://basescan.org",
        false,
    ),
    Chain::known(
        BASE_SEPOLIA_ID,
        "Base Sepolia",
        "base-sepolia",
        "https://sepolia.base.org",
        "https://sepolia.basescan.org",
        true,
    ),
    Chain::known(
        ZORA_ID,
        "Zora",
        "zora",
        "https://rpc.zora.energy",
        "https://explorer.zora.energy",
        false,
    ),
    Chain::known(
        ZORA_SEPOLIA_ID,
        "Zora Sepolia",
        "zora-sepolia",
        "https://sepolia.rpc.zora.energy",
        "https://sepolia.explorer.zora.energy",
        true,
    ),
];
