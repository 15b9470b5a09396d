/// Chain identifiers and defaults shared across the amicoin ecosystem

// ============================================================================
// EVM Chain IDs
// ============================================================================

/// Ethereum mainnet
pub const ETHEREUM_MAINNET_ID: u64 = 1;

/// Optimism mainnet
pub const OPTIMISM_ID: u64 = 10;

/// Polygon PoS
pub const POLYGON_ID: u64 = 137;

/// Base mainnet
pub const BASE_ID: u64 = 8453;

/// Arbitrum One
pub const ARBITRUM_ID: u64 = 42161;

/// Base Sepolia testnet
pub const BASE_SEPOLIA_ID: u64 = 84532;

/// Zora mainnet, where meme coins are minted
pub const ZORA_ID: u64 = 7_777_777;

/// Zora Sepolia testnet
pub const ZORA_SEPOLIA_ID: u64 = 999_999_999;

// ============================================================================
// Application Defaults
// ============================================================================

/// Application name announced to wallets
pub const DEFAULT_APP_NAME: &str = "amicoinornot";

/// Chains a coin may be minted on unless configured otherwise
pub const DEFAULT_MINT_CHAIN_IDS: [u64; 2] = [ZORA_ID, ZORA_SEPOLIA_ID];

/// Length of a hex encoded EVM address without the `0x` prefix
pub const EVM_ADDRESS_HEX_LEN: usize = 40;
