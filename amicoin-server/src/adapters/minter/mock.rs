//! Offline coin minter for development and tests

use crate::core::{ArenaResult, CoinMinter, MintRequest, MintedCoin};
use amicoin_types::EVM_ADDRESS_HEX_LEN;
use async_trait::async_trait;
use rand::Rng;

/// Minter that fabricates a random coin address without touching a chain
#[derive(Debug, Default)]
pub struct MockCoinMinter;

impl MockCoinMinter {
    pub fn new() -> Self {
        Self
    }
}

fn random_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let digits: String = (0..EVM_ADDRESS_HEX_LEN)
        .map(|_| HEX[rng.gen_range(0..16)] as char)
        .collect();
    format!("0x{}", digits)
}

#[async_trait]
impl CoinMinter for MockCoinMinter {
    async fn mint(&self, _request: &MintRequest) -> ArenaResult<MintedCoin> {
        Ok(MintedCoin {
            address: random_address(&mut rand::thread_rng()),
            transaction_hash: None,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
