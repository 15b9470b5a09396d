//! Mint-then-persist creation flow
//!
//! The coin is minted first and the meme saved afterwards. There is no
//! compensation step: if the insert fails after a successful mint, the coin
//! exists on chain without a meme row and is reported in the error log.

use crate::core::{ArenaError, ArenaResult, CoinMinter, MintRequest};
use crate::domain::{MemeRegistry, WalletProvider};
use amicoin_types::{Meme, NewMeme};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub creator_address: Option<String>,
    pub chain_id: Option<u64>,
}

pub struct MemeLauncher {
    registry: Arc<MemeRegistry>,
    minter: Arc<dyn CoinMinter>,
    wallet: Arc<WalletProvider>,
}

impl MemeLauncher {
    pub fn new(
        registry: Arc<MemeRegistry>,
        minter: Arc<dyn CoinMinter>,
        wallet: Arc<WalletProvider>,
    ) -> Self {
        Self {
            registry,
            minter,
            wallet,
        }
    }

    pub async fn launch(&self, request: LaunchRequest) -> ArenaResult<Meme> {
        let session = self
            .wallet
            .resolve(request.creator_address.as_deref(), request.chain_id);
        let (creator, chain) = self.wallet.ensure_mintable(&session)?;

        for (field, value) in [
            ("name", &request.name),
            ("symbol", &request.symbol),
            ("imageUrl", &request.image_url),
        ] {
            if value.trim().is_empty() {
                return Err(ArenaError::validation(format!("{} is required", field)));
            }
        }

        let coin = self
            .minter
            .mint(&MintRequest {
                name: request.name.clone(),
                symbol: request.symbol.clone(),
                uri: request.image_url.clone(),
                payout_recipient: creator.to_string(),
                chain_id: chain.id,
            })
            .await?;
        info!(
            "Minted coin {} for {} on {} via {} minter (tx: {})",
            coin.address,
            request.symbol,
            chain.name,
            self.minter.name(),
            coin.transaction_hash.as_deref().unwrap_or("unknown")
        );

        let new_meme = NewMeme {
            name: request.name,
            symbol: request.symbol,
            image_url: request.image_url,
            creator_address: creator.to_string(),
            coin_address: Some(coin.address.clone()),
        };

        match self.registry.create(new_meme).await {
            Ok(meme) => Ok(meme),
            Err(e) => {
                error!(
                    "Coin {} was minted on chain {} but the meme could not be saved: {}",
                    coin.address, chain.id, e
                );
                Err(e)
            }
        }
    }
}
