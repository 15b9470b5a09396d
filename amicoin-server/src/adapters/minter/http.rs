//! Client for a remote coin factory service

use crate::config::MinterConfig;
use crate::core::{ArenaError, ArenaResult, CoinMinter, MintRequest, MintedCoin};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Posts mint requests as JSON to `<endpoint>/coins`
pub struct HttpCoinMinter {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpCoinMinter {
    pub fn new(config: &MinterConfig) -> ArenaResult<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| ArenaError::Configuration("minter.endpoint is not set".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn coins_url(&self) -> String {
        format!("{}/coins", self.endpoint)
    }
}

#[async_trait]
impl CoinMinter for HttpCoinMinter {
    async fn mint(&self, request: &MintRequest) -> ArenaResult<MintedCoin> {
        debug!("Minting coin {} on chain {}", request.symbol, request.chain_id);

        let mut builder = self.client.post(self.coins_url()).json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Mint service returned {}: {}", status, body);
            return Err(ArenaError::ExternalService(format!(
                "mint service returned {}",
                status
            )));
        }

        let bytes = response.bytes().await?;
        let coin: MintedCoin = serde_json::from_slice(&bytes)?;
        if coin.address.trim().is_empty() {
            return Err(ArenaError::ExternalService(
                "mint service returned an empty coin address".to_string(),
            ));
        }

        Ok(coin)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
