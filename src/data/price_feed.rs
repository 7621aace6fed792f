use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;

use crate::config::ENDPOINTS;
use crate::engine::{MaybeSend, MaybeSync};

/// Abstract interface for a spot price source.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceFeed: MaybeSend + MaybeSync {
    /// Current USD quote for the configured asset.
    async fn fetch_usd(&self) -> Result<f64>;
}

/// `{ "<asset>": { "<currency>": <number> } }`
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// CoinGecko `simple/price` endpoint.
pub struct CoinGeckoFeed {
    client: reqwest::Client,
    url: String,
    asset_id: String,
    vs_currency: String,
}

impl CoinGeckoFeed {
    pub fn new(url: impl Into<String>, asset_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: super::http_client(ENDPOINTS.price.timeout_ms)?,
            url: url.into(),
            asset_id: asset_id.into(),
            vs_currency: ENDPOINTS.price.vs_currency.to_string(),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceFeed for CoinGeckoFeed {
    async fn fetch_usd(&self) -> Result<f64> {
        let body: SimplePriceResponse = self
            .client
            .get(&self.url)
            .query(&[
                ("ids", self.asset_id.as_str()),
                ("vs_currencies", self.vs_currency.as_str()),
            ])
            .send()
            .await
            .context("price request failed")?
            .error_for_status()
            .context("price endpoint returned an error status")?
            .json()
            .await
            .context("price response was not the expected JSON")?;

        extract_quote(&body, &self.asset_id, &self.vs_currency)
    }
}

/// Pull the single numeric field the panel consumes out of a `simple/price` body.
pub fn extract_quote(body: &SimplePriceResponse, asset_id: &str, vs_currency: &str) -> Result<f64> {
    body.get(asset_id)
        .and_then(|quotes| quotes.get(vs_currency))
        .copied()
        .ok_or_else(|| anyhow!("no {} quote for '{}' in price response", vs_currency, asset_id))
}

/// Parse a raw `simple/price` body.
pub fn parse_quote(json: &str, asset_id: &str, vs_currency: &str) -> Result<f64> {
    let body: SimplePriceResponse =
        serde_json::from_str(json).context("price response was not the expected JSON")?;
    extract_quote(&body, asset_id, vs_currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_usd_quote_for_asset() {
        let price = parse_quote(r#"{"solana":{"usd":142.37}}"#, "solana", "usd").unwrap();
        assert_eq!(price, 142.37);
    }

    #[test]
    fn integer_quotes_are_accepted() {
        let price = parse_quote(r#"{"solana":{"usd":150}}"#, "solana", "usd").unwrap();
        assert_eq!(price, 150.0);
    }

    #[test]
    fn missing_asset_is_an_error() {
        let err = parse_quote(r#"{"bitcoin":{"usd":1.0}}"#, "solana", "usd").unwrap_err();
        assert!(err.to_string().contains("solana"));
    }

    #[test]
    fn rate_limit_body_is_an_error() {
        // CoinGecko answers throttled requests with a status object instead of quotes.
        assert!(parse_quote(r#"{"status":{"error_code":429}}"#, "solana", "usd").is_err());
    }
}
