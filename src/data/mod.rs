mod ledger;
mod price_feed;
mod price_poller;

use anyhow::{Context, Result};

pub use {
    ledger::{LedgerClient, SolanaRpcClient, parse_balance},
    price_feed::{CoinGeckoFeed, PriceFeed, extract_quote, parse_quote},
    price_poller::PricePoller,
};

/// Shared HTTP client builder. Timeouts are only configurable natively.
fn http_client(timeout_ms: u64) -> Result<reqwest::Client> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .context("failed to build HTTP client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = timeout_ms;
        reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")
    }
}
