use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::ENDPOINTS;
use crate::engine::{MaybeSend, MaybeSync};

/// Read-only view of the remote ledger node.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LedgerClient: MaybeSend + MaybeSync {
    /// Native token balance of `address` in lamports.
    async fn get_balance(&self, address: &str) -> Result<u64>;
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

/// JSON-RPC 2.0 client for a Solana cluster endpoint.
pub struct SolanaRpcClient {
    client: reqwest::Client,
    url: String,
}

impl SolanaRpcClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: super::http_client(ENDPOINTS.rpc.timeout_ms)?,
            url: url.into(),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl LedgerClient for SolanaRpcClient {
    async fn get_balance(&self, address: &str) -> Result<u64> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [address],
        });

        let body = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .context("getBalance request failed")?
            .error_for_status()
            .context("RPC node returned an error status")?
            .text()
            .await
            .context("failed to read getBalance response")?;

        parse_balance(&body)
    }
}

/// `{"result":{"context":{..},"value":<lamports>}}` or `{"error":{..}}`.
pub fn parse_balance(json: &str) -> Result<u64> {
    let response: RpcResponse<BalanceResult> =
        serde_json::from_str(json).context("getBalance response was not JSON-RPC")?;
    if let Some(err) = response.error {
        bail!("RPC error {}: {}", err.code, err.message);
    }
    response
        .result
        .map(|r| r.value)
        .ok_or_else(|| anyhow!("getBalance response had neither result nor error"))
}
