/// Remote ledger node (JSON-RPC) settings.
pub struct RpcConfig {
    pub url: &'static str,
    pub timeout_ms: u64,
}

/// Public price API settings.
pub struct PriceApiConfig {
    /// `simple/price` endpoint, queried with `ids=<asset>&vs_currencies=usd`.
    pub url: &'static str,
    pub vs_currency: &'static str,
    pub timeout_ms: u64,
}

pub struct EndpointConfig {
    pub rpc: RpcConfig,
    pub price: PriceApiConfig,
}

pub const ENDPOINTS: EndpointConfig = EndpointConfig {
    rpc: RpcConfig {
        url: "https://api.mainnet-beta.solana.com",
        timeout_ms: 10_000,
    },
    price: PriceApiConfig {
        url: "https://api.coingecko.com/api/v3/simple/price",
        vs_currency: "usd",
        timeout_ms: 10_000,
    },
};
