use async_trait::async_trait;

use super::{ConnectMode, WalletAdapter, WalletError, is_plausible_address};

/// NATIVE stand-in for a browser wallet: "connects" to a fixed, configured
/// address. No keys are held; it can only be observed, never sign.
pub struct WatchOnlyAdapter {
    address: Option<String>,
}

impl WatchOnlyAdapter {
    pub const NAME: &'static str = "Watch-only";

    pub fn new(address: Option<String>) -> Self {
        Self { address }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WalletAdapter for WatchOnlyAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_available(&self) -> bool {
        self.address.is_some()
    }

    async fn connect(&self, _mode: ConnectMode) -> Result<String, WalletError> {
        let address = self
            .address
            .clone()
            .ok_or_else(|| WalletError::NotInstalled(Self::NAME.to_string()))?;
        if !is_plausible_address(&address) {
            return Err(WalletError::InvalidAddress(address));
        }
        Ok(address)
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";

    #[tokio::test]
    async fn connects_to_configured_address() {
        let adapter = WatchOnlyAdapter::new(Some(ADDR.to_string()));
        assert!(adapter.is_available());
        assert_eq!(adapter.connect(ConnectMode::Interactive).await, Ok(ADDR.to_string()));
    }

    #[tokio::test]
    async fn unconfigured_adapter_is_not_installed() {
        let adapter = WatchOnlyAdapter::new(None);
        assert!(!adapter.is_available());
        assert!(matches!(
            adapter.connect(ConnectMode::Silent).await,
            Err(WalletError::NotInstalled(_))
        ));
    }

    #[tokio::test]
    async fn malformed_address_is_rejected() {
        let adapter = WatchOnlyAdapter::new(Some("not-an-address".into()));
        assert_eq!(
            adapter.connect(ConnectMode::Interactive).await,
            Err(WalletError::InvalidAddress("not-an-address".into()))
        );
    }
}
