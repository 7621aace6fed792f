//! Wallet integration: the adapter seam and the session provider built on it.

mod phantom;
mod session;
mod watch_only;

use async_trait::async_trait;
use thiserror::Error;

use crate::engine::{EventSink, MaybeSend, MaybeSync};

pub use phantom::PhantomAdapter;
pub use session::{ConnectionStatus, WalletSession};
pub use watch_only::WatchOnlyAdapter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("{0} wallet not found. Please install the {0} browser extension.")]
    NotInstalled(String),
    #[error("Connection request was rejected: {0}")]
    Rejected(String),
    #[error("Wallet provider error: {0}")]
    Provider(String),
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),
}

/// How a connect request reaches the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectMode {
    /// User clicked connect; the wallet may prompt.
    Interactive,
    /// Page mount; only succeeds if the site is already trusted. Never prompts.
    Silent,
}

/// External wallet integration. Key custody and signing live on the other side.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WalletAdapter: MaybeSend + MaybeSync {
    /// Display name, also used in "not installed" messages.
    fn name(&self) -> &str;

    /// Whether the wallet is present at all (extension injected, address configured...).
    fn is_available(&self) -> bool;

    /// Ask the wallet for a connection. Returns the base58 public address.
    async fn connect(&self, mode: ConnectMode) -> Result<String, WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Called after a successful connect. Wallets that can change accounts
    /// or drop the session on their own report it through `sink` as
    /// `SessionEvent::AccountChanged` / `SessionEvent::Disconnected` tagged
    /// with `attempt`. Replaces any earlier subscription.
    fn watch(&self, attempt: u64, sink: &EventSink) {
        let _ = (attempt, sink);
    }
}

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Cheap shape check for a base58 ed25519 public key.
pub fn is_plausible_address(address: &str) -> bool {
    (32..=44).contains(&address.len()) && address.chars().all(|c| BASE58_ALPHABET.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_looking_addresses() {
        assert!(is_plausible_address(
            "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T"
        ));
        assert!(is_plausible_address("11111111111111111111111111111111"));
    }

    #[test]
    fn rejects_bad_alphabet_and_length() {
        // '0', 'O', 'I' and 'l' are not base58.
        assert!(!is_plausible_address(
            "0Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T"
        ));
        assert!(!is_plausible_address("short"));
        assert!(!is_plausible_address(""));
    }

    #[test]
    fn not_installed_message_names_the_wallet() {
        let msg = WalletError::NotInstalled("Phantom".into()).to_string();
        assert!(msg.contains("Phantom"));
    }
}
