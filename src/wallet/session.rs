//! The wallet session provider.
//!
//! Owns the connected address and the one registered adapter. The panel only
//! ever reads `address()`; connect results come back as `SessionEvent`s.

use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::PanelOptions;
use crate::engine::{Effects, SessionEvent};

use super::{ConnectMode, WalletAdapter, WalletError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

pub struct WalletSession {
    adapter: Arc<dyn WalletAdapter>,
    address: Option<String>,
    status: ConnectionStatus,
    last_error: Option<String>,
    modal_open: bool,
    // Bumped by every connect and disconnect. Results from older attempts are dropped.
    attempt: u64,
    use_selection_modal: bool,
    surface_errors: bool,
    auto_connect: bool,
}

impl WalletSession {
    pub fn new(adapter: Arc<dyn WalletAdapter>, options: &PanelOptions) -> Self {
        Self {
            adapter,
            address: None,
            status: ConnectionStatus::Disconnected,
            last_error: None,
            modal_open: false,
            attempt: 0,
            use_selection_modal: options.use_selection_modal,
            surface_errors: options.surface_connect_errors,
            auto_connect: options.auto_connect,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// One-line connect failure, if the options ask for it to be shown.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Names offered by the selection modal. Exactly one adapter is registered.
    pub fn wallet_names(&self) -> Vec<&str> {
        vec![self.adapter.name()]
    }

    pub fn wallet_available(&self) -> bool {
        self.adapter.is_available()
    }

    /// Page mount: reconnect silently if the wallet already trusts us.
    pub fn mount(&mut self, effects: &Effects) {
        if !self.auto_connect {
            return;
        }
        if !self.adapter.is_available() {
            log::info!("{} not available, skipping auto-connect", self.adapter.name());
            return;
        }
        self.start_connect(ConnectMode::Silent, effects);
    }

    /// Connect button. Opens the selection modal first when configured to.
    pub fn request_connect(&mut self, effects: &Effects) {
        if self.use_selection_modal {
            self.modal_open = true;
            #[cfg(debug_assertions)]
            if DF.log_session {
                log::info!("Wallet selection modal opened");
            }
            return;
        }
        self.start_connect(ConnectMode::Interactive, effects);
    }

    /// A wallet picked from the selection modal.
    pub fn choose_wallet(&mut self, name: &str, effects: &Effects) {
        self.modal_open = false;
        if name != self.adapter.name() {
            log::warn!("Unknown wallet '{}' chosen, ignoring", name);
            return;
        }
        self.start_connect(ConnectMode::Interactive, effects);
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Clears the session immediately. The adapter is told in the background.
    pub fn disconnect(&mut self, effects: &Effects) {
        self.attempt += 1;
        self.address = None;
        self.status = ConnectionStatus::Disconnected;
        self.last_error = None;

        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!("Wallet session cleared");
        }

        let adapter = self.adapter.clone();
        effects.spawner.spawn(async move {
            if let Err(e) = adapter.disconnect().await {
                log::error!("Failed to disconnect {}: {}", adapter.name(), e);
            }
        });
    }

    /// Apply a connect result. Stale attempts are ignored.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Connected { attempt, address } if attempt == self.attempt => {
                #[cfg(debug_assertions)]
                if DF.log_session {
                    log::info!("Wallet connected: {}", address);
                }
                self.address = Some(address);
                self.status = ConnectionStatus::Connected;
                self.last_error = None;
            }
            SessionEvent::ConnectFailed {
                attempt,
                error,
                silent,
            } if attempt == self.attempt => {
                self.status = ConnectionStatus::Disconnected;
                self.report_failure(&error, silent);
            }
            SessionEvent::AccountChanged { attempt, address }
                if attempt == self.attempt && self.address.is_some() =>
            {
                #[cfg(debug_assertions)]
                if DF.log_session {
                    log::info!("Wallet switched account: {}", address);
                }
                self.address = Some(address);
            }
            SessionEvent::Disconnected { attempt } if attempt == self.attempt => {
                log::info!("{} ended the session", self.adapter.name());
                // Anything still queued from this connect is now stale.
                self.attempt += 1;
                self.address = None;
                self.status = ConnectionStatus::Disconnected;
                self.last_error = None;
            }
            stale => {
                #[cfg(debug_assertions)]
                if DF.log_session {
                    log::info!("Dropping stale wallet result: {:?}", stale);
                }
                let _ = stale;
            }
        }
    }

    fn start_connect(&mut self, mode: ConnectMode, effects: &Effects) {
        if self.status == ConnectionStatus::Connecting {
            return;
        }
        self.last_error = None;

        if !self.adapter.is_available() {
            let error = WalletError::NotInstalled(self.adapter.name().to_string());
            self.report_failure(&error, mode == ConnectMode::Silent);
            return;
        }

        self.attempt += 1;
        self.status = ConnectionStatus::Connecting;

        let attempt = self.attempt;
        let adapter = self.adapter.clone();
        let sink = effects.sink.clone();
        effects.spawner.spawn(async move {
            let event = match adapter.connect(mode).await {
                Ok(address) => {
                    adapter.watch(attempt, &sink);
                    SessionEvent::Connected { attempt, address }
                }
                Err(error) => SessionEvent::ConnectFailed {
                    attempt,
                    error,
                    silent: mode == ConnectMode::Silent,
                },
            };
            sink.emit(event);
        });
    }

    fn report_failure(&mut self, error: &WalletError, silent: bool) {
        if silent {
            log::info!("Silent wallet connect declined: {}", error);
            return;
        }
        log::error!("Failed to connect: {}", error);
        if self.surface_errors {
            self.last_error = Some(error.to_string());
        }
    }
}
