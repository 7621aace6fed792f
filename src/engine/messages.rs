use std::sync::mpsc::{Receiver, Sender, channel};

use eframe::egui::Context;

use crate::wallet::WalletError;

/// Results produced by wallet connect attempts, and changes the wallet itself
/// reports afterwards. `attempt` ties each event to the connect that caused it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Connected {
        attempt: u64,
        address: String,
    },
    ConnectFailed {
        attempt: u64,
        error: WalletError,
        silent: bool,
    },
    /// The user switched accounts inside the wallet.
    AccountChanged {
        attempt: u64,
        address: String,
    },
    /// The wallet ended the session on its side.
    Disconnected {
        attempt: u64,
    },
}

/// Results produced by the panel's network reads.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// Raw lamports for the session identified by `epoch`.
    Balance {
        epoch: u64,
        result: Result<u64, String>,
    },
    /// One price poll outcome in USD.
    Price(Result<f64, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Session(SessionEvent),
    Panel(PanelEvent),
}

impl From<SessionEvent> for AppEvent {
    fn from(event: SessionEvent) -> Self {
        AppEvent::Session(event)
    }
}

impl From<PanelEvent> for AppEvent {
    fn from(event: PanelEvent) -> Self {
        AppEvent::Panel(event)
    }
}

/// Sending half handed to background tasks. Wakes the UI after each event.
#[derive(Clone)]
pub struct EventSink {
    tx: Sender<AppEvent>,
    repaint: Option<Context>,
}

impl EventSink {
    pub fn new(tx: Sender<AppEvent>, repaint: Context) -> Self {
        Self {
            tx,
            repaint: Some(repaint),
        }
    }

    /// A sink with no UI attached (headless use and tests).
    pub fn detached(tx: Sender<AppEvent>) -> Self {
        Self { tx, repaint: None }
    }

    /// Convenience: a detached sink plus its receiver.
    pub fn detached_pair() -> (Self, Receiver<AppEvent>) {
        let (tx, rx) = channel();
        (Self::detached(tx), rx)
    }

    pub fn emit(&self, event: impl Into<AppEvent>) {
        // Receiver gone means the app is shutting down. Nothing left to update.
        if self.tx.send(event.into()).is_ok() {
            if let Some(ctx) = &self.repaint {
                ctx.request_repaint();
            }
        }
    }
}

/// Everything a component needs to start background work.
#[derive(Clone)]
pub struct Effects {
    pub spawner: super::TaskSpawner,
    pub sink: EventSink,
}

impl Effects {
    pub fn new(spawner: super::TaskSpawner, sink: EventSink) -> Self {
        Self { spawner, sink }
    }
}
