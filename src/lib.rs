#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod exchange;
pub mod ui;
pub mod utils;
pub mod wallet;

// Re-export commonly used types
pub use app::App;
pub use config::{ENDPOINTS, PanelOptions, WINDOW};
pub use exchange::{BalanceState, ExchangePanel, PanelState};
pub use wallet::{WalletAdapter, WalletError, WalletSession};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Public address to watch. Stands in for the browser wallet on desktop.
    #[arg(long)]
    pub address: Option<String>,

    /// Solana JSON-RPC endpoint used for balance reads
    #[arg(long, default_value_t = ENDPOINTS.rpc.url.to_string())]
    pub rpc_url: String,

    /// Price API endpoint (`simple/price` shape)
    #[arg(long, default_value_t = ENDPOINTS.price.url.to_string())]
    pub price_url: String,

    /// Heading shown on the panel
    #[arg(long)]
    pub title: Option<String>,

    /// Token symbol shown next to balance and price
    #[arg(long)]
    pub token_label: Option<String>,

    /// Price API asset id
    #[arg(long)]
    pub asset_id: Option<String>,

    /// Pick the wallet from a selection modal before connecting
    #[arg(long, default_value_t = false)]
    pub selection_modal: bool,

    /// Do not try a silent reconnect on start
    #[arg(long, default_value_t = false)]
    pub no_auto_connect: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            address: None,
            rpc_url: ENDPOINTS.rpc.url.to_string(),
            price_url: ENDPOINTS.price.url.to_string(),
            title: None,
            token_label: None,
            asset_id: None,
            selection_modal: false,
            no_auto_connect: false,
        }
    }
}

impl Cli {
    pub fn panel_options(&self) -> PanelOptions {
        let mut options = PanelOptions::default();
        if self.selection_modal {
            options = options.with_selection_modal();
        }
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(label) = &self.token_label {
            options.token_label = label.clone();
        }
        if let Some(asset) = &self.asset_id {
            options.price_asset_id = asset.clone();
        }
        options.auto_connect = !self.no_auto_connect;
        options
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
