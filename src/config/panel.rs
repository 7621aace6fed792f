//! Named options for the exchange panel.
//!
//! Two near-identical page variants existed (branding, plus a wallet
//! selection modal in one of them). Both are expressed as one panel driven by
//! these options.

#[derive(Debug, Clone, PartialEq)]
pub struct PanelOptions {
    /// Heading shown at the top of the panel.
    pub title: String,
    /// Token symbol used in the balance/price lines and the buy button.
    pub token_label: String,
    /// Asset id understood by the price API (e.g. `solana`).
    pub price_asset_id: String,
    /// Open a wallet selection modal before connecting.
    pub use_selection_modal: bool,
    /// Append the shortened address to the disconnect button.
    pub show_address_on_button: bool,
    /// Show wallet-connect failures as a line under the connect button.
    pub surface_connect_errors: bool,
    /// Attempt a silent (already trusted) connect when the page mounts.
    pub auto_connect: bool,
}

/// Stock branding, no selection modal. Connect failures are shown under the
/// button, since a failed click otherwise leaves no trace outside the log.
impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: "Solana to Zero Exchange".to_string(),
            token_label: "SOL".to_string(),
            price_asset_id: "solana".to_string(),
            use_selection_modal: false,
            show_address_on_button: false,
            surface_connect_errors: true,
            auto_connect: true,
        }
    }
}

impl PanelOptions {
    /// Variant with the wallet selection modal and the address on the button.
    pub fn with_selection_modal(mut self) -> Self {
        self.use_selection_modal = true;
        self.show_address_on_button = true;
        self
    }
}

/// Window/page level settings.
pub struct WindowConfig {
    pub app_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub canvas_id: &'static str,
    pub max_panel_width: f32,
}

pub const WINDOW: WindowConfig = WindowConfig {
    app_name: "Solana Exchange",
    title: "Solana Exchange",
    description: "A simple Solana exchange interface",
    canvas_id: "the_canvas_id",
    max_panel_width: 420.0,
};
