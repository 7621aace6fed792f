//! Configuration module for the exchange panel.

mod debug;
mod endpoints;
mod panel;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{LAMPORTS_PER_SOL, PRICE_REFRESH_INTERVAL};
pub use debug::DF;
pub use endpoints::{ENDPOINTS, EndpointConfig, PriceApiConfig, RpcConfig};
pub use panel::{PanelOptions, WINDOW, WindowConfig};
