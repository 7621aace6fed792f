//! The exchange panel's non-visual half: what it shows and when it fetches.

mod panel;
mod state;

pub use panel::ExchangePanel;
pub use state::{BalanceState, PanelState, lamports_to_sol};
