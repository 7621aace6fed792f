use crate::config::LAMPORTS_PER_SOL;
use crate::utils::AppInstant;

/// Balance as shown to the user, in whole tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BalanceState {
    /// No session (or not yet asked).
    #[default]
    Idle,
    /// A read is in flight for the current session.
    Loading,
    Ready(f64),
    /// The read for the current session failed.
    Failed(String),
}

impl BalanceState {
    pub fn amount(&self) -> Option<f64> {
        match self {
            BalanceState::Ready(v) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelState {
    pub balance: BalanceState,
    /// Last good USD quote. Kept across failed refreshes.
    pub price: Option<f64>,
    pub price_updated_at: Option<AppInstant>,
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}
