use crate::config::constants::{ADDRESS_TRUNCATE_CHARS, BALANCE_DECIMALS, PRICE_DECIMALS};
use crate::exchange::BalanceState;
use crate::ui::UI_TEXT;
use crate::wallet::ConnectionStatus;

/// `1.5` -> `1.5000 SOL`
pub fn format_token_amount(amount: f64, token_label: &str) -> String {
    format!("{:.*} {}", BALANCE_DECIMALS, amount, token_label)
}

/// `142.37` -> `$142.37`
pub fn format_usd(price: f64) -> String {
    format!("${:.*}", PRICE_DECIMALS, price)
}

/// First and last few characters joined by an ellipsis. Short input is returned as is.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let n = ADDRESS_TRUNCATE_CHARS;
    if chars.len() <= n * 2 + 3 {
        return address.to_string();
    }
    let head: String = chars[..n].iter().collect();
    let tail: String = chars[chars.len() - n..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn balance_text(balance: &BalanceState, token_label: &str) -> String {
    match balance {
        BalanceState::Ready(amount) => format_token_amount(*amount, token_label),
        BalanceState::Failed(_) => UI_TEXT.unavailable.clone(),
        BalanceState::Idle | BalanceState::Loading => UI_TEXT.loading.clone(),
    }
}

pub fn price_text(price: Option<f64>) -> String {
    price.map(format_usd).unwrap_or_else(|| UI_TEXT.loading.clone())
}

pub fn wallet_button_text(
    status: ConnectionStatus,
    address: Option<&str>,
    show_address: bool,
) -> String {
    match (status, address) {
        (_, Some(addr)) if show_address => {
            format!("{} ({})", UI_TEXT.disconnect, truncate_address(addr))
        }
        (_, Some(_)) => UI_TEXT.disconnect.clone(),
        (ConnectionStatus::Connecting, None) => UI_TEXT.connecting.clone(),
        (_, None) => UI_TEXT.connect_wallet.clone(),
    }
}
