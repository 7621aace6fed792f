use std::sync::LazyLock;

pub struct UiText {
    // --- Wallet control ---
    pub connect_wallet: String,
    pub disconnect: String,
    pub connecting: String,
    pub label_connected: String,

    // --- Selection modal ---
    pub modal_title: String,
    pub modal_cancel: String,
    pub modal_not_detected: String,

    // --- Readouts ---
    pub label_balance: String,
    pub label_price_suffix: String,
    pub loading: String,
    pub unavailable: String,
    pub label_updated: String,
    pub label_ago: String,

    // --- Trade form (inert) ---
    pub amount_hint: String,
    pub buy_prefix: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    connect_wallet: "Connect Wallet".to_string(),
    disconnect: "Disconnect".to_string(),
    connecting: "Connecting...".to_string(),
    label_connected: "Connected:".to_string(),

    modal_title: "Select a wallet".to_string(),
    modal_cancel: "Cancel".to_string(),
    modal_not_detected: "Not detected".to_string(),

    label_balance: "Balance:".to_string(),
    label_price_suffix: "Price:".to_string(),
    loading: "Loading...".to_string(),
    unavailable: "Unavailable".to_string(),
    label_updated: "updated".to_string(),
    label_ago: "ago".to_string(),

    amount_hint: "Amount".to_string(),
    buy_prefix: "Buy".to_string(),
});
