mod exchange_panel;
mod styles;
mod ui_config;
mod ui_text;
pub(crate) mod utils;
mod wallet_modal;

pub(crate) use exchange_panel::UiAction;
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub use utils::{format_token_amount, format_usd, truncate_address};
