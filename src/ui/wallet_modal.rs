use eframe::egui::{Align2, Context, Window};

use crate::ui::{UI_CONFIG, UI_TEXT, UiAction, UiStyleExt};
use crate::wallet::WalletSession;

/// Wallet picker shown before connecting when the selection modal is enabled.
pub(crate) fn render_wallet_modal(ctx: &Context, session: &WalletSession, actions: &mut Vec<UiAction>) {
    let mut open = true;
    Window::new(UI_TEXT.modal_title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            let detected = session.wallet_available();
            for name in session.wallet_names() {
                if ui
                    .filled_button(name, UI_CONFIG.colors.wallet_button, true)
                    .clicked()
                {
                    actions.push(UiAction::ChooseWallet(name.to_string()));
                }
                if !detected {
                    ui.label_subdued(UI_TEXT.modal_not_detected.as_str());
                }
            }
            ui.separator();
            if ui.button(UI_TEXT.modal_cancel.as_str()).clicked() {
                actions.push(UiAction::CloseModal);
            }
        });
    if !open {
        actions.push(UiAction::CloseModal);
    }
}
