use eframe::egui::{CentralPanel, Context, RichText, TextEdit, Ui};

use crate::{
    app::App,
    config::WINDOW,
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        utils::{balance_text, price_text, wallet_button_text},
        wallet_modal::render_wallet_modal,
    },
    utils::format_age,
    wallet::ConnectionStatus,
};

/// Things the user asked for this frame. Applied after rendering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiAction {
    Connect,
    Disconnect,
    ChooseWallet(String),
    CloseModal,
    Buy,
}

impl App {
    pub(crate) fn render_exchange_panel(&mut self, ctx: &Context) -> Vec<UiAction> {
        let mut actions = Vec::new();

        CentralPanel::default()
            .frame(UI_CONFIG.page_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.12);
                    ui.set_max_width(WINDOW.max_panel_width);
                    UI_CONFIG.card_frame().show(ui, |ui| {
                        self.render_card(ui, &mut actions);
                    });
                });
            });

        if self.session.is_modal_open() {
            render_wallet_modal(ctx, &self.session, &mut actions);
        }
        actions
    }

    fn render_card(&mut self, ui: &mut Ui, actions: &mut Vec<UiAction>) {
        let options = self.panel.options();
        let state = self.panel.state();
        let spacing = UI_CONFIG.section_spacing;

        ui.heading(
            RichText::new(&options.title)
                .size(24.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(spacing);

        // Wallet control
        let status = self.session.status();
        let address = self.session.address();
        let label = wallet_button_text(status, address, options.show_address_on_button);
        let enabled = !(status == ConnectionStatus::Connecting && address.is_none());
        if ui
            .filled_button(label, UI_CONFIG.colors.wallet_button, enabled)
            .clicked()
        {
            actions.push(if address.is_some() {
                UiAction::Disconnect
            } else {
                UiAction::Connect
            });
        }
        if let Some(err) = self.session.last_error() {
            ui.error_line(err);
        }
        ui.add_space(spacing);

        // Session readouts
        if let Some(addr) = address {
            ui.readout(&UI_TEXT.label_connected, addr);
            ui.readout(
                &UI_TEXT.label_balance,
                &balance_text(&state.balance, &options.token_label),
            );
            ui.add_space(spacing);
        }

        ui.readout(
            &format!("{} {}", options.token_label, UI_TEXT.label_price_suffix),
            &price_text(state.price),
        );
        if let Some(at) = state.price_updated_at {
            ui.label_subdued(format!(
                "{} {} {}",
                UI_TEXT.label_updated,
                format_age(at.elapsed()),
                UI_TEXT.label_ago
            ));
        }
        ui.add_space(spacing);

        // Trade form. Nothing here is wired to state or the network.
        let buy_label = format!("{} {}", UI_TEXT.buy_prefix, options.token_label);
        ui.columns(2, |cols| {
            cols[0].add(
                TextEdit::singleline(&mut self.amount_input)
                    .hint_text(UI_TEXT.amount_hint.as_str())
                    .desired_width(f32::INFINITY),
            );
            if cols[1]
                .filled_button(buy_label, UI_CONFIG.colors.buy_button, true)
                .clicked()
            {
                actions.push(UiAction::Buy);
            }
        });
        self.amount_input
            .retain(|c| c.is_ascii_digit() || c == '.');
    }
}
