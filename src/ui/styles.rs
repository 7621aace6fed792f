use {
    crate::ui::UI_CONFIG,
    eframe::egui::{Button, Color32, Response, RichText, Ui, Vec2},
};

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    /// `Label: value` on one line.
    fn readout(&mut self, label: &str, value: &str);
    fn error_line(&mut self, text: impl Into<String>);
    /// Full-width solid button. Disabled buttons still render but never click.
    fn filled_button(&mut self, text: impl Into<String>, fill: Color32, enabled: bool) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn readout(&mut self, label: &str, value: &str) {
        self.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(label).color(UI_CONFIG.colors.label));
            ui.label(RichText::new(value).monospace().color(UI_CONFIG.colors.label));
        });
    }

    fn error_line(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.error));
    }

    fn filled_button(&mut self, text: impl Into<String>, fill: Color32, enabled: bool) -> Response {
        let button = Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(fill)
            .min_size(Vec2::new(self.available_width(), UI_CONFIG.button_height));
        self.add_enabled(enabled, button)
    }
}
