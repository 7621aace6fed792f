use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub background: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub wallet_button: Color32,
    pub buy_button: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub button_height: f32,
    pub section_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(75, 85, 99), // Every readout line
        heading: Color32::from_rgb(17, 24, 39),
        subdued: Color32::from_rgb(156, 163, 175),
        background: Color32::from_rgb(243, 244, 246),
        card: Color32::WHITE,
        card_stroke: Color32::from_rgb(229, 231, 235),
        wallet_button: Color32::from_rgb(147, 51, 234), // purple
        buy_button: Color32::from_rgb(34, 197, 94),     // green
        error: Color32::from_rgb(220, 38, 38),
    },
    button_height: 36.0,
    section_spacing: 18.0,
};

impl UiConfig {
    /// Full-window backdrop behind the card.
    pub fn page_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// The centered exchange card.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_stroke),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(32),
            ..Default::default()
        }
    }
}
