use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for hints and counts).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a page heading in the configured heading colour.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders strong text in the category accent.
    fn label_accent(&mut self, text: impl Into<String>, accent: Color32);

    /// Renders a small uppercase pill-style badge.
    fn label_badge(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).strong().color(UI_CONFIG.colors.heading));
    }

    fn label_accent(&mut self, text: impl Into<String>, accent: Color32) {
        self.label(RichText::new(text).strong().color(accent));
    }

    fn label_badge(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.label(
            RichText::new(format!(" {} ", text))
                .small()
                .strong()
                .color(Color32::WHITE)
                .background_color(UI_CONFIG.colors.badge),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(220, 60, 60)));
    }
}
