use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::models::{ItemTrend, SubcategoryIcon};
use crate::ui::config::UI_CONFIG;

/// Sets up the light theme, tinted with the active category accent
pub fn setup_custom_visuals(ctx: &Context, accent: Option<Color32>) {
    let mut visuals = Visuals::light();
    let accent = accent.unwrap_or(UI_CONFIG.colors.badge);

    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.selection.bg_fill = accent.gamma_multiply(0.35);
    visuals.selection.stroke.color = accent;
    visuals.hyperlink_color = accent;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.bg_stroke.color = accent;
    visuals.widgets.active.bg_stroke.color = accent;

    ctx.set_visuals(visuals);
}

/// Creates a heading in the category accent with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>, accent: Color32) {
    ui.add_space(10.0);
    ui.heading(RichText::new(text).strong().color(accent));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Glyph drawn for a subcategory icon
pub fn icon_glyph(icon: SubcategoryIcon) -> &'static str {
    match icon {
        SubcategoryIcon::Produce => "🍎",
        SubcategoryIcon::Dairy => "🥛",
        SubcategoryIcon::Grains => "🌾",
        SubcategoryIcon::Cooking => "🍳",
        SubcategoryIcon::Snacks => "🍿",
        SubcategoryIcon::Cleaning => "🧽",
        SubcategoryIcon::Skincare => "🧴",
        SubcategoryIcon::Makeup => "💄",
        SubcategoryIcon::Haircare => "💇",
        SubcategoryIcon::PersonalCare => "🧼",
        SubcategoryIcon::Fragrance => "🌸",
        SubcategoryIcon::BeautyTools => "🖌",
        SubcategoryIcon::Bike => "🏍",
        SubcategoryIcon::Auto => "🛺",
        SubcategoryIcon::Car => "🚗",
        SubcategoryIcon::Pool => "👥",
        SubcategoryIcon::Intercity => "🗺",
        SubcategoryIcon::Rental => "⏱",
        SubcategoryIcon::Pill => "💊",
        SubcategoryIcon::Generic => "🔄",
        SubcategoryIcon::Heart => "❤",
        SubcategoryIcon::Wellness => "🏃",
        SubcategoryIcon::FirstAid => "🩹",
        SubcategoryIcon::Baby => "👶",
        SubcategoryIcon::Fashion => "👕",
        SubcategoryIcon::Electronics => "📱",
        SubcategoryIcon::Home => "🏠",
        SubcategoryIcon::Footwear => "👟",
        SubcategoryIcon::Beauty => "✨",
        SubcategoryIcon::Sports => "🏆",
        SubcategoryIcon::Books => "📚",
    }
}

/// Arrow and colour for a mock item trend
pub fn trend_glyph(trend: ItemTrend) -> (&'static str, Color32) {
    match trend {
        ItemTrend::Up => ("⬆", UI_CONFIG.colors.trend_up),
        ItemTrend::Down => ("⬇", UI_CONFIG.colors.trend_down),
        ItemTrend::Steady => ("➡", UI_CONFIG.colors.subdued),
    }
}
