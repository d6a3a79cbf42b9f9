use eframe::egui::Color32;

use crate::domain::CategoryId;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub ticker: Color32,
    pub card: Color32,
    pub badge: Color32,
    pub rating_star: Color32,
    pub trend_up: Color32,
    pub trend_down: Color32,
    pub gauge_fast: Color32,
    pub gauge_moderate: Color32,
    pub gauge_slow: Color32,
}

/// Accent colour per category theme
#[derive(Clone, Copy, Default)]
pub struct ThemeAccents {
    pub groceries: Color32,
    pub cosmetics: Color32,
    pub transport: Color32,
    pub medicines: Color32,
    pub shopping: Color32,
}

/// Timings for the decorative motion, in seconds
#[derive(Clone, Copy, Default)]
pub struct MotionConfig {
    pub card_stagger_secs: f32,
    pub card_reveal_secs: f32,
    pub spinner_speed: f32,
    pub spinner_radius: f32,
    pub spinner_dots: usize,
    pub ticker_step_secs: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub accents: ThemeAccents,
    pub motion: MotionConfig,
    pub content_max_width: f32,
    pub grid_columns: usize,
}

impl UiConfig {
    pub fn accent(&self, id: CategoryId) -> Color32 {
        match id {
            CategoryId::Groceries => self.accents.groceries,
            CategoryId::Cosmetics => self.accents.cosmetics,
            CategoryId::Transport => self.accents.transport,
            CategoryId::Medicines => self.accents.medicines,
            CategoryId::Shopping => self.accents.shopping,
        }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(70, 70, 80),
        heading: Color32::from_rgb(30, 30, 40),
        subdued: Color32::GRAY,
        central_panel: Color32::from_rgb(250, 248, 252),
        top_panel: Color32::WHITE,
        ticker: Color32::from_rgb(15, 23, 42),
        card: Color32::WHITE,
        badge: Color32::from_rgb(236, 72, 153),
        rating_star: Color32::from_rgb(240, 180, 20),
        trend_up: Color32::from_rgb(220, 80, 80),
        trend_down: Color32::from_rgb(40, 160, 90),
        gauge_fast: Color32::from_rgb(34, 197, 94),
        gauge_moderate: Color32::from_rgb(234, 179, 8),
        gauge_slow: Color32::from_rgb(239, 68, 68),
    },
    accents: ThemeAccents {
        groceries: Color32::from_rgb(46, 170, 120),
        cosmetics: Color32::from_rgb(170, 120, 240),
        transport: Color32::from_rgb(56, 150, 235),
        medicines: Color32::from_rgb(30, 160, 150),
        shopping: Color32::from_rgb(245, 130, 90),
    },
    motion: MotionConfig {
        card_stagger_secs: 0.1,
        card_reveal_secs: 0.4,
        spinner_speed: 4.0,
        spinner_radius: 28.0,
        spinner_dots: 3,
        ticker_step_secs: 3.0,
    },
    content_max_width: 760.0,
    grid_columns: 3,
};
