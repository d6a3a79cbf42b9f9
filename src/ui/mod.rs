// User interface components
pub mod app;
mod app_session;
pub mod config;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::{AppError, LaunchOptions, OneCartApp};
pub use config::UI_CONFIG;
