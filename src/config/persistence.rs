//! UI state persistence configuration

/// Path for saving/loading UI preferences (native builds)
pub const APP_STATE_PATH: &str = ".onecart_state.json";

/// Key under which the app stores its preferences in eframe storage
pub const PREFERENCES_KEY: &str = "onecart_preferences";
