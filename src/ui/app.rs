use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SearchConfig;
use crate::config::persistence::PREFERENCES_KEY;
use crate::domain::CategoryId;
use crate::engine::{NavEvent, NavigationEngine};
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types surfaced in the UI
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A category requested by name does not exist
    UnknownCategory(String),
    /// The built-in catalog failed validation
    Catalog(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnknownCategory(id) => write!(f, "Unknown category '{}'", id),
            AppError::Catalog(msg) => write!(f, "Catalog error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// What the user asked for on the command line (or URL, on the web)
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub category: Option<String>,
    pub query: Option<String>,
}

impl LaunchOptions {
    /// Builds launch options from already-decoded URL parameters
    /// (`category` and `q`). Blank values count as absent.
    pub fn from_params(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| get(key).filter(|value| !value.trim().is_empty());
        Self {
            category: non_blank("category"),
            query: non_blank("q"),
        }
    }
}

/// User actions collected while rendering, applied after the frame's UI is built
#[derive(Debug, Clone, PartialEq)]
pub(super) enum AppAction {
    OpenCategory(CategoryId),
    SwitchCategory,
    Navigate(NavEvent),
}

#[derive(Deserialize, Serialize, Default)]
pub struct OneCartApp {
    // Preferences
    #[serde(default)]
    pub(super) last_category: Option<CategoryId>,

    // Session state - never persisted
    #[serde(skip)]
    pub(super) session: Option<NavigationEngine>,
    #[serde(skip)]
    pub(super) search_config: SearchConfig,
    #[serde(skip)]
    pub(super) search_text: String,
    #[serde(skip)]
    pub(super) route_from: String,
    #[serde(skip)]
    pub(super) route_to: String,
    /// When the visible results were last (re)ordered, drives the card reveal
    #[serde(skip)]
    pub(super) results_shown_at: Option<AppInstant>,
    #[serde(skip)]
    pub(super) last_error: Option<AppError>,
}

impl OneCartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        let mut app: OneCartApp = match cc
            .storage
            .and_then(|storage| eframe::get_value(storage, PREFERENCES_KEY))
        {
            Some(value) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Loaded persisted preferences");
                }
                value
            }
            None => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted preferences found. Starting fresh.");
                }
                OneCartApp::default()
            }
        };

        app.apply_launch_options(launch);
        app
    }

    /// Opens whatever the launch asked for, falling back to the last category used.
    pub(super) fn apply_launch_options(&mut self, launch: LaunchOptions) {
        match (launch.category, self.last_category) {
            (Some(name), _) => self.open_category_by_name(&name, launch.query.as_deref()),
            (None, Some(id)) => self.open_category_id(id, launch.query.as_deref()),
            (None, None) => {
                if let Some(query) = launch.query {
                    log::warn!("Ignoring query '{}': no category to search in", query);
                }
            }
        }
    }

    pub(super) fn apply_actions(&mut self, actions: Vec<AppAction>) {
        for action in actions {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("UI action: {:?}", action);
            }
            match action {
                AppAction::OpenCategory(id) => self.open_category_id(id, None),
                AppAction::SwitchCategory => self.leave_category(),
                AppAction::Navigate(event) => {
                    self.dispatch(event);
                }
            }
        }
    }
}

impl eframe::App for OneCartApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.session = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PREFERENCES_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let accent = self
            .session
            .as_ref()
            .map(|engine| UI_CONFIG.accent(engine.category_id()));
        setup_custom_visuals(ctx, accent);

        self.poll_session(ctx);

        let mut actions = self.render_top_panel(ctx);
        actions.extend(self.render_central_panel(ctx));
        actions.extend(self.render_option_picker(ctx));

        self.apply_actions(actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn launch_options_read_category_and_q() {
        let params: HashMap<&str, &str> =
            HashMap::from([("category", "transport"), ("q", "Airport → Koramangala")]);
        let launch = LaunchOptions::from_params(|key| params.get(key).map(|v| v.to_string()));
        assert_eq!(launch.category.as_deref(), Some("transport"));
        assert_eq!(launch.query.as_deref(), Some("Airport → Koramangala"));
    }

    #[test]
    fn launch_options_skip_blank_and_missing_values() {
        let launch = LaunchOptions::from_params(|key| (key == "q").then(|| "   ".to_string()));
        assert_eq!(launch.category, None);
        assert_eq!(launch.query, None);
    }
}
