use eframe::egui;
use std::time::Duration;

use crate::data::CATALOG;
use crate::domain::CategoryId;
use crate::engine::{NavEvent, NavView, NavigationEngine, Transition};
use crate::models::Category;
use crate::ui::app::{AppError, OneCartApp};
use crate::ui::config::UI_CONFIG;
use crate::utils::app_time::{now, seconds_between};

/// Repaint cadence while something on screen is animating
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

impl OneCartApp {
    pub(super) fn open_category_by_name(&mut self, name: &str, query: Option<&str>) {
        match CATALOG.get_category(name) {
            Ok(category) => self.open_category(category, query),
            Err(e) => {
                log::warn!("{}. Showing the dashboard instead.", e);
                self.leave_category();
                self.last_error = Some(AppError::UnknownCategory(name.to_string()));
            }
        }
    }

    pub(super) fn open_category_id(&mut self, id: CategoryId, query: Option<&str>) {
        match CATALOG.category(id) {
            Ok(category) => self.open_category(category, query),
            Err(e) => {
                log::error!("{}", e);
                self.leave_category();
                self.last_error = Some(AppError::Catalog(e.to_string()));
            }
        }
    }

    /// Starts a fresh session for `category`, optionally with a search already running.
    pub(super) fn open_category(&mut self, category: &'static Category, query: Option<&str>) {
        self.clear_inputs();
        self.last_error = None;
        self.last_category = Some(category.id);

        let engine = match query {
            Some(q) => {
                self.search_text = q.trim().to_string();
                NavigationEngine::with_initial_query(category, self.search_config, q)
            }
            None => NavigationEngine::new(category, self.search_config),
        };
        log::info!(
            "Opened {} ({})",
            category.short_label(),
            engine.current_view()
        );
        self.session = Some(engine);
    }

    /// Drops the session. Navigation state is never carried over.
    pub(super) fn leave_category(&mut self) {
        self.session = None;
        self.clear_inputs();
    }

    fn clear_inputs(&mut self) {
        self.search_text.clear();
        self.route_from.clear();
        self.route_to.clear();
        self.results_shown_at = None;
    }

    pub(super) fn dispatch(&mut self, event: NavEvent) -> Transition {
        let Some(engine) = self.session.as_mut() else {
            log::debug!("No category open, dropping {:?}", event);
            return Transition::Ignored;
        };

        let transition = engine.dispatch(event);
        self.after_transition(transition);
        transition
    }

    fn after_transition(&mut self, transition: Transition) {
        let Some(engine) = self.session.as_ref() else {
            return;
        };
        match transition {
            Transition::Entered(NavView::Results) | Transition::Updated
                if engine.current_view() == NavView::Results =>
            {
                self.results_shown_at = Some(now());
            }
            Transition::Entered(NavView::Browsing | NavView::Prompt) => {
                self.results_shown_at = None;
                self.search_text.clear();
            }
            _ => {}
        }
    }

    /// Completes a due search and keeps frames coming while anything animates.
    pub(super) fn poll_session(&mut self, ctx: &egui::Context) {
        let at = now();
        let Some(engine) = self.session.as_mut() else {
            return;
        };

        if engine.category().ticker.len() > 1 {
            ctx.request_repaint_after(Duration::from_secs_f32(UI_CONFIG.motion.ticker_step_secs));
        }

        if engine.poll(at) {
            self.after_transition(Transition::Entered(NavView::Results));
            ctx.request_repaint();
            return;
        }

        if engine.is_busy() {
            let wait = engine
                .time_until_due(at)
                .map_or(ANIMATION_FRAME, |remaining| remaining.min(ANIMATION_FRAME));
            ctx.request_repaint_after(wait);
        } else if let (Some(results), Some(shown_at)) =
            (engine.current_results(), self.results_shown_at)
        {
            let motion = UI_CONFIG.motion;
            let reveal_total =
                motion.card_stagger_secs * results.len() as f32 + motion.card_reveal_secs;
            if seconds_between(shown_at, at) < reveal_total {
                ctx.request_repaint_after(ANIMATION_FRAME);
            }
        }
    }
}
