use eframe::egui::{
    Align, Align2, CentralPanel, Context, Frame, Layout, Margin, RichText, ScrollArea,
    TopBottomPanel, Ui, Window,
};

use crate::data::CATALOG;
use crate::engine::{NavEvent, NavView, NavigationEngine};
use crate::ui::app::{AppAction, OneCartApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    DashboardPanel, ItemListPanel, OptionPickerPanel, Panel, ResultsPanel, SearchPanel,
    SubcategoryGridPanel, render_prompt, render_searching, render_ticker,
};
use crate::utils::app_time::{now, seconds_between};

impl OneCartApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) -> Vec<AppAction> {
        let mut actions = Vec::new();
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::symmetric(8, 4));

        TopBottomPanel::top("top_panel").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(UI_TEXT.brand).size(20.0).strong());
                let accent = self
                    .session
                    .as_ref()
                    .map_or(UI_CONFIG.colors.badge, |engine| {
                        UI_CONFIG.accent(engine.category_id())
                    });
                ui.label(RichText::new(UI_TEXT.brand_plus).size(20.0).strong().color(accent));

                if let Some(engine) = &self.session {
                    let category = engine.category();
                    ui.separator();
                    ui.label(format!("{} {}", category.emoji, category.short_label()));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.switch_category).clicked() {
                            actions.push(AppAction::SwitchCategory);
                        }
                    });
                }
            });
        });

        actions
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<AppAction> {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));

        CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("central_scroll")
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.content_max_width);
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                if let Some(err) = &self.last_error {
                                    ui.label_error(err.to_string());
                                    ui.add_space(8.0);
                                }
                                if self.session.is_some() {
                                    self.render_category_page(ui)
                                } else {
                                    DashboardPanel::new(CATALOG.categories())
                                        .render(ui)
                                        .into_iter()
                                        .map(AppAction::OpenCategory)
                                        .collect()
                                }
                            })
                            .inner
                        })
                        .inner
                    })
                    .inner
            })
            .inner
    }

    fn render_category_page(&mut self, ui: &mut Ui) -> Vec<AppAction> {
        let Some(engine) = self.session.as_ref() else {
            return Vec::new();
        };
        let category = engine.category();
        let view = engine.current_view();
        let mut events = Vec::new();

        let elapsed = ui.input(|i| i.time) as f32;
        render_ticker(ui, category.ticker, elapsed);
        ui.add_space(8.0);

        ui.label_header(category.label);
        ui.label(RichText::new(category.hero_text).italics());
        ui.label_subdued(category.description);
        ui.add_space(12.0);

        events.extend(
            SearchPanel::new(
                category,
                &mut self.search_text,
                &mut self.route_from,
                &mut self.route_to,
                engine.state().accepts_new_search(),
            )
            .render(ui),
        );
        ui.add_space(12.0);

        match view {
            NavView::Prompt => render_prompt(ui, category),
            NavView::Browsing => events.extend(SubcategoryGridPanel::new(category).render(ui)),
            NavView::ItemList => {
                if let Some(sub) = engine.selected_subcategory() {
                    events.extend(ItemListPanel::new(category, sub).render(ui));
                }
            }
            NavView::Searching => render_searching(ui, category, elapsed),
            NavView::Results => {
                events.extend(Self::render_results(ui, engine, self.results_shown_at));
            }
        }

        events.into_iter().map(AppAction::Navigate).collect()
    }

    fn render_results(
        ui: &mut Ui,
        engine: &NavigationEngine,
        shown_at: Option<crate::utils::app_time::AppInstant>,
    ) -> Vec<NavEvent> {
        let Some(results) = engine.current_results() else {
            return Vec::new();
        };
        // Fully revealed when there is no reveal in progress
        let reveal_secs = shown_at.map_or(f32::MAX, |start| seconds_between(start, now()));

        ResultsPanel::new(
            engine.category(),
            engine.query(),
            results,
            engine.sort_key(),
            reveal_secs,
        )
        .render(ui)
    }

    pub(super) fn render_option_picker(&mut self, ctx: &Context) -> Vec<AppAction> {
        let Some(sub) = self.session.as_ref().and_then(|engine| engine.option_picker()) else {
            return Vec::new();
        };

        let mut panel = OptionPickerPanel::new(sub);
        let mut open = true;
        let mut events = Window::new(panel.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| panel.render(ui))
            .and_then(|response| response.inner)
            .unwrap_or_default();

        if !open {
            events.push(NavEvent::OptionPickerDismissed);
        }
        events.into_iter().map(AppAction::Navigate).collect()
    }
}
