use eframe::egui::{
    Align, Button, Color32, ComboBox, Frame, Grid, Key, Layout, Margin, ProgressBar, RichText,
    ScrollArea, Sense, TextEdit, Ui, vec2,
};
use strum::IntoEnumIterator;

use crate::analysis::{SpeedBand, hero_minutes};
use crate::domain::{CategoryId, SortKey};
use crate::engine::{NavEvent, compose_route_query};
use crate::models::{Category, ItemTrend, PriceTick, ResultRecord, Subcategory, TickKind};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{icon_glyph, section_heading, spaced_separator, trend_glyph};
use crate::utils::motion::{
    magnetic_snap, orbit_offsets, orbital_motion, smooth_step, staggered_reveal, ticker_offset,
};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

fn card_frame(ui: &Ui) -> Frame {
    Frame::group(ui.style())
        .fill(UI_CONFIG.colors.card)
        .inner_margin(Margin::same(12))
}

/// Category picker shown when no category session is open
pub struct DashboardPanel {
    categories: &'static [Category],
}

impl DashboardPanel {
    pub fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }
}

impl Panel for DashboardPanel {
    type Event = CategoryId;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.vertical_centered(|ui| {
            ui.label_subdued(UI_TEXT.dashboard_welcome);
            ui.label_header(UI_TEXT.dashboard_heading);
            ui.label_subdued(UI_TEXT.dashboard_subheading);
        });
        ui.add_space(20.0);

        Grid::new("dashboard_grid")
            .num_columns(UI_CONFIG.grid_columns)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (i, category) in self.categories.iter().enumerate() {
                    let accent = UI_CONFIG.accent(category.id);
                    let response = card_frame(ui)
                        .show(ui, |ui| {
                            ui.set_width(200.0);
                            ui.label(RichText::new(category.emoji).size(28.0));
                            ui.label_accent(category.short_label(), accent);
                            ui.label_subdued(category.description);
                        })
                        .response
                        .interact(Sense::click());

                    if response.clicked() {
                        events.push(category.id);
                    }
                    if (i + 1) % UI_CONFIG.grid_columns == 0 {
                        ui.end_row();
                    }
                }
            });

        events
    }
}

/// Search bar, or the pickup/destination form for transport
pub struct SearchPanel<'a> {
    category: &'static Category,
    search_text: &'a mut String,
    route_from: &'a mut String,
    route_to: &'a mut String,
    show_demo: bool,
}

impl<'a> SearchPanel<'a> {
    pub fn new(
        category: &'static Category,
        search_text: &'a mut String,
        route_from: &'a mut String,
        route_to: &'a mut String,
        show_demo: bool,
    ) -> Self {
        Self {
            category,
            search_text,
            route_from,
            route_to,
            show_demo,
        }
    }

    fn render_route_form(&mut self, ui: &mut Ui) -> Option<NavEvent> {
        ui.add(
            TextEdit::singleline(&mut *self.route_from)
                .hint_text(UI_TEXT.route_from_hint)
                .desired_width(f32::INFINITY),
        );
        ui.add(
            TextEdit::singleline(&mut *self.route_to)
                .hint_text(UI_TEXT.route_to_hint)
                .desired_width(f32::INFINITY),
        );

        let button = Button::new(UI_TEXT.compare_fares_button).min_size(vec2(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            let query = compose_route_query(self.route_from.as_str(), self.route_to.as_str());
            *self.search_text = query.clone();
            return Some(NavEvent::SearchSubmitted(query));
        }
        None
    }

    fn render_product_search(&mut self, ui: &mut Ui) -> Option<NavEvent> {
        let mut submitted = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut *self.search_text)
                    .hint_text(self.category.search_placeholder)
                    .desired_width(ui.available_width() - 110.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submitted = true;
            }
            if ui.button(UI_TEXT.search_button).clicked() {
                submitted = true;
            }
        });
        ui.label_subdued(UI_TEXT.paste_link_hint);

        submitted.then(|| NavEvent::SearchSubmitted(self.search_text.clone()))
    }
}

impl Panel for SearchPanel<'_> {
    type Event = NavEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        card_frame(ui).show(ui, |ui| {
            let event = if self.category.id.is_transport() {
                self.render_route_form(ui)
            } else {
                self.render_product_search(ui)
            };
            events.extend(event);

            if self.show_demo {
                let demo = format!("{}\"{}\"", UI_TEXT.demo_prefix, self.category.demo_query);
                if ui.link(RichText::new(demo).small()).clicked() {
                    *self.search_text = self.category.demo_query.to_string();
                    events.push(NavEvent::DemoQueryRequested);
                }
            }
        });

        events
    }
}

/// Grid of subcategory cards with tags, badges and quick picks
pub struct SubcategoryGridPanel {
    category: &'static Category,
}

/// How many items a card previews inline
const QUICK_PICK_COUNT: usize = 3;

impl SubcategoryGridPanel {
    pub fn new(category: &'static Category) -> Self {
        Self { category }
    }

    fn render_card(ui: &mut Ui, sub: &'static Subcategory, accent: Color32, events: &mut Vec<NavEvent>) {
        let fill = if sub.highlight {
            accent.gamma_multiply(0.15)
        } else {
            UI_CONFIG.colors.card
        };

        let response = card_frame(ui)
            .fill(fill)
            .show(ui, |ui| {
                ui.set_width(200.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon_glyph(sub.icon)).size(22.0));
                    ui.label_accent(sub.label, accent);
                });
                if let Some(tag) = sub.tag {
                    ui.label_badge(tag);
                }
                if let Some(badge) = sub.badge_text {
                    ui.label_subdued(badge);
                }
                if sub.has_items() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label_subdued(UI_TEXT.quick_picks);
                        for item in sub.items.iter().take(QUICK_PICK_COUNT) {
                            if ui.small_button(*item).clicked() {
                                events.push(NavEvent::ItemClicked(item.to_string()));
                            }
                        }
                    });
                }
            })
            .response
            .interact(Sense::click());

        if response.clicked() {
            events.push(NavEvent::SubcategoryHeaderClicked(sub.id.to_string()));
        }
    }
}

impl Panel for SubcategoryGridPanel {
    type Event = NavEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let accent = UI_CONFIG.accent(self.category.id);

        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.browse_hint);
            match self.category.id {
                CategoryId::Cosmetics => ui.label_accent(UI_TEXT.verified_brands, accent),
                CategoryId::Medicines => ui.label_accent(UI_TEXT.verified_pharmacies, accent),
                _ => {}
            }
        });
        ui.add_space(8.0);

        Grid::new("subcategory_grid")
            .num_columns(UI_CONFIG.grid_columns)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                for (i, sub) in self.category.subcategories.iter().enumerate() {
                    Self::render_card(ui, sub, accent, &mut events);
                    if (i + 1) % UI_CONFIG.grid_columns == 0 {
                        ui.end_row();
                    }
                }
            });

        events
    }
}

/// Items of one subcategory, with mock trend arrows
pub struct ItemListPanel {
    category: &'static Category,
    subcategory: &'static Subcategory,
}

impl ItemListPanel {
    pub fn new(category: &'static Category, subcategory: &'static Subcategory) -> Self {
        Self {
            category,
            subcategory,
        }
    }
}

impl Panel for ItemListPanel {
    type Event = NavEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let accent = UI_CONFIG.accent(self.category.id);

        let back = format!("{}{}", UI_TEXT.back_to_prefix, self.category.short_label());
        if ui.button(back).clicked() {
            events.push(NavEvent::Back);
        }
        section_heading(
            ui,
            format!("{} {}", icon_glyph(self.subcategory.icon), self.subcategory.label),
            accent,
        );

        ScrollArea::vertical()
            .max_height(360.0)
            .id_salt("item_list")
            .show(ui, |ui| {
                for (index, item) in self.subcategory.items.iter().enumerate() {
                    let (arrow, color) = trend_glyph(ItemTrend::for_index(index));
                    let response = card_frame(ui)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(*item).strong());
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(RichText::new(arrow).color(color));
                                });
                            });
                        })
                        .response
                        .interact(Sense::click());
                    if response.clicked() {
                        events.push(NavEvent::ItemClicked(item.to_string()));
                    }
                }
            });

        events
    }
}

/// Body of the option picker window
pub struct OptionPickerPanel {
    subcategory: &'static Subcategory,
}

impl OptionPickerPanel {
    pub fn new(subcategory: &'static Subcategory) -> Self {
        Self { subcategory }
    }

    pub fn title(&self) -> String {
        format!(
            "{}{}{}",
            UI_TEXT.option_picker_prefix, self.subcategory.label, UI_TEXT.option_picker_suffix
        )
    }
}

impl Panel for OptionPickerPanel {
    type Event = NavEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for option in self.subcategory.options {
                if ui
                    .add(Button::new(*option).min_size(vec2(80.0, 36.0)))
                    .clicked()
                {
                    events.push(NavEvent::OptionChosen(option.to_string()));
                }
            }
        });
        events
    }
}

/// Spinner shown while the simulated search runs
pub fn render_searching(ui: &mut Ui, category: &Category, elapsed_secs: f32) {
    let accent = UI_CONFIG.accent(category.id);
    let motion = UI_CONFIG.motion;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        let (rect, _) = ui.allocate_exact_size(vec2(80.0, 40.0), Sense::hover());
        let painter = ui.painter();
        for (i, offset) in orbit_offsets(motion.spinner_dots).enumerate() {
            let (x, y) = orbital_motion(elapsed_secs, motion.spinner_radius, motion.spinner_speed, offset);
            let alpha = 0.4 + 0.6 * smooth_step(-1.0, 1.0, (elapsed_secs * 3.0 + i as f32).sin());
            painter.circle_filled(rect.center() + vec2(x, y), 6.0, accent.gamma_multiply(alpha));
        }
        ui.add_space(10.0);
        let text = if category.id.is_transport() {
            UI_TEXT.searching_fares
        } else {
            UI_TEXT.searching_products
        };
        ui.label_subdued(text);
    });
}

/// Dark headline strip, rotating one entry every few seconds
pub fn render_ticker(ui: &mut Ui, ticks: &[PriceTick], elapsed_secs: f32) {
    if ticks.is_empty() {
        return;
    }
    let start = ticker_offset(elapsed_secs, UI_CONFIG.motion.ticker_step_secs, ticks.len());

    Frame::new()
        .fill(UI_CONFIG.colors.ticker)
        .inner_margin(Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                for tick in ticks.iter().cycle().skip(start).take(ticks.len()) {
                    let (glyph, color) = match tick.kind {
                        TickKind::Drop => ("⬇", UI_CONFIG.colors.trend_down),
                        TickKind::Rise => ("⬆", UI_CONFIG.colors.trend_up),
                        TickKind::Flash => ("⚡", UI_CONFIG.colors.rating_star),
                    };
                    ui.label(RichText::new(format!("{} {}", glyph, tick.text)).small().color(color));
                    ui.add_space(16.0);
                }
            });
        });
}

/// Shown instead of the grid when a category has nothing to browse
pub fn render_prompt(ui: &mut Ui, category: &Category) {
    let (heading, body) = if category.id.is_transport() {
        (UI_TEXT.prompt_heading_fares, UI_TEXT.prompt_body_fares)
    } else {
        (UI_TEXT.prompt_heading_products, UI_TEXT.prompt_body_products)
    };
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.label_header(heading);
        ui.label_subdued(body);
    });
}

/// Ranked comparison results with the sort selector and winner card
pub struct ResultsPanel<'a> {
    category: &'static Category,
    query: &'a str,
    results: &'a [ResultRecord],
    sort_key: SortKey,
    reveal_secs: f32,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(
        category: &'static Category,
        query: &'a str,
        results: &'a [ResultRecord],
        sort_key: SortKey,
        reveal_secs: f32,
    ) -> Self {
        Self {
            category,
            query,
            results,
            sort_key,
            reveal_secs,
        }
    }

    fn render_header(&mut self, ui: &mut Ui, events: &mut Vec<NavEvent>) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label_header(format!("{}\"{}\"", UI_TEXT.results_for_prefix, self.query));
                ui.label_subdued(format!("Found {}{}", self.results.len(), UI_TEXT.results_found_suffix));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if self.category.has_subcategories() && ui.button(UI_TEXT.back_to_browse).clicked() {
                    events.push(NavEvent::BackToBrowse);
                }

                let mut selected = self.sort_key;
                ComboBox::from_id_salt("results_sort_key")
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for key in SortKey::iter() {
                            if ui.selectable_value(&mut selected, key, key.to_string()).clicked()
                                && key != self.sort_key
                            {
                                events.push(NavEvent::SortKeyChanged(key));
                            }
                        }
                    });
                ui.label_subdued(UI_TEXT.sort_by);
            });
        });
    }

    fn render_winner(&self, ui: &mut Ui, winner: &ResultRecord, accent: Color32) {
        let minutes = hero_minutes(winner);
        let band = SpeedBand::for_minutes(minutes);
        let gauge_color = match band {
            SpeedBand::Fast => UI_CONFIG.colors.gauge_fast,
            SpeedBand::Moderate => UI_CONFIG.colors.gauge_moderate,
            SpeedBand::Slow => UI_CONFIG.colors.gauge_slow,
        };

        card_frame(ui).fill(accent.gamma_multiply(0.12)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_accent(UI_TEXT.winner_heading, accent);
            ui.horizontal(|ui| {
                ui.label(RichText::new(winner.platform).size(20.0).strong());
                ui.label(RichText::new(winner.price).size(20.0).strong().color(accent));
                if let Some(saved) = winner.savings() {
                    ui.label_badge(format!("{}{}", UI_TEXT.save_prefix, saved));
                }
            });
            ui.horizontal(|ui| {
                ui.label_subdued(format!("{} · {}m", band, minutes));
                ui.add(
                    ProgressBar::new(SpeedBand::gauge_fraction(minutes))
                        .fill(gauge_color)
                        .desired_width(160.0),
                );
            });
        });
    }

    fn render_row(&self, ui: &mut Ui, index: usize, record: &ResultRecord, accent: Color32) {
        let motion = UI_CONFIG.motion;
        let progress = staggered_reveal(
            self.reveal_secs,
            index,
            motion.card_stagger_secs,
            motion.card_reveal_secs,
        );
        let action = if self.category.id.is_transport() {
            UI_TEXT.book
        } else {
            UI_TEXT.buy
        };

        ui.scope(|ui| {
            ui.multiply_opacity(progress);
            ui.add_space(magnetic_snap(12.0, 0.0, progress));
            card_frame(ui).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(record.monogram().to_string()).size(22.0).strong().color(accent));
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(record.platform).strong());
                            if let Some(badge) = record.badge {
                                ui.label_badge(badge);
                            }
                        });
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("★ {}", record.rating)).color(UI_CONFIG.colors.rating_star));
                            ui.label_subdued(record.delivery);
                        });
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Mock data: nothing happens on purchase
                        let _ = ui.button(action);
                        if let Some(pct) = record.discount_percent() {
                            ui.label_badge(format!("{}% off", pct));
                        }
                        if let Some(original) = record.original_price {
                            ui.label(RichText::new(original).small().strikethrough().color(UI_CONFIG.colors.subdued));
                        }
                        ui.label(RichText::new(record.price).size(18.0).strong());
                    });
                });
            });
        });
    }
}

impl Panel for ResultsPanel<'_> {
    type Event = NavEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let accent = UI_CONFIG.accent(self.category.id);

        self.render_header(ui, &mut events);
        spaced_separator(ui);

        if let Some(winner) = self.results.first().filter(|_| self.category.id.has_winner_card()) {
            self.render_winner(ui, winner, accent);
            ui.add_space(10.0);
        }

        let title = if self.category.id.is_transport() {
            UI_TEXT.fare_comparison
        } else {
            UI_TEXT.price_comparison
        };
        ui.horizontal(|ui| {
            ui.label(RichText::new(title).strong());
            ui.label_accent(self.query, accent);
            ui.label_subdued(format!("{} results", self.results.len()));
        });

        for (index, record) in self.results.iter().enumerate() {
            self.render_row(ui, index, record, accent);
        }

        events
    }
}
