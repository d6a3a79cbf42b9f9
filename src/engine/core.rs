use std::time::Duration;

use crate::analysis::rank;
use crate::config::SearchConfig;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{CategoryId, SortKey};
use crate::models::{Category, ResultRecord, Subcategory, SubcategoryAction};
use crate::utils::app_time::{AppInstant, now};

use super::messages::{NavEvent, Transition};
use super::state::{NavView, NavigationState};
use super::timer::{SearchTicket, SearchTimer};

/// Query for an option picked in the option picker: "Cab - Sedan".
pub fn compose_option_query(label: &str, option: &str) -> String {
    format!("{} - {}", label, option)
}

/// Query for the transport route form: "Connaught Place → IGI Airport".
/// A missing side collapses to the side that is present.
pub fn compose_route_query(from: &str, to: &str) -> String {
    match (from.trim(), to.trim()) {
        ("", "") => String::new(),
        (from, "") => from.to_string(),
        ("", to) => to.to_string(),
        (from, to) => format!("{} → {}", from, to),
    }
}

/// One category session: the navigation state machine plus its search timer.
/// Created when a category is opened, dropped when the user leaves it.
pub struct NavigationEngine {
    category: &'static Category,
    config: SearchConfig,
    state: NavigationState,
    timer: SearchTimer,

    /// Results-local ordering. Reset to the default on every search.
    sort_key: SortKey,
    /// Ranked copy of the category's mock results, filled on entering Results
    results: Vec<ResultRecord>,
}

impl NavigationEngine {
    pub fn new(category: &'static Category, config: SearchConfig) -> Self {
        Self {
            category,
            config,
            state: NavigationState::initial(category),
            timer: SearchTimer::new(),
            sort_key: SortKey::default(),
            results: Vec::new(),
        }
    }

    /// Opens the session with a search already running, as a deep link would.
    pub fn with_initial_query(
        category: &'static Category,
        config: SearchConfig,
        query: &str,
    ) -> Self {
        let mut engine = Self::new(category, config);
        let delay = engine.config.deep_link_delay();
        engine.start_search(query, delay, now());
        engine
    }

    // --- ACCESSORS ---

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }

    pub fn current_view(&self) -> NavView {
        self.state.view
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Ranked results, only while the results view is active.
    pub fn current_results(&self) -> Option<&[ResultRecord]> {
        (self.state.view == NavView::Results).then_some(self.results.as_slice())
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn selected_subcategory(&self) -> Option<&'static Subcategory> {
        self.state.selected_subcategory
    }

    pub fn option_picker(&self) -> Option<&'static Subcategory> {
        self.state.option_picker()
    }

    pub fn pending_ticket(&self) -> Option<SearchTicket> {
        self.timer.pending_ticket()
    }

    /// True while a simulated search is waiting to complete.
    pub fn is_busy(&self) -> bool {
        self.timer.is_pending()
    }

    /// How long until the pending search completes, for repaint scheduling.
    pub fn time_until_due(&self, at: AppInstant) -> Option<Duration> {
        self.timer.remaining(at)
    }

    // --- EVENTS ---

    pub fn dispatch(&mut self, event: NavEvent) -> Transition {
        self.dispatch_at(event, now())
    }

    /// Like `dispatch`, with an explicit clock reading for new search deadlines.
    pub fn dispatch_at(&mut self, event: NavEvent, at: AppInstant) -> Transition {
        let before = self.state.view;

        #[cfg(debug_assertions)]
        let event_desc = if DEBUG_FLAGS.print_nav_transitions {
            Some(format!("{:?}", event))
        } else {
            None
        };

        let transition = self.apply(event, at);

        match transition {
            Transition::Ignored => {
                log::debug!(
                    "[nav:{}] event ignored in {} view",
                    self.category.id,
                    before
                );
            }
            _ => {
                #[cfg(debug_assertions)]
                if let Some(desc) = event_desc {
                    log::info!(
                        "[nav:{}] {} -> {} via {}",
                        self.category.id,
                        before,
                        self.state.view,
                        desc
                    );
                }
            }
        }
        transition
    }

    /// Fires the pending search if its deadline has passed.
    /// Returns true when the view changed.
    pub fn poll(&mut self, at: AppInstant) -> bool {
        match self.timer.due(at) {
            Some(ticket) => !self
                .dispatch_at(NavEvent::SearchElapsed { ticket }, at)
                .is_ignored(),
            None => false,
        }
    }

    fn apply(&mut self, event: NavEvent, at: AppInstant) -> Transition {
        let view = self.state.view;
        let interactive = self.config.interactive_delay();

        match event {
            NavEvent::SubcategoryHeaderClicked(id) => {
                if view != NavView::Browsing {
                    return Transition::Ignored;
                }
                let Some(sub) = self.category.subcategory(&id) else {
                    log::warn!("Unknown subcategory '{}' in {}", id, self.category.id);
                    return Transition::Ignored;
                };
                self.select_subcategory(sub, at)
            }

            NavEvent::ItemClicked(item) => {
                let known = match view {
                    NavView::ItemList => self
                        .state
                        .selected_subcategory
                        .is_some_and(|sub| sub.items.contains(&item.as_str())),
                    NavView::Browsing => self.category.offers_item(&item),
                    _ => false,
                };
                if !known {
                    return Transition::Ignored;
                }
                self.start_search(&item, interactive, at)
            }

            NavEvent::OptionChosen(option) => {
                let Some(sub) = self.state.option_picker() else {
                    return Transition::Ignored;
                };
                if !sub.options.contains(&option.as_str()) {
                    return Transition::Ignored;
                }
                let query = compose_option_query(sub.label, &option);
                self.start_search(&query, interactive, at)
            }

            NavEvent::OptionPickerDismissed => {
                if self.state.option_picker().is_none() {
                    return Transition::Ignored;
                }
                self.state.selected_subcategory = None;
                Transition::Updated
            }

            NavEvent::Back => match view {
                NavView::ItemList => {
                    self.state.selected_subcategory = None;
                    self.state.view = NavView::Browsing;
                    Transition::Entered(NavView::Browsing)
                }
                NavView::Browsing if self.state.option_picker().is_some() => {
                    self.state.selected_subcategory = None;
                    Transition::Updated
                }
                _ => Transition::Ignored,
            },

            // Accepted everywhere; a search in flight is superseded
            NavEvent::SearchSubmitted(text) => self.start_search(&text, interactive, at),

            NavEvent::DemoQueryRequested => {
                if !self.state.accepts_new_search() {
                    return Transition::Ignored;
                }
                let demo = self.category.demo_query;
                self.start_search(demo, interactive, at)
            }

            NavEvent::SearchElapsed { ticket } => {
                if view != NavView::Searching || !self.timer.complete(ticket) {
                    return Transition::Ignored;
                }
                self.results = rank(self.category.mock_results, self.sort_key);
                self.state.view = NavView::Results;
                Transition::Entered(NavView::Results)
            }

            NavEvent::SortKeyChanged(key) => {
                if view != NavView::Results {
                    return Transition::Ignored;
                }
                self.sort_key = key;
                self.results = rank(self.category.mock_results, key);
                Transition::Updated
            }

            NavEvent::BackToBrowse => {
                if view != NavView::Results {
                    return Transition::Ignored;
                }
                self.results.clear();
                self.state = NavigationState::initial(self.category);
                Transition::Entered(self.state.view)
            }
        }
    }

    fn select_subcategory(&mut self, sub: &'static Subcategory, at: AppInstant) -> Transition {
        match sub.action() {
            SubcategoryAction::ShowItems => {
                self.state.selected_subcategory = Some(sub);
                self.state.view = NavView::ItemList;
                Transition::Entered(NavView::ItemList)
            }
            SubcategoryAction::PickOption => {
                self.state.selected_subcategory = Some(sub);
                Transition::Updated
            }
            SubcategoryAction::SearchLabel => {
                let delay = self.config.interactive_delay();
                self.start_search(sub.label, delay, at)
            }
        }
    }

    /// Enters Searching with a non-empty query, superseding any pending search.
    /// Blank input falls back to the category's demo query.
    fn start_search(&mut self, query: &str, delay: Duration, at: AppInstant) -> Transition {
        let trimmed = query.trim();
        let query = if trimmed.is_empty() {
            self.category.demo_query
        } else {
            trimmed
        };

        self.state.query = query.to_string();
        self.state.selected_subcategory = None;
        self.state.view = NavView::Searching;
        self.sort_key = SortKey::default();
        self.results.clear();
        self.timer.start(at, delay);
        Transition::Entered(NavView::Searching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CATALOG;

    fn engine(id: CategoryId) -> NavigationEngine {
        NavigationEngine::new(CATALOG.category(id).unwrap(), SearchConfig::default())
    }

    fn finish_search(engine: &mut NavigationEngine) -> Transition {
        let ticket = engine.pending_ticket().expect("a search should be pending");
        engine.dispatch(NavEvent::SearchElapsed { ticket })
    }

    fn platforms(engine: &NavigationEngine) -> Vec<&'static str> {
        engine
            .current_results()
            .unwrap_or_default()
            .iter()
            .map(|r| r.platform)
            .collect()
    }

    static NO_SUBS: Category = Category {
        id: CategoryId::Shopping,
        label: "Bare — Nothing to browse",
        emoji: "",
        description: "",
        hero_text: "",
        theme: "",
        search_placeholder: "",
        demo_query: "Anything",
        subcategories: &[],
        mock_results: &[ResultRecord::new("Solo", "₹10", 4.0, "Tomorrow")],
        ticker: &[],
    };

    #[test]
    fn starts_browsing_or_prompt() {
        assert_eq!(engine(CategoryId::Groceries).current_view(), NavView::Browsing);
        let bare = NavigationEngine::new(&NO_SUBS, SearchConfig::default());
        assert_eq!(bare.current_view(), NavView::Prompt);
        assert!(bare.current_results().is_none());
    }

    #[test]
    fn header_with_items_opens_item_list_not_search() {
        let mut nav = engine(CategoryId::Groceries);
        let t = nav.dispatch(NavEvent::SubcategoryHeaderClicked("fruits-veggies".into()));

        assert_eq!(t, Transition::Entered(NavView::ItemList));
        assert_eq!(nav.current_view(), NavView::ItemList);
        assert_eq!(
            nav.selected_subcategory().map(|s| s.items[..2].to_vec()),
            Some(vec!["Onion", "Potato"])
        );
        assert!(!nav.is_busy());
    }

    #[test]
    fn item_click_searches_then_shows_price_ranked_results() {
        let mut nav = engine(CategoryId::Groceries);
        nav.dispatch(NavEvent::SubcategoryHeaderClicked("fruits-veggies".into()));
        let t = nav.dispatch(NavEvent::ItemClicked("Onion".into()));

        assert_eq!(t, Transition::Entered(NavView::Searching));
        assert_eq!(nav.query(), "Onion");
        assert!(nav.current_results().is_none());

        assert_eq!(finish_search(&mut nav), Transition::Entered(NavView::Results));
        assert_eq!(nav.sort_key(), SortKey::Price);
        assert_eq!(platforms(&nav), vec!["BigBasket", "Blinkit", "Zepto", "JioMart"]);
    }

    #[test]
    fn item_list_back_returns_to_browsing() {
        let mut nav = engine(CategoryId::Cosmetics);
        nav.dispatch(NavEvent::SubcategoryHeaderClicked("makeup".into()));
        assert_eq!(nav.dispatch(NavEvent::Back), Transition::Entered(NavView::Browsing));
        assert_eq!(nav.selected_subcategory(), None);
        assert!(nav.dispatch(NavEvent::Back).is_ignored());
    }

    #[test]
    fn option_picker_composes_label_and_option() {
        let mut nav = engine(CategoryId::Transport);
        assert_eq!(
            nav.dispatch(NavEvent::SubcategoryHeaderClicked("cab".into())),
            Transition::Updated
        );
        assert_eq!(nav.current_view(), NavView::Browsing);
        assert_eq!(nav.option_picker().map(|s| s.id), Some("cab"));

        // Not one of the offered options
        assert!(nav.dispatch(NavEvent::OptionChosen("Limo".into())).is_ignored());

        nav.dispatch(NavEvent::OptionChosen("Sedan".into()));
        assert_eq!(nav.current_view(), NavView::Searching);
        assert_eq!(nav.query(), "Cab - Sedan");
        assert_eq!(nav.option_picker(), None);
    }

    #[test]
    fn option_picker_can_be_dismissed() {
        let mut nav = engine(CategoryId::Transport);
        assert!(nav.dispatch(NavEvent::OptionPickerDismissed).is_ignored());
        nav.dispatch(NavEvent::SubcategoryHeaderClicked("rentals".into()));
        assert_eq!(nav.dispatch(NavEvent::OptionPickerDismissed), Transition::Updated);
        assert_eq!(nav.option_picker(), None);
        assert!(nav.dispatch(NavEvent::OptionChosen("Hourly".into())).is_ignored());
    }

    #[test]
    fn plain_subcategory_searches_its_label() {
        let mut nav = engine(CategoryId::Transport);
        nav.dispatch(NavEvent::SubcategoryHeaderClicked("bike".into()));
        assert_eq!(nav.current_view(), NavView::Searching);
        assert_eq!(nav.query(), "Bike Rides");
    }

    #[test]
    fn items_take_precedence_over_options() {
        let mut nav = engine(CategoryId::Medicines);
        nav.dispatch(NavEvent::SubcategoryHeaderClicked("chronic".into()));
        assert_eq!(nav.current_view(), NavView::ItemList);
        assert_eq!(nav.option_picker(), None);
    }

    #[test]
    fn inline_item_click_from_browsing_searches() {
        let mut nav = engine(CategoryId::Shopping);
        nav.dispatch(NavEvent::ItemClicked("Sneakers".into()));
        assert_eq!(nav.current_view(), NavView::Searching);
        assert_eq!(nav.query(), "Sneakers");
    }

    #[test]
    fn item_clicks_must_name_an_offered_item() {
        let mut nav = engine(CategoryId::Groceries);
        nav.dispatch(NavEvent::SubcategoryHeaderClicked("fruits-veggies".into()));
        // Listed in another subcategory, not the open one
        assert!(nav.dispatch(NavEvent::ItemClicked("Milk".into())).is_ignored());
        assert!(nav.dispatch(NavEvent::ItemClicked("Caviar".into())).is_ignored());
        assert_eq!(nav.current_view(), NavView::ItemList);

        nav.dispatch(NavEvent::Back);
        assert!(nav.dispatch(NavEvent::ItemClicked("Caviar".into())).is_ignored());
        assert_eq!(
            nav.dispatch(NavEvent::ItemClicked("Milk".into())),
            Transition::Entered(NavView::Searching)
        );
    }

    #[test]
    fn unknown_subcategory_is_ignored() {
        let mut nav = engine(CategoryId::Groceries);
        assert!(
            nav.dispatch(NavEvent::SubcategoryHeaderClicked("nope".into()))
                .is_ignored()
        );
        assert_eq!(nav.current_view(), NavView::Browsing);
    }

    #[test]
    fn blank_search_falls_back_to_demo_query() {
        let mut nav = engine(CategoryId::Medicines);
        nav.dispatch(NavEvent::SearchSubmitted("   ".into()));
        assert_eq!(nav.query(), "Dolo 650mg (Strip of 15)");

        let mut nav = engine(CategoryId::Shopping);
        nav.dispatch(NavEvent::DemoQueryRequested);
        assert_eq!(nav.query(), "Sony WH-1000XM5 Headphones");
    }

    #[test]
    fn stale_ticket_never_completes_newer_search() {
        let mut nav = engine(CategoryId::Groceries);
        nav.dispatch(NavEvent::SearchSubmitted("Rice".into()));
        let stale = nav.pending_ticket().unwrap();

        nav.dispatch(NavEvent::SearchSubmitted("Dal".into()));
        let live = nav.pending_ticket().unwrap();
        assert_ne!(stale, live);

        assert!(nav.dispatch(NavEvent::SearchElapsed { ticket: stale }).is_ignored());
        assert_eq!(nav.current_view(), NavView::Searching);

        nav.dispatch(NavEvent::SearchElapsed { ticket: live });
        assert_eq!(nav.current_view(), NavView::Results);
        assert_eq!(nav.query(), "Dal");
    }

    #[test]
    fn poll_respects_the_configured_delay() {
        let category = CATALOG.category(CategoryId::Transport).unwrap();
        let t0 = now();

        let mut slow = NavigationEngine::new(category, SearchConfig::default());
        slow.dispatch_at(NavEvent::DemoQueryRequested, t0);
        assert!(!slow.poll(t0 + Duration::from_millis(1199)));
        assert_eq!(slow.current_view(), NavView::Searching);
        assert!(slow.poll(t0 + Duration::from_millis(1200)));
        assert_eq!(slow.current_view(), NavView::Results);
        assert!(!slow.poll(t0 + Duration::from_millis(5000)));

        let mut instant = NavigationEngine::new(category, SearchConfig::instant());
        instant.dispatch_at(NavEvent::DemoQueryRequested, t0);
        assert!(instant.poll(t0));
    }

    #[test]
    fn initial_query_uses_deep_link_delay() {
        let category = CATALOG.category(CategoryId::Groceries).unwrap();
        let nav = NavigationEngine::with_initial_query(category, SearchConfig::default(), "Milk");
        assert_eq!(nav.current_view(), NavView::Searching);
        assert_eq!(nav.query(), "Milk");
        let left = nav.time_until_due(now()).unwrap();
        assert!(left <= Duration::from_millis(800));
    }

    #[test]
    fn sort_key_reorders_results_and_resets_on_new_search() {
        let mut nav = engine(CategoryId::Transport);
        nav.dispatch(NavEvent::DemoQueryRequested);
        assert!(nav.dispatch(NavEvent::SortKeyChanged(SortKey::Rating)).is_ignored());
        finish_search(&mut nav);

        assert_eq!(platforms(&nav), vec!["Rapido", "InDrive", "Ola", "Uber"]);
        nav.dispatch(NavEvent::SortKeyChanged(SortKey::Time));
        assert_eq!(platforms(&nav), vec!["Uber", "Ola", "InDrive", "Rapido"]);
        nav.dispatch(NavEvent::SortKeyChanged(SortKey::Rating));
        assert_eq!(platforms(&nav), vec!["Uber", "Ola", "Rapido", "InDrive"]);

        nav.dispatch(NavEvent::SearchSubmitted("Airport".into()));
        assert_eq!(nav.sort_key(), SortKey::Price);
    }

    #[test]
    fn back_to_browse_clears_query() {
        let mut nav = engine(CategoryId::Groceries);
        nav.dispatch(NavEvent::SearchSubmitted("Paneer".into()));
        assert!(nav.dispatch(NavEvent::BackToBrowse).is_ignored());
        finish_search(&mut nav);

        assert_eq!(nav.dispatch(NavEvent::BackToBrowse), Transition::Entered(NavView::Browsing));
        assert_eq!(nav.query(), "");
        assert!(nav.current_results().is_none());

        let mut bare = NavigationEngine::new(&NO_SUBS, SearchConfig::default());
        bare.dispatch(NavEvent::DemoQueryRequested);
        finish_search(&mut bare);
        assert_eq!(bare.dispatch(NavEvent::BackToBrowse), Transition::Entered(NavView::Prompt));
    }

    #[test]
    fn browse_events_are_ignored_while_searching() {
        let mut nav = engine(CategoryId::Groceries);
        nav.dispatch(NavEvent::SearchSubmitted("Eggs".into()));
        assert!(
            nav.dispatch(NavEvent::SubcategoryHeaderClicked("dairy-eggs".into()))
                .is_ignored()
        );
        assert!(nav.dispatch(NavEvent::ItemClicked("Milk".into())).is_ignored());
        assert!(nav.dispatch(NavEvent::DemoQueryRequested).is_ignored());
        assert_eq!(nav.query(), "Eggs");
    }

    #[test]
    fn query_helpers() {
        assert_eq!(compose_option_query("Rentals", "Daily"), "Rentals - Daily");
        assert_eq!(
            compose_route_query(" Connaught Place ", "IGI Airport"),
            "Connaught Place → IGI Airport"
        );
        assert_eq!(compose_route_query("Home", "  "), "Home");
        assert_eq!(compose_route_query("", "Office"), "Office");
        assert_eq!(compose_route_query("", ""), "");
    }
}
