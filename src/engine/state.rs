use std::fmt;

use crate::models::{Category, Subcategory, SubcategoryAction};

/// The single active view of a category session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavView {
    /// Nothing to browse: the category has no subcategories
    Prompt,
    /// Subcategory grid (the option picker may be open on top)
    Browsing,
    /// Items of the selected subcategory
    ItemList,
    /// Simulated search in flight
    Searching,
    /// Ranked comparison results
    Results,
}

impl fmt::Display for NavView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavView::Prompt => "prompt",
            NavView::Browsing => "browsing",
            NavView::ItemList => "item-list",
            NavView::Searching => "searching",
            NavView::Results => "results",
        };
        write!(f, "{}", name)
    }
}

/// View tag plus the selection and query that go with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub view: NavView,
    /// Drives the item list, or the option picker while browsing
    pub selected_subcategory: Option<&'static Subcategory>,
    pub query: String,
}

impl NavigationState {
    /// Where a fresh session for `category` starts.
    pub fn initial(category: &Category) -> Self {
        Self {
            view: Self::home_view(category),
            selected_subcategory: None,
            query: String::new(),
        }
    }

    pub fn home_view(category: &Category) -> NavView {
        if category.has_subcategories() {
            NavView::Browsing
        } else {
            NavView::Prompt
        }
    }

    /// Subcategory whose options are being offered, if the picker is open.
    pub fn option_picker(&self) -> Option<&'static Subcategory> {
        match (self.view, self.selected_subcategory) {
            (NavView::Browsing, Some(sub)) if sub.action() == SubcategoryAction::PickOption => {
                Some(sub)
            }
            _ => None,
        }
    }

    /// Both the search input and the demo shortcut are available here.
    pub fn accepts_new_search(&self) -> bool {
        matches!(
            self.view,
            NavView::Prompt | NavView::Browsing | NavView::ItemList
        )
    }
}
