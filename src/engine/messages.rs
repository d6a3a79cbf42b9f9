use crate::domain::SortKey;
use crate::engine::state::NavView;
use crate::engine::timer::SearchTicket;

/// Everything that can move the navigation state machine.
/// Header and item clicks are separate events so nothing is inferred from labels.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// A subcategory card (not one of its items) was clicked
    SubcategoryHeaderClicked(String),
    /// A leaf item was clicked, from the item list or an expanded card
    ItemClicked(String),
    /// An option was picked in the option picker
    OptionChosen(String),
    /// The option picker was closed without a choice
    OptionPickerDismissed,
    /// Leave the item list (or close the option picker)
    Back,
    /// The user submitted the search bar
    SearchSubmitted(String),
    /// The "Try demo" shortcut
    DemoQueryRequested,
    /// The simulated search delay for `ticket` has run out
    SearchElapsed { ticket: SearchTicket },
    /// Re-order the visible results
    SortKeyChanged(SortKey),
    /// Leave the results and return to browsing, clearing the query
    BackToBrowse,
}

/// What a dispatched event did to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A (possibly identical) view was entered afresh
    Entered(NavView),
    /// Same view, but its details changed (picker opened, results re-ordered)
    Updated,
    /// The event has no meaning in the current view
    Ignored,
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }
}
