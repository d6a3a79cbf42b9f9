use crate::domain::CategoryId;
use crate::models::result_record::ResultRecord;

/// Glyph hint for a subcategory. Mapped to something drawable by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubcategoryIcon {
    Produce,
    Dairy,
    Grains,
    Cooking,
    Snacks,
    Cleaning,
    Skincare,
    Makeup,
    Haircare,
    PersonalCare,
    Fragrance,
    BeautyTools,
    Bike,
    Auto,
    Car,
    Pool,
    Intercity,
    Rental,
    Pill,
    Generic,
    Heart,
    Wellness,
    FirstAid,
    Baby,
    Fashion,
    Electronics,
    Home,
    Footwear,
    Beauty,
    Sports,
    Books,
}

/// What selecting a subcategory header leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubcategoryAction {
    /// Show the item list for drill-down
    ShowItems,
    /// Open the option picker (e.g. vehicle class)
    PickOption,
    /// Nothing to drill into: search the label itself
    SearchLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subcategory {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: SubcategoryIcon,
    /// Leaf search terms. Empty when the subcategory has none.
    pub items: &'static [&'static str],
    /// Modal choices. Empty when the subcategory has none.
    pub options: &'static [&'static str],
    /// Short emphasis tag such as "Fastest" or "Eco"
    pub tag: Option<&'static str>,
    /// Longer notice such as "Prescription Required"
    pub badge_text: Option<&'static str>,
    pub highlight: bool,
}

impl Subcategory {
    /// Plain subcategory with no items, options or decorations.
    pub const fn plain(id: &'static str, label: &'static str, icon: SubcategoryIcon) -> Self {
        Self {
            id,
            label,
            icon,
            items: &[],
            options: &[],
            tag: None,
            badge_text: None,
            highlight: false,
        }
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Items win over options when a subcategory carries both.
    pub fn action(&self) -> SubcategoryAction {
        if self.has_items() {
            SubcategoryAction::ShowItems
        } else if self.has_options() {
            SubcategoryAction::PickOption
        } else {
            SubcategoryAction::SearchLabel
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    /// Full label, e.g. "Groceries — Fresh & Trustworthy"
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub hero_text: &'static str,
    pub theme: &'static str,
    pub search_placeholder: &'static str,
    /// Query used by the "Try demo" shortcut
    pub demo_query: &'static str,
    pub subcategories: &'static [Subcategory],
    pub mock_results: &'static [ResultRecord],
    /// Scrolling headlines above the category page. Empty for most categories.
    pub ticker: &'static [PriceTick],
}

impl Category {
    /// The part of the label before the " — " separator.
    pub fn short_label(&self) -> &'static str {
        self.label
            .split_once(" — ")
            .map(|(short, _)| short)
            .unwrap_or(self.label)
    }

    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }

    pub fn subcategory(&self, id: &str) -> Option<&'static Subcategory> {
        self.subcategories.iter().find(|sub| sub.id == id)
    }

    /// Whether any subcategory lists `item` among its items.
    pub fn offers_item(&self, item: &str) -> bool {
        self.subcategories.iter().any(|sub| sub.items.contains(&item))
    }
}

/// Tone of a ticker headline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Drop,
    Rise,
    Flash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTick {
    pub kind: TickKind,
    pub text: &'static str,
}

impl PriceTick {
    pub const fn new(kind: TickKind, text: &'static str) -> Self {
        Self { kind, text }
    }
}

/// Mock price movement shown next to each item in the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTrend {
    Up,
    Down,
    Steady,
}

impl ItemTrend {
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            ItemTrend::Up
        } else if index % 2 == 0 {
            ItemTrend::Down
        } else {
            ItemTrend::Steady
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAB: Subcategory = Subcategory {
        options: &["Mini", "Sedan", "SUV"],
        ..Subcategory::plain("cab", "Cab", SubcategoryIcon::Car)
    };

    const CHRONIC: Subcategory = Subcategory {
        items: &["Diabetes", "BP", "Thyroid", "Cholesterol"],
        options: &["Diabetes", "BP", "Thyroid"],
        ..Subcategory::plain("chronic", "Chronic Care", SubcategoryIcon::Heart)
    };

    #[test]
    fn action_follows_items_then_options_then_label() {
        assert_eq!(CHRONIC.action(), SubcategoryAction::ShowItems);
        assert_eq!(CAB.action(), SubcategoryAction::PickOption);
        assert_eq!(
            Subcategory::plain("bike", "Bike Rides", SubcategoryIcon::Bike).action(),
            SubcategoryAction::SearchLabel
        );
    }

    #[test]
    fn item_trend_cycles_up_steady_down() {
        let trends: Vec<ItemTrend> = (0..7).map(ItemTrend::for_index).collect();
        assert_eq!(
            trends,
            vec![
                ItemTrend::Up,
                ItemTrend::Steady,
                ItemTrend::Down,
                ItemTrend::Up,
                ItemTrend::Down,
                ItemTrend::Steady,
                ItemTrend::Up,
            ]
        );
    }
}
