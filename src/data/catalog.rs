use itertools::Itertools;
use std::fmt;
use strum::IntoEnumIterator;

use crate::domain::CategoryId;
use crate::models::Category;

use super::fixtures::CATEGORIES;

/// Errors raised by catalog lookups and fixture validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The identifier is not one of the known categories
    NotFound(String),
    /// The fixture breaks one of its own invariants
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(id) => write!(f, "Unknown category: {}", id),
            CatalogError::Invalid(msg) => write!(f, "Invalid catalog fixture: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only lookup from category id to its configuration and mock data.
#[derive(Debug)]
pub struct CategoryCatalog {
    categories: &'static [Category],
}

/// The process-wide catalog, built at compile time.
pub static CATALOG: CategoryCatalog = CategoryCatalog {
    categories: &CATEGORIES,
};

impl CategoryCatalog {
    /// All categories, in dashboard order.
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Lookup by raw identifier (CLI flags, persisted state).
    pub fn get_category(&self, id: &str) -> Result<&'static Category, CatalogError> {
        let parsed = id
            .trim()
            .parse::<CategoryId>()
            .map_err(|_| CatalogError::NotFound(id.to_string()))?;
        self.category(parsed)
    }

    pub fn category(&self, id: CategoryId) -> Result<&'static Category, CatalogError> {
        self.categories
            .iter()
            .find(|cat| cat.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Checks the fixture invariants. Returns the first violation found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for id in CategoryId::iter() {
            self.category(id)?;
        }

        for cat in self.categories {
            if !cat.mock_results.iter().map(|r| r.platform).all_unique() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate platform in {} results",
                    cat.id
                )));
            }

            if let Some(bad) = cat
                .mock_results
                .iter()
                .find(|r| !(0.0..=5.0).contains(&r.rating))
            {
                return Err(CatalogError::Invalid(format!(
                    "{} rating {} out of range in {}",
                    bad.platform, bad.rating, cat.id
                )));
            }

            if !cat.subcategories.iter().map(|s| s.id).all_unique() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate subcategory id in {}",
                    cat.id
                )));
            }

            if cat.demo_query.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "{} has an empty demo query",
                    cat.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::GROCERIES;
    use crate::models::{ResultRecord, TickKind};

    #[test]
    fn unknown_id_is_not_found() {
        assert_eq!(
            CATALOG.get_category("nonexistent"),
            Err(CatalogError::NotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn lookup_by_string_and_enum_agree() {
        for id in CategoryId::iter() {
            let by_str = CATALOG.get_category(id.as_str()).unwrap();
            let by_enum = CATALOG.category(id).unwrap();
            assert_eq!(by_str.id, by_enum.id);
        }
        assert_eq!(
            CATALOG.get_category(" Groceries ").unwrap().id,
            CategoryId::Groceries
        );
    }

    #[test]
    fn fixture_is_valid_and_in_dashboard_order() {
        assert_eq!(CATALOG.validate(), Ok(()));
        let ids: Vec<CategoryId> = CATALOG.categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, CategoryId::iter().collect::<Vec<_>>());
    }

    #[test]
    fn fixture_content_matches_known_values() {
        let groceries = CATALOG.category(CategoryId::Groceries).unwrap();
        assert_eq!(groceries.short_label(), "Groceries");
        assert_eq!(groceries.mock_results.len(), 4);
        assert_eq!(
            groceries.subcategory("fruits-veggies").map(|s| s.items.len()),
            Some(5)
        );

        let transport = CATALOG.category(CategoryId::Transport).unwrap();
        assert_eq!(transport.subcategory("cab").map(|s| s.options), Some(&["Mini", "Sedan", "SUV"][..]));
    }

    #[test]
    fn only_groceries_carry_a_price_ticker() {
        for category in CATALOG.categories() {
            assert_eq!(!category.ticker.is_empty(), category.id == CategoryId::Groceries);
        }
        let groceries = CATALOG.category(CategoryId::Groceries).unwrap();
        assert_eq!(groceries.ticker[0].text, "Onions down 12% on Blinkit");
        assert_eq!(groceries.ticker[1].kind, TickKind::Rise);
    }

    #[test]
    fn validation_catches_duplicate_platforms() {
        static DUPES: [ResultRecord; 2] = [
            ResultRecord::new("Same", "₹1", 4.0, "Tomorrow"),
            ResultRecord::new("Same", "₹2", 4.0, "Tomorrow"),
        ];
        let mut categories = CATEGORIES.to_vec();
        categories[0] = Category {
            mock_results: &DUPES,
            ..GROCERIES
        };
        let catalog = CategoryCatalog {
            categories: Box::leak(categories.into_boxed_slice()),
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn validation_requires_every_category() {
        let catalog = CategoryCatalog {
            categories: &CATEGORIES[..2],
        };
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::NotFound("transport".to_string()))
        );
    }
}
