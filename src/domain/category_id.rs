use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of shopping domains the app knows about.
/// Variant order is the dashboard order.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CategoryId {
    Groceries,
    Cosmetics,
    Transport,
    Medicines,
    Shopping,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Transport compares fares between two places rather than product prices.
    pub fn is_transport(&self) -> bool {
        matches!(self, CategoryId::Transport)
    }

    /// Only groceries quote delivery in minutes everywhere, so only they get the
    /// best-pick card with its speed gauge.
    pub fn has_winner_card(&self) -> bool {
        matches!(self, CategoryId::Groceries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively_and_round_trips() {
        assert_eq!("Groceries".parse::<CategoryId>().ok(), Some(CategoryId::Groceries));
        assert_eq!("TRANSPORT".parse::<CategoryId>().ok(), Some(CategoryId::Transport));

        for id in CategoryId::iter() {
            assert_eq!(id.to_string().parse::<CategoryId>().ok(), Some(id));
            assert_eq!(id.as_str(), id.to_string());
        }
    }

    #[test]
    fn winner_card_is_groceries_only() {
        let with_card: Vec<_> = CategoryId::iter().filter(|id| id.has_winner_card()).collect();
        assert_eq!(with_card, vec![CategoryId::Groceries]);
    }

    #[test]
    fn unknown_ids_do_not_parse() {
        assert!("nonexistent".parse::<CategoryId>().is_err());
        assert!("".parse::<CategoryId>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&CategoryId::Medicines).unwrap();
        assert_eq!(json, "\"medicines\"");
    }
}
