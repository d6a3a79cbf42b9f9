use serde::Serialize;
use std::fmt;
use strum_macros::{EnumIter, EnumString};

/// The field used to order comparison results for display.
#[derive(
    Serialize, Debug, Clone, Copy, Default, Hash, Eq, PartialEq, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    /// Cheapest first
    #[default]
    Price,
    /// Quickest delivery / nearest ride first
    #[strum(serialize = "time", serialize = "delivery")]
    Time,
    /// Best rated first
    Rating,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Price => write!(f, "Price"),
            SortKey::Time => write!(f, "Delivery time"),
            SortKey::Rating => write!(f, "Rating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flag_values_and_serializes_for_json() {
        assert_eq!("delivery".parse::<SortKey>().ok(), Some(SortKey::Time));
        assert_eq!("RATING".parse::<SortKey>().ok(), Some(SortKey::Rating));
        assert_eq!(SortKey::default(), SortKey::Price);
        assert_eq!(serde_json::to_string(&SortKey::Time).unwrap(), "\"Time\"");
    }
}
