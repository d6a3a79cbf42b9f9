use serde::Serialize;

use crate::analysis::ranking::parse_price;

/// A hardcoded quote from one platform. Constructed once as fixture data.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ResultRecord {
    pub platform: &'static str,
    /// Currency-formatted, e.g. "₹425"
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    /// 0.0 ..= 5.0
    pub rating: f32,
    /// Free text: "10 mins", "Today, 6 PM", "4 min away"
    pub delivery: &'static str,
    pub badge: Option<&'static str>,
}

impl ResultRecord {
    /// Record with only the required fields set.
    pub const fn new(
        platform: &'static str,
        price: &'static str,
        rating: f32,
        delivery: &'static str,
    ) -> Self {
        Self {
            platform,
            price,
            original_price: None,
            rating,
            delivery,
            badge: None,
        }
    }

    pub fn price_value(&self) -> u64 {
        parse_price(self.price)
    }

    pub fn original_price_value(&self) -> Option<u64> {
        self.original_price.map(parse_price)
    }

    /// Amount saved against the original price, if there is a real discount.
    pub fn savings(&self) -> Option<u64> {
        let original = self.original_price_value()?;
        let price = self.price_value();
        (original > price).then(|| original - price)
    }

    pub fn discount_percent(&self) -> Option<u32> {
        let saved = self.savings()?;
        let original = self.original_price_value()?;
        Some(((saved as f64 / original as f64) * 100.0).round() as u32)
    }

    /// First character of the platform name, used as a logo stand-in.
    pub fn monogram(&self) -> char {
        self.platform.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savings_and_discount_from_original_price() {
        let rec = ResultRecord {
            original_price: Some("₹520"),
            ..ResultRecord::new("BigBasket", "₹425", 4.5, "Today, 6 PM")
        };
        assert_eq!(rec.price_value(), 425);
        assert_eq!(rec.savings(), Some(95));
        assert_eq!(rec.discount_percent(), Some(18));
    }

    #[test]
    fn no_savings_without_a_higher_original() {
        let plain = ResultRecord::new("Blinkit", "₹449", 4.3, "10 mins");
        assert_eq!(plain.savings(), None);
        assert_eq!(plain.discount_percent(), None);

        let odd = ResultRecord {
            original_price: Some("₹400"),
            ..plain
        };
        assert_eq!(odd.savings(), None);
    }

    #[test]
    fn thousands_separators_are_ignored() {
        let rec = ResultRecord {
            original_price: Some("₹29,990"),
            ..ResultRecord::new("Amazon", "₹22,990", 4.7, "Tomorrow")
        };
        assert_eq!(rec.price_value(), 22_990);
        assert_eq!(rec.savings(), Some(7_000));
        assert_eq!(rec.monogram(), 'A');
    }
}
