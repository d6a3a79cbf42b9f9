//! Ordering of mock comparison results.
//!
//! Every parser here is total: malformed fixture strings degrade to zero or to
//! the slow-delivery sentinel instead of failing.

use crate::config::RANKING;
use crate::domain::SortKey;
use crate::models::ResultRecord;

/// Digits of a price string read as one base-10 number ("₹22,990" -> 22990).
/// No digits gives 0. Overflow saturates.
pub fn parse_price(price: &str) -> u64 {
    price
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| {
            acc.checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(d)))
                .unwrap_or(u64::MAX)
        })
}

/// Integer at the start of `text`, after leading whitespace.
fn leading_integer(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits_len = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits_len == 0 {
        return None;
    }
    Some(trimmed[..digits_len].parse::<u32>().unwrap_or(u32::MAX))
}

/// Minutes for descriptors that mention "min" and start with a number.
fn quoted_minutes(delivery: &str) -> Option<u32> {
    if !delivery.contains("min") {
        return None;
    }
    leading_integer(delivery)
}

/// Effective minutes for a delivery descriptor.
/// Anything that is not a minute count ("Tomorrow", "Today, 6 PM") gets the sentinel.
pub fn delivery_minutes(delivery: &str) -> u32 {
    quoted_minutes(delivery).unwrap_or(RANKING.slow_delivery_minutes)
}

/// Sort key for `SortKey::Time`: effective minutes first. At equal minutes a
/// quoted count ("999 min") precedes descriptors that only got the sentinel.
fn time_key(delivery: &str) -> (u32, bool) {
    (delivery_minutes(delivery), quoted_minutes(delivery).is_none())
}

/// Minutes shown on the winner card: the leading number, whatever the unit.
pub fn hero_minutes(record: &ResultRecord) -> u32 {
    leading_integer(record.delivery).unwrap_or(RANKING.hero_minutes)
}

/// Stable ordering of `results` by `key`. Equal keys keep their input order.
pub fn rank(results: &[ResultRecord], key: SortKey) -> Vec<ResultRecord> {
    let mut ranked = results.to_vec();
    match key {
        SortKey::Price => ranked.sort_by_key(|r| r.price_value()),
        SortKey::Time => ranked.sort_by_key(|r| time_key(r.delivery)),
        SortKey::Rating => ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    ranked
}

/// The best pick under `key`, if there are any results at all.
pub fn winner(results: &[ResultRecord], key: SortKey) -> Option<ResultRecord> {
    rank(results, key).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn rec(platform: &'static str, price: &'static str, rating: f32, delivery: &'static str) -> ResultRecord {
        ResultRecord::new(platform, price, rating, delivery)
    }

    fn platforms(results: &[ResultRecord]) -> Vec<&'static str> {
        results.iter().map(|r| r.platform).collect()
    }

    #[test]
    fn parse_price_strips_everything_but_digits() {
        assert_eq!(parse_price("₹425"), 425);
        assert_eq!(parse_price("₹25,490"), 25_490);
        assert_eq!(parse_price("free"), 0);
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn delivery_minutes_only_counts_minute_descriptors() {
        assert_eq!(delivery_minutes("10 mins"), 10);
        assert_eq!(delivery_minutes("4 min away"), 4);
        assert_eq!(delivery_minutes("  8 mins"), 8);
        assert_eq!(delivery_minutes("Tomorrow"), 999);
        assert_eq!(delivery_minutes("Today, 6 PM"), 999);
        assert_eq!(delivery_minutes("mins"), 999);
        assert_eq!(delivery_minutes("2-3 days"), 999);
        assert_eq!(delivery_minutes("Tomorrow"), RANKING.slow_delivery_minutes);
    }

    #[test]
    fn empty_and_single_inputs() {
        for key in SortKey::iter() {
            assert!(rank(&[], key).is_empty());
            let single = [rec("Only", "₹1", 3.0, "Tomorrow")];
            assert_eq!(rank(&single, key), single.to_vec());
        }
    }

    #[test]
    fn price_orders_ascending() {
        let results = [
            rec("A", "₹470", 4.0, "Tomorrow"),
            rec("B", "₹425", 4.5, "Today, 6 PM"),
            rec("C", "₹459", 4.2, "8 mins"),
        ];
        assert_eq!(platforms(&rank(&results, SortKey::Price)), vec!["B", "C", "A"]);
    }

    #[test]
    fn price_ties_keep_input_order() {
        let results = [
            rec("First", "₹300", 4.0, "Tomorrow"),
            rec("Cheap", "₹100", 4.0, "Tomorrow"),
            rec("Second", "Rs. 300", 4.0, "Tomorrow"),
            rec("Third", "₹3,00", 4.0, "Tomorrow"),
        ];
        assert_eq!(
            platforms(&rank(&results, SortKey::Price)),
            vec!["Cheap", "First", "Second", "Third"]
        );
    }

    #[test]
    fn time_puts_non_minute_descriptors_last_in_input_order() {
        let results = [
            rec("Tomorrow", "₹1", 4.0, "Tomorrow"),
            rec("Slowest", "₹1", 4.0, "999 min"),
            rec("Today", "₹1", 4.0, "Today, 6 PM"),
            rec("Quick", "₹1", 4.0, "8 mins"),
        ];
        assert_eq!(
            platforms(&rank(&results, SortKey::Time)),
            vec!["Quick", "Slowest", "Tomorrow", "Today"]
        );
    }

    #[test]
    fn time_orders_by_effective_minutes_beyond_the_sentinel() {
        let results = [
            rec("Long", "₹1", 4.0, "1000 mins"),
            rec("Tomorrow", "₹1", 4.0, "Tomorrow"),
            rec("Slowest", "₹1", 4.0, "999 min"),
            rec("Quick", "₹1", 4.0, "8 mins"),
        ];
        assert_eq!(
            platforms(&rank(&results, SortKey::Time)),
            vec!["Quick", "Slowest", "Tomorrow", "Long"]
        );
    }

    #[test]
    fn rating_orders_descending_with_stable_ties() {
        let results = [
            rec("Low", "₹1", 3.9, "Tomorrow"),
            rec("TopA", "₹1", 4.5, "Tomorrow"),
            rec("Mid", "₹1", 4.2, "Tomorrow"),
            rec("TopB", "₹1", 4.5, "Tomorrow"),
        ];
        assert_eq!(
            platforms(&rank(&results, SortKey::Rating)),
            vec!["TopA", "TopB", "Mid", "Low"]
        );
    }

    #[test]
    fn winner_is_head_of_ranking() {
        let results = [
            rec("Ola", "₹320", 4.2, "4 min away"),
            rec("Uber", "₹345", 4.5, "2 min away"),
            rec("Rapido", "₹280", 4.0, "6 min away"),
        ];
        assert_eq!(winner(&results, SortKey::Price).map(|r| r.platform), Some("Rapido"));
        assert_eq!(winner(&results, SortKey::Time).map(|r| r.platform), Some("Uber"));
        assert_eq!(winner(&results, SortKey::Rating).map(|r| r.platform), Some("Uber"));
        assert_eq!(winner(&[], SortKey::Price), None);
    }

    #[test]
    fn hero_minutes_reads_any_leading_number() {
        assert_eq!(hero_minutes(&rec("Z", "₹1", 4.0, "8 mins")), 8);
        assert_eq!(hero_minutes(&rec("N", "₹1", 4.0, "2-3 days")), 2);
        assert_eq!(hero_minutes(&rec("B", "₹1", 4.0, "Today, 6 PM")), 15);
        assert_eq!(hero_minutes(&rec("B", "₹1", 4.0, "Today, 6 PM")), RANKING.hero_minutes);
    }
}
