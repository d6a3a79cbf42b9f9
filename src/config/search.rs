//! Simulated search and ranking configuration

use std::time::Duration;

/// Timing for the simulated "comparing prices" delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLatency {
    // Searches started from inside the app (typed, demo, subcategory, item, option)
    pub interactive_ms: u64,
    // Searches handed in on the command line (`--query`)
    pub deep_link_ms: u64,
}

/// Fallback values used when mock strings cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingFallbacks {
    // Effective minutes for delivery text without "min" (e.g. "Tomorrow")
    pub slow_delivery_minutes: u32,
    // Minutes shown on the winner card when the delivery text has no leading number
    pub hero_minutes: u32,
}

/// The Master Search Configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub latency: SearchLatency,
}

impl SearchConfig {
    pub fn interactive_delay(&self) -> Duration {
        Duration::from_millis(self.latency.interactive_ms)
    }

    pub fn deep_link_delay(&self) -> Duration {
        Duration::from_millis(self.latency.deep_link_ms)
    }

    /// No waiting. Handy for headless callers and tests.
    pub const fn instant() -> Self {
        Self {
            latency: SearchLatency {
                interactive_ms: 0,
                deep_link_ms: 0,
            },
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SEARCH
    }
}

pub const SEARCH: SearchConfig = SearchConfig {
    latency: SearchLatency {
        interactive_ms: 1200,
        deep_link_ms: 800,
    },
};

/// Parse fallbacks shared by every ranking, independent of search timing
pub const RANKING: RankingFallbacks = RankingFallbacks {
    slow_delivery_minutes: 999,
    hero_minutes: 15,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_only_changes_latency() {
        let instant = SearchConfig::instant();
        assert_eq!(instant.interactive_delay(), Duration::ZERO);
        assert_eq!(instant.deep_link_delay(), Duration::ZERO);
        assert_eq!(SearchConfig::default().interactive_delay(), Duration::from_millis(1200));
        assert_eq!(SearchConfig::default().deep_link_delay(), Duration::from_millis(800));
        assert!(RANKING.hero_minutes < RANKING.slow_delivery_minutes);
    }
}
