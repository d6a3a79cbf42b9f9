use std::fmt;

/// Delivery speed bucket for the winner card gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedBand {
    Fast,
    Moderate,
    Slow,
}

/// Minutes that fill the gauge completely
const GAUGE_FULL_MINUTES: f32 = 60.0;

impl SpeedBand {
    pub fn for_minutes(minutes: u32) -> Self {
        match minutes {
            0..=20 => SpeedBand::Fast,
            21..=45 => SpeedBand::Moderate,
            _ => SpeedBand::Slow,
        }
    }

    /// Fill fraction of the gauge, clamped to 1.0.
    pub fn gauge_fraction(minutes: u32) -> f32 {
        (minutes as f32 / GAUGE_FULL_MINUTES).min(1.0)
    }
}

impl fmt::Display for SpeedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedBand::Fast => write!(f, "Fast"),
            SpeedBand::Moderate => write!(f, "Moderate"),
            SpeedBand::Slow => write!(f, "Slow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(SpeedBand::for_minutes(0), SpeedBand::Fast);
        assert_eq!(SpeedBand::for_minutes(20), SpeedBand::Fast);
        assert_eq!(SpeedBand::for_minutes(21), SpeedBand::Moderate);
        assert_eq!(SpeedBand::for_minutes(45), SpeedBand::Moderate);
        assert_eq!(SpeedBand::for_minutes(46), SpeedBand::Slow);
    }

    #[test]
    fn gauge_is_clamped() {
        assert!((SpeedBand::gauge_fraction(30) - 0.5).abs() < f32::EPSILON);
        assert!((SpeedBand::gauge_fraction(999) - 1.0).abs() < f32::EPSILON);
    }
}
