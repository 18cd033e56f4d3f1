//! Earthquake-equivalent seismic magnitude from yield.
//!
//! Empirical regression mapping megatons to a Richter-style magnitude,
//! bucketed into a coarse severity category for display.

/// Discrete severity bucket for a seismic magnitude.
///
/// Ordered weakest to strongest so comparisons follow severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeismicCategory {
    Moderate,
    Strong,
    Major,
    Catastrophic,
}

impl SeismicCategory {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            SeismicCategory::Moderate => "Moderate",
            SeismicCategory::Strong => "Strong",
            SeismicCategory::Major => "Major",
            SeismicCategory::Catastrophic => "Catastrophic",
        }
    }

    /// Bucket a magnitude: > 8 Catastrophic, > 7 Major, > 6 Strong,
    /// else Moderate.
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude > 8.0 {
            SeismicCategory::Catastrophic
        } else if magnitude > 7.0 {
            SeismicCategory::Major
        } else if magnitude > 6.0 {
            SeismicCategory::Strong
        } else {
            SeismicCategory::Moderate
        }
    }
}

/// Magnitude plus its display bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeismicEffect {
    /// Richter-scale-equivalent magnitude.
    pub magnitude: f64,
    /// Severity bucket for the magnitude.
    pub category: SeismicCategory,
}

/// Derive the seismic effect for a positive yield.
///
/// M = 0.67·log10(yield_MT) + 5.87. Requires `yield_megatons > 0`
/// (log domain); the validator guarantees this upstream.
pub fn seismic_effect(yield_megatons: f64) -> SeismicEffect {
    let magnitude = 0.67 * yield_megatons.log10() + 5.87;
    SeismicEffect {
        magnitude,
        category: SeismicCategory::from_magnitude(magnitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_impact_magnitude() {
        // 7821.6 MT (500 m / 20 km/s impactor).
        let effect = seismic_effect(7821.6);
        assert_relative_eq!(effect.magnitude, 8.48, epsilon = 0.02);
        assert_eq!(effect.category, SeismicCategory::Catastrophic);
    }

    #[test]
    fn test_unit_yield_magnitude() {
        // log10(1) = 0, so the magnitude is the regression intercept.
        let effect = seismic_effect(1.0);
        assert_relative_eq!(effect.magnitude, 5.87, epsilon = 1e-12);
        assert_eq!(effect.category, SeismicCategory::Moderate);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(SeismicCategory::from_magnitude(8.1), SeismicCategory::Catastrophic);
        assert_eq!(SeismicCategory::from_magnitude(8.0), SeismicCategory::Major);
        assert_eq!(SeismicCategory::from_magnitude(7.5), SeismicCategory::Major);
        assert_eq!(SeismicCategory::from_magnitude(7.0), SeismicCategory::Strong);
        assert_eq!(SeismicCategory::from_magnitude(6.5), SeismicCategory::Strong);
        assert_eq!(SeismicCategory::from_magnitude(6.0), SeismicCategory::Moderate);
        assert_eq!(SeismicCategory::from_magnitude(3.0), SeismicCategory::Moderate);
    }

    #[test]
    fn test_category_ordering() {
        assert!(SeismicCategory::Moderate < SeismicCategory::Strong);
        assert!(SeismicCategory::Strong < SeismicCategory::Major);
        assert!(SeismicCategory::Major < SeismicCategory::Catastrophic);
    }

    #[test]
    fn test_magnitude_monotonic_in_yield() {
        let low = seismic_effect(10.0).magnitude;
        let high = seismic_effect(1000.0).magnitude;
        assert!(low < high);
    }
}
