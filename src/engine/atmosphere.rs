//! Atmospheric dust loading and climate impact category.

/// Fraction of the crater-diameter cube ejected as atmospheric dust.
const DUST_FRACTION: f64 = 0.2;

/// Discrete climate consequence of an impact, ordered mildest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClimateImpact {
    Minimal,
    LocalEffects,
    RegionalChange,
    GlobalWinter,
}

impl ClimateImpact {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            ClimateImpact::Minimal => "Minimal",
            ClimateImpact::LocalEffects => "Local Effects",
            ClimateImpact::RegionalChange => "Regional Climate Change",
            ClimateImpact::GlobalWinter => "Global Winter",
        }
    }

    /// Bucket by yield: > 100 000 MT Global Winter, > 10 000 MT
    /// Regional Climate Change, > 1 000 MT Local Effects, else Minimal.
    pub fn from_yield(yield_megatons: f64) -> Self {
        if yield_megatons > 100_000.0 {
            ClimateImpact::GlobalWinter
        } else if yield_megatons > 10_000.0 {
            ClimateImpact::RegionalChange
        } else if yield_megatons > 1_000.0 {
            ClimateImpact::LocalEffects
        } else {
            ClimateImpact::Minimal
        }
    }
}

/// Dust volume plus the climate bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphericEffect {
    /// Ejected dust volume in km³.
    pub dust_volume_km3: f64,
    /// Climate consequence bucket.
    pub climate: ClimateImpact,
}

/// Derive atmospheric effects from crater size and yield.
pub fn atmospheric_effect(crater_diameter_km: f64, yield_megatons: f64) -> AtmosphericEffect {
    AtmosphericEffect {
        dust_volume_km3: crater_diameter_km.powi(3) * DUST_FRACTION,
        climate: ClimateImpact::from_yield(yield_megatons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dust_volume() {
        let effect = atmospheric_effect(10.0, 1.0);
        assert_relative_eq!(effect.dust_volume_km3, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_climate_thresholds() {
        assert_eq!(ClimateImpact::from_yield(100_001.0), ClimateImpact::GlobalWinter);
        assert_eq!(ClimateImpact::from_yield(100_000.0), ClimateImpact::RegionalChange);
        assert_eq!(ClimateImpact::from_yield(10_001.0), ClimateImpact::RegionalChange);
        assert_eq!(ClimateImpact::from_yield(10_000.0), ClimateImpact::LocalEffects);
        assert_eq!(ClimateImpact::from_yield(1_001.0), ClimateImpact::LocalEffects);
        assert_eq!(ClimateImpact::from_yield(1_000.0), ClimateImpact::Minimal);
        assert_eq!(ClimateImpact::from_yield(0.5), ClimateImpact::Minimal);
    }

    #[test]
    fn test_reference_impact_is_local_effects() {
        // 7821.6 MT sits between the 1 000 and 10 000 MT thresholds.
        assert_eq!(ClimateImpact::from_yield(7821.6), ClimateImpact::LocalEffects);
    }

    #[test]
    fn test_climate_ordering() {
        assert!(ClimateImpact::Minimal < ClimateImpact::LocalEffects);
        assert!(ClimateImpact::LocalEffects < ClimateImpact::RegionalChange);
        assert!(ClimateImpact::RegionalChange < ClimateImpact::GlobalWinter);
    }
}
