//! Risk classification for impacts and catalog objects.
//!
//! One generic ordered-threshold walk serves two independent
//! classifiers: simulated-impact severity (casualties/energy) and
//! catalog impact probability. The two keep separate tier vocabularies
//! and rule tables so they cannot be conflated.

/// Walk `rules` highest tier first and return the first matching tier.
///
/// Tiers are strictly nested by construction of the tables below, so the
/// first match is always the highest applicable tier.
pub fn classify<I, T: Copy>(rules: &[(fn(&I) -> bool, T)], fallback: T, input: &I) -> T {
    rules
        .iter()
        .find(|(matches, _)| matches(input))
        .map(|(_, tier)| *tier)
        .unwrap_or(fallback)
}

/// Severity tier of a simulated impact, ordered least severe first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskTier {
    Low,
    Moderate,
    Severe,
    Catastrophic,
}

impl RiskTier {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::Severe => "Severe",
            RiskTier::Catastrophic => "Catastrophic",
        }
    }

    /// Response-priority tag shown next to the tier.
    pub fn priority(&self) -> &'static str {
        match self {
            RiskTier::Low => "P4 - Standard Priority",
            RiskTier::Moderate => "P3 - Medium Priority",
            RiskTier::Severe => "P2 - High Priority",
            RiskTier::Catastrophic => "P1 - Maximum Priority",
        }
    }

    /// One-line banner description.
    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::Low => "Minor threat, monitoring and preparation advised",
            RiskTier::Moderate => "Significant threat requiring coordinated response",
            RiskTier::Severe => "Major threat requiring urgent international coordination",
            RiskTier::Catastrophic => "Existential threat requiring immediate global response",
        }
    }
}

/// The two signals the impact classifier reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactSeverity {
    pub casualties_total: u64,
    pub energy_megatons: f64,
}

/// Impact rule table, highest tier first. Each tier matches on either
/// signal (OR), and the casualty/energy thresholds shrink together so
/// the tiers are strictly nested.
static IMPACT_RULES: &[(fn(&ImpactSeverity) -> bool, RiskTier)] = &[
    (
        |s| s.casualties_total > 1_000_000 || s.energy_megatons > 100_000.0,
        RiskTier::Catastrophic,
    ),
    (
        |s| s.casualties_total > 100_000 || s.energy_megatons > 1_000.0,
        RiskTier::Severe,
    ),
    (
        |s| s.casualties_total > 10_000 || s.energy_megatons > 100.0,
        RiskTier::Moderate,
    ),
];

/// Classify a simulated impact by its aggregated severity signals.
pub fn classify_impact(severity: &ImpactSeverity) -> RiskTier {
    classify(IMPACT_RULES, RiskTier::Low, severity)
}

/// Risk tier of a catalog object, from impact probability alone.
///
/// Deliberately a separate vocabulary from [`RiskTier`]: probability and
/// simulated severity are different domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CatalogRisk {
    Low,
    Moderate,
    High,
}

impl CatalogRisk {
    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            CatalogRisk::Low => "Low",
            CatalogRisk::Moderate => "Moderate",
            CatalogRisk::High => "High",
        }
    }
}

/// Probability rule table, highest tier first.
static PROBABILITY_RULES: &[(fn(&f64) -> bool, CatalogRisk)] = &[
    (|p| *p > 0.001, CatalogRisk::High),
    (|p| *p > 0.0001, CatalogRisk::Moderate),
];

/// Classify a catalog object by its cumulative impact probability.
pub fn classify_probability(probability: f64) -> CatalogRisk {
    classify(PROBABILITY_RULES, CatalogRisk::Low, &probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_tiers_by_casualties() {
        let tier = |casualties_total| {
            classify_impact(&ImpactSeverity {
                casualties_total,
                energy_megatons: 0.1,
            })
        };
        assert_eq!(tier(1_000_001), RiskTier::Catastrophic);
        assert_eq!(tier(1_000_000), RiskTier::Severe);
        assert_eq!(tier(100_001), RiskTier::Severe);
        assert_eq!(tier(100_000), RiskTier::Moderate);
        assert_eq!(tier(10_001), RiskTier::Moderate);
        assert_eq!(tier(10_000), RiskTier::Low);
        assert_eq!(tier(0), RiskTier::Low);
    }

    #[test]
    fn test_impact_tiers_by_energy() {
        let tier = |energy_megatons| {
            classify_impact(&ImpactSeverity {
                casualties_total: 0,
                energy_megatons,
            })
        };
        assert_eq!(tier(100_001.0), RiskTier::Catastrophic);
        assert_eq!(tier(50_000.0), RiskTier::Severe);
        assert_eq!(tier(500.0), RiskTier::Moderate);
        assert_eq!(tier(100.0), RiskTier::Low);
        assert_eq!(tier(1.0), RiskTier::Low);
    }

    #[test]
    fn test_either_signal_is_sufficient() {
        // Low casualties but catastrophic energy, and vice versa.
        assert_eq!(
            classify_impact(&ImpactSeverity {
                casualties_total: 5,
                energy_megatons: 2e5,
            }),
            RiskTier::Catastrophic
        );
        assert_eq!(
            classify_impact(&ImpactSeverity {
                casualties_total: 2_000_000,
                energy_megatons: 0.01,
            }),
            RiskTier::Catastrophic
        );
    }

    #[test]
    fn test_probability_tiers() {
        assert_eq!(classify_probability(0.002), CatalogRisk::High);
        assert_eq!(classify_probability(0.001), CatalogRisk::Moderate);
        assert_eq!(classify_probability(0.0005), CatalogRisk::Moderate);
        assert_eq!(classify_probability(0.0001), CatalogRisk::Low);
        assert_eq!(classify_probability(0.0), CatalogRisk::Low);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::Severe);
        assert!(RiskTier::Severe < RiskTier::Catastrophic);
        assert!(CatalogRisk::Low < CatalogRisk::Moderate);
        assert!(CatalogRisk::Moderate < CatalogRisk::High);
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(RiskTier::Catastrophic.priority(), "P1 - Maximum Priority");
        assert_eq!(RiskTier::Low.priority(), "P4 - Standard Priority");
    }
}
