//! Property-based tests for the impact engine using proptest.
//!
//! These verify the engine's structural invariants across the whole
//! valid input space, not just the reference scenario.

use proptest::prelude::*;

use crate::engine::blast::blast_radii;
use crate::engine::casualty::{PopulationModel, estimate_casualties};
use crate::engine::kinematics::{kinetic_energy_joules, mass_kg};
use crate::engine::params::ImpactParameters;
use crate::engine::risk::{ImpactSeverity, classify_impact};
use crate::engine::{PopulationModel as Model, assess_impact};
use crate::test_utils::fixtures;

/// UI slider ranges: diameter 10 m - 10 km, velocity 5 - 70 km/s.
fn valid_params() -> impl Strategy<Value = ImpactParameters> {
    (10.0f64..10_000.0, 5.0f64..70.0, 0.0f64..=90.0)
        .prop_map(|(d, v, a)| fixtures::params(d, v, a))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Blast bands stay strictly ordered for any positive yield.
    #[test]
    fn prop_blast_bands_ordered(yield_mt in 1e-6f64..1e7) {
        let r = blast_radii(yield_mt);
        prop_assert!(r.severe < r.moderate);
        prop_assert!(r.moderate < r.light);
    }

    /// Depth is exactly 0.3 of diameter for every valid input.
    #[test]
    fn prop_depth_law(params in valid_params()) {
        let result = assess_impact(&params, Model::Uniform).unwrap();
        prop_assert_eq!(result.crater_depth_km, 0.3 * result.crater_diameter_km);
    }

    /// Casualty totals are always the exact band sum, under both models.
    #[test]
    fn prop_casualty_sum(yield_mt in 1e-3f64..1e6, seed in any::<u64>()) {
        let radii = blast_radii(yield_mt);
        for model in [PopulationModel::Uniform, PopulationModel::Sampled { seed }] {
            let c = estimate_casualties(&radii, model);
            prop_assert_eq!(c.total, c.severe + c.moderate + c.light);
        }
    }

    /// Doubling diameter multiplies mass by 8; doubling velocity
    /// multiplies energy by 4.
    #[test]
    fn prop_scaling_laws(d in 10.0f64..5_000.0, v in 5.0f64..35.0) {
        let m = mass_kg(d, 2500.0);
        let m2 = mass_kg(2.0 * d, 2500.0);
        prop_assert!((m2 / m - 8.0).abs() < 1e-9);

        let e = kinetic_energy_joules(m, v);
        let e2 = kinetic_energy_joules(m, 2.0 * v);
        prop_assert!((e2 / e - 4.0).abs() < 1e-9);
    }

    /// Raising either severity signal never lowers the risk tier.
    #[test]
    fn prop_classifier_monotonic(
        casualties in 0u64..3_000_000,
        energy in 0.0f64..300_000.0,
        extra_casualties in 0u64..3_000_000,
        extra_energy in 0.0f64..300_000.0,
    ) {
        let base = classify_impact(&ImpactSeverity {
            casualties_total: casualties,
            energy_megatons: energy,
        });
        let bumped = classify_impact(&ImpactSeverity {
            casualties_total: casualties + extra_casualties,
            energy_megatons: energy + extra_energy,
        });
        prop_assert!(bumped >= base);
    }

    /// Every valid input produces a fully finite result.
    #[test]
    fn prop_results_finite(params in valid_params()) {
        let result = assess_impact(&params, Model::Uniform).unwrap();
        prop_assert!(result.mass_kg.is_finite() && result.mass_kg > 0.0);
        prop_assert!(result.energy_joules.is_finite() && result.energy_joules > 0.0);
        prop_assert!(result.energy_megatons.is_finite());
        prop_assert!(result.crater_diameter_km.is_finite());
        prop_assert!(result.blast_radii.light.is_finite());
        prop_assert!(result.seismic.magnitude.is_finite());
        prop_assert!(result.atmospheric.dust_volume_km3.is_finite());
    }

    /// Invalid inputs are rejected before any model runs.
    #[test]
    fn prop_nonpositive_inputs_rejected(d in -100.0f64..=0.0, v in -100.0f64..=0.0) {
        let bad_d = fixtures::params(d, 20.0, 45.0);
        prop_assert!(assess_impact(&bad_d, Model::Uniform).is_err());

        let bad_v = fixtures::params(500.0, v, 45.0);
        prop_assert!(assess_impact(&bad_v, Model::Uniform).is_err());
    }
}
