//! Full-pipeline integration tests for the impact engine.
//!
//! Exercises the documented reference scenario end to end and the
//! cross-module invariants a consumer of `ImpactResult` relies on.

mod common;

use approx::assert_relative_eq;

use skysafe::engine::risk::{CatalogRisk, classify_probability};
use skysafe::engine::{
    ClimateImpact, EngineError, PopulationModel, RiskTier, SeismicCategory, assess_impact,
};
use skysafe::types::{format_count, format_magnitude};

use common::{assess, params};

#[test]
fn test_reference_scenario_end_to_end() {
    // 500 m impactor at 20 km/s, density 2500 kg/m³.
    let result = assess(500.0, 20.0);

    assert_relative_eq!(result.mass_kg, 1.636e11, max_relative = 1e-3);
    assert_relative_eq!(result.energy_joules, 3.272e19, max_relative = 1e-3);
    assert_relative_eq!(result.energy_megatons, 7821.6, max_relative = 1e-3);
    assert_relative_eq!(result.crater_diameter_km, 271.8, max_relative = 2e-3);
    assert_relative_eq!(result.crater_depth_km, 81.5, max_relative = 2e-3);
    assert_relative_eq!(result.blast_radii.severe, 42.4, max_relative = 3e-3);
    assert_relative_eq!(result.blast_radii.moderate, 106.0, max_relative = 3e-3);
    assert_relative_eq!(result.blast_radii.light, 212.1, max_relative = 3e-3);
    assert_relative_eq!(result.seismic.magnitude, 8.5, epsilon = 0.05);
    assert_eq!(result.seismic.category, SeismicCategory::Catastrophic);
    // 7821.6 MT is below the 10,000 MT regional threshold.
    assert_eq!(result.atmospheric.climate, ClimateImpact::LocalEffects);
}

#[test]
fn test_blast_bands_ordered_across_size_sweep() {
    for diameter in [10.0, 50.0, 200.0, 500.0, 2000.0, 10_000.0] {
        let result = assess(diameter, 20.0);
        assert!(
            result.blast_radii.severe < result.blast_radii.moderate
                && result.blast_radii.moderate < result.blast_radii.light,
            "ordering violated at diameter {diameter}"
        );
    }
}

#[test]
fn test_casualty_sum_and_depth_law() {
    for diameter in [20.0, 500.0, 5000.0] {
        let result = assess(diameter, 30.0);
        assert_eq!(
            result.casualties.total,
            result.casualties.severe + result.casualties.moderate + result.casualties.light
        );
        assert_eq!(result.crater_depth_km, 0.3 * result.crater_diameter_km);
    }
}

#[test]
fn test_rejections_produce_no_result() {
    assert_eq!(
        assess_impact(&params(0.0, 20.0), PopulationModel::Uniform),
        Err(EngineError::InvalidDiameter(0.0))
    );
    assert_eq!(
        assess_impact(&params(500.0, -5.0), PopulationModel::Uniform),
        Err(EngineError::InvalidVelocity(-5.0))
    );

    let mut bad_angle = params(500.0, 20.0);
    bad_angle.entry_angle_deg = 120.0;
    assert_eq!(
        assess_impact(&bad_angle, PopulationModel::Uniform),
        Err(EngineError::InvalidEntryAngle(120.0))
    );
}

#[test]
fn test_risk_tier_grows_with_size() {
    // A small rock over land stays low-tier; a big one climbs.
    let small = assess(10.0, 5.0);
    let large = assess(10_000.0, 70.0);
    assert!(small.risk < large.risk);
    assert_eq!(large.risk, RiskTier::Catastrophic);
}

#[test]
fn test_entry_angle_does_not_affect_outputs() {
    // The angle is carried but intentionally unused by the formulas.
    let mut steep = params(500.0, 20.0);
    steep.entry_angle_deg = 90.0;
    let mut shallow = params(500.0, 20.0);
    shallow.entry_angle_deg = 15.0;

    let a = assess_impact(&steep, PopulationModel::Uniform).unwrap();
    let b = assess_impact(&shallow, PopulationModel::Uniform).unwrap();
    assert_eq!(a.energy_joules, b.energy_joules);
    assert_eq!(a.blast_radii, b.blast_radii);
    assert_eq!(a.casualties, b.casualties);
}

#[test]
fn test_sampled_population_reproducible_across_pipeline() {
    let p = params(500.0, 20.0);
    let a = assess_impact(&p, PopulationModel::Sampled { seed: 42 }).unwrap();
    let b = assess_impact(&p, PopulationModel::Sampled { seed: 42 }).unwrap();
    assert_eq!(a.casualties, b.casualties);

    let c = assess_impact(&p, PopulationModel::Sampled { seed: 43 }).unwrap();
    // Different seed, same physics.
    assert_eq!(a.energy_joules, c.energy_joules);
}

#[test]
fn test_display_precision_contract() {
    // Consumers render two decimals for magnitudes and separated
    // integers for casualties, reading fields verbatim.
    let result = assess(500.0, 20.0);
    let energy = format_magnitude(result.energy_megatons);
    assert_eq!(energy.split('.').nth(1).map(str::len), Some(2));
    let count = format_count(result.casualties.total);
    assert!(!count.contains('.'));
}

#[test]
fn test_probability_classifier_independent_of_impact_classifier() {
    // Catalog probabilities classify on their own scale; a severe
    // simulated impact does not move catalog tiers.
    assert_eq!(classify_probability(0.002), CatalogRisk::High);
    let result = assess(10_000.0, 70.0);
    assert_eq!(result.risk, RiskTier::Catastrophic);
    assert_eq!(classify_probability(0.00005), CatalogRisk::Low);
}
