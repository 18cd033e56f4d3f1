//! Common test utilities for integration tests.

use skysafe::engine::{ImpactParameters, ImpactResult, PopulationModel, assess_impact};
use skysafe::types::ImpactLocation;

/// Build parameters over the default location.
pub fn params(diameter_m: f64, velocity_km_s: f64) -> ImpactParameters {
    ImpactParameters::new(
        diameter_m,
        velocity_km_s,
        45.0,
        ImpactLocation::default(),
    )
}

/// Run the engine with the deterministic population model, panicking on
/// rejection (for tests that only use valid inputs).
pub fn assess(diameter_m: f64, velocity_km_s: f64) -> ImpactResult {
    assess_impact(&params(diameter_m, velocity_km_s), PopulationModel::Uniform)
        .expect("valid parameters")
}
