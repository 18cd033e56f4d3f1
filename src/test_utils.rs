//! Test utilities for impact engine tests.
//!
//! Provides fixtures for building impact parameters without repeating
//! the location plumbing in every test.

use crate::engine::params::ImpactParameters;
use crate::types::ImpactLocation;

/// Fixtures for creating test parameters.
pub mod fixtures {
    use super::*;

    /// The documented reference scenario: 500 m at 20 km/s over the
    /// default location.
    pub fn reference_params() -> ImpactParameters {
        ImpactParameters::default()
    }

    /// Parameters with the given diameter and velocity, standard
    /// density and a valid default location.
    pub fn params(diameter_m: f64, velocity_km_s: f64, entry_angle_deg: f64) -> ImpactParameters {
        ImpactParameters::new(
            diameter_m,
            velocity_km_s,
            entry_angle_deg,
            ImpactLocation::default(),
        )
    }

    /// Parameters aimed at a remote ocean location.
    pub fn ocean_params(diameter_m: f64, velocity_km_s: f64) -> ImpactParameters {
        ImpactParameters::new(
            diameter_m,
            velocity_km_s,
            45.0,
            ImpactLocation::new(0.0, -160.0, "Pacific Ocean (Center)"),
        )
    }
}
