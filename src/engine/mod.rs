//! Impact physics and risk estimation engine.
//!
//! A pure, synchronous pipeline from [`ImpactParameters`] to an
//! immutable [`ImpactResult`]:
//!
//! validate → mass/energy → yield → {crater, blast, seismic}
//! → casualties → atmosphere → risk tier
//!
//! The engine holds no state and performs no I/O; it is evaluated once
//! per user action and the caller keeps (and later supersedes) the
//! returned value. Errors are reported before any model output is
//! produced, never as a partial result.

pub mod atmosphere;
pub mod blast;
pub mod casualty;
pub mod crater;
pub mod kinematics;
pub mod params;
pub mod risk;
pub mod seismic;

#[cfg(test)]
mod proptest_engine;

pub use atmosphere::{AtmosphericEffect, ClimateImpact};
pub use blast::BlastRadii;
pub use casualty::{CasualtyEstimate, PopulationModel};
pub use params::{EngineError, ImpactParameters};
pub use risk::{CatalogRisk, ImpactSeverity, RiskTier};
pub use seismic::{SeismicCategory, SeismicEffect};

use crate::types::ImpactLocation;

/// Everything derived from one impact scenario.
///
/// Produced once per computation and never mutated; downstream
/// consumers read these fields verbatim instead of re-deriving them.
/// Units: kg, joules, megatons of TNT, km.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactResult {
    pub mass_kg: f64,
    pub energy_joules: f64,
    pub energy_megatons: f64,
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    pub blast_radii: BlastRadii,
    pub casualties: CasualtyEstimate,
    pub seismic: SeismicEffect,
    pub atmospheric: AtmosphericEffect,
    /// Overall severity tier from casualties and yield.
    pub risk: RiskTier,
    /// Echo of the input location, for display.
    pub location: ImpactLocation,
}

fn finite(value: f64, stage: &'static str) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::ComputationOverflow { stage })
    }
}

/// Run the full assessment pipeline.
///
/// Validation failures and non-finite intermediates surface as
/// [`EngineError`]; a returned result is always fully populated and
/// finite.
pub fn assess_impact(
    params: &ImpactParameters,
    population: PopulationModel,
) -> Result<ImpactResult, EngineError> {
    params.validate()?;

    let mass_kg = finite(
        kinematics::mass_kg(params.diameter_m, params.density_kg_m3),
        "mass",
    )?;
    let energy_joules = finite(
        kinematics::kinetic_energy_joules(mass_kg, params.velocity_km_s),
        "kinetic energy",
    )?;
    let energy_megatons = finite(kinematics::energy_megatons(energy_joules), "yield")?;

    let crater_diameter_km = finite(crater::crater_diameter_km(energy_joules), "crater diameter")?;
    let crater_depth_km = finite(crater::crater_depth_km(crater_diameter_km), "crater depth")?;

    let blast_radii = blast::blast_radii(energy_megatons);
    finite(blast_radii.light, "blast radii")?;

    let seismic = seismic::seismic_effect(energy_megatons);
    finite(seismic.magnitude, "seismic magnitude")?;

    let casualties = casualty::estimate_casualties(&blast_radii, population);

    let atmospheric = atmosphere::atmospheric_effect(crater_diameter_km, energy_megatons);
    finite(atmospheric.dust_volume_km3, "dust volume")?;

    let risk = risk::classify_impact(&ImpactSeverity {
        casualties_total: casualties.total,
        energy_megatons,
    });

    Ok(ImpactResult {
        mass_kg,
        energy_joules,
        energy_megatons,
        crater_diameter_km,
        crater_depth_km,
        blast_radii,
        casualties,
        seismic,
        atmospheric,
        risk,
        location: params.location.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pipeline_reference_scenario() {
        let params = ImpactParameters::default(); // 500 m, 20 km/s
        let result = assess_impact(&params, PopulationModel::Uniform).expect("valid parameters");

        assert_relative_eq!(result.mass_kg, 1.636e11, max_relative = 1e-3);
        assert_relative_eq!(result.energy_joules, 3.272e19, max_relative = 1e-3);
        assert_relative_eq!(result.energy_megatons, 7821.6, max_relative = 1e-3);
        assert_relative_eq!(result.crater_diameter_km, 271.8, max_relative = 2e-3);
        assert_relative_eq!(result.crater_depth_km, 81.5, max_relative = 2e-3);
        assert_eq!(result.seismic.category, SeismicCategory::Catastrophic);
        assert_eq!(result.atmospheric.climate, ClimateImpact::LocalEffects);
        assert_eq!(result.location.name, "New York City");
    }

    #[test]
    fn test_pipeline_rejects_before_computing() {
        let mut params = ImpactParameters::default();
        params.diameter_m = 0.0;
        assert_eq!(
            assess_impact(&params, PopulationModel::Uniform),
            Err(EngineError::InvalidDiameter(0.0))
        );
    }

    #[test]
    fn test_depth_law_holds() {
        let result = assess_impact(&ImpactParameters::default(), PopulationModel::Uniform)
            .expect("valid parameters");
        assert_eq!(result.crater_depth_km, 0.3 * result.crater_diameter_km);
    }

    #[test]
    fn test_extreme_inputs_stay_finite() {
        // Top of the UI ranges: 10 km impactor at 70 km/s.
        let params = ImpactParameters::new(
            10_000.0,
            70.0,
            90.0,
            crate::types::ImpactLocation::default(),
        );
        let result =
            assess_impact(&params, PopulationModel::Uniform).expect("extreme but computable");
        assert!(result.energy_joules.is_finite());
        assert!(result.crater_diameter_km.is_finite());
        assert_eq!(result.risk, RiskTier::Catastrophic);
    }

    #[test]
    fn test_overflowing_inputs_surface_as_error() {
        // Absurd diameter drives mass/energy past f64 range; the pipeline
        // must report overflow instead of returning infinities.
        let params = ImpactParameters::new(
            1e130,
            70.0,
            45.0,
            crate::types::ImpactLocation::default(),
        );
        assert!(matches!(
            assess_impact(&params, PopulationModel::Uniform),
            Err(EngineError::ComputationOverflow { .. })
        ));
    }

    #[test]
    fn test_result_supersession_not_mutation() {
        let first = assess_impact(&ImpactParameters::default(), PopulationModel::Uniform)
            .expect("valid parameters");
        let mut params = ImpactParameters::default();
        params.diameter_m = 1000.0;
        let second = assess_impact(&params, PopulationModel::Uniform).expect("valid parameters");
        // Distinct values; the first is untouched by the second run.
        assert!(second.mass_kg > first.mass_kg);
        assert_relative_eq!(first.mass_kg, 1.636e11, max_relative = 1e-3);
    }
}
