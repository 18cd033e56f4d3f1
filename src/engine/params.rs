//! Impact parameters and validation.
//!
//! Every simulation starts from an [`ImpactParameters`] value built from
//! the UI controls (or a catalog entry). Validation runs before any model
//! executes: the downstream formulas are undefined for non-positive
//! bases (fractional exponents) and zero yields (log domain), so bad
//! inputs must never reach them.

use crate::types::{ASTEROID_DENSITY_KG_M3, ImpactLocation};

/// Errors surfaced by the impact engine.
///
/// All variants are reported synchronously to the caller; the engine
/// never returns a partially computed result.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("asteroid diameter must be positive, got {0} m")]
    InvalidDiameter(f64),

    #[error("impact velocity must be positive, got {0} km/s")]
    InvalidVelocity(f64),

    #[error("entry angle must be within [0, 90] degrees, got {0}")]
    InvalidEntryAngle(f64),

    #[error("asteroid density must be positive, got {0} kg/m³")]
    InvalidDensity(f64),

    #[error("impact location out of range (lat {lat}, lng {lng})")]
    InvalidLocation { lat: f64, lng: f64 },

    #[error("numeric overflow while deriving {stage}")]
    ComputationOverflow { stage: &'static str },
}

/// Physical inputs of one impact scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactParameters {
    /// Impactor diameter in meters. Must be strictly positive.
    pub diameter_m: f64,
    /// Impact velocity in km/s. Must be strictly positive.
    pub velocity_km_s: f64,
    /// Atmospheric entry angle in degrees, [0, 90].
    ///
    /// Carried through for UI binding and forward compatibility; no
    /// current formula reads it (known simplification).
    pub entry_angle_deg: f64,
    /// Where the impact is evaluated.
    pub location: ImpactLocation,
    /// Bulk density in kg/m³. Defaults to [`ASTEROID_DENSITY_KG_M3`].
    pub density_kg_m3: f64,
}

impl ImpactParameters {
    /// Build parameters with the standard stony-asteroid density.
    pub fn new(
        diameter_m: f64,
        velocity_km_s: f64,
        entry_angle_deg: f64,
        location: ImpactLocation,
    ) -> Self {
        Self {
            diameter_m,
            velocity_km_s,
            entry_angle_deg,
            location,
            density_kg_m3: ASTEROID_DENSITY_KG_M3,
        }
    }

    /// Check every input against its documented range.
    ///
    /// Comparisons are written so that NaN fails them: `!(x > 0.0)`
    /// rejects NaN along with zero and negatives.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.diameter_m > 0.0 && self.diameter_m.is_finite()) {
            return Err(EngineError::InvalidDiameter(self.diameter_m));
        }
        if !(self.velocity_km_s > 0.0 && self.velocity_km_s.is_finite()) {
            return Err(EngineError::InvalidVelocity(self.velocity_km_s));
        }
        if !(0.0..=90.0).contains(&self.entry_angle_deg) {
            return Err(EngineError::InvalidEntryAngle(self.entry_angle_deg));
        }
        if !(self.density_kg_m3 > 0.0 && self.density_kg_m3.is_finite()) {
            return Err(EngineError::InvalidDensity(self.density_kg_m3));
        }
        if !self.location.in_bounds() {
            return Err(EngineError::InvalidLocation {
                lat: self.location.lat,
                lng: self.location.lng,
            });
        }
        Ok(())
    }
}

impl Default for ImpactParameters {
    fn default() -> Self {
        // The simulator's initial slider values: a 500 m impactor at 20 km/s.
        Self::new(500.0, 20.0, 45.0, ImpactLocation::default())
    }
}
