//! Blast damage radii from TNT-equivalent yield.
//!
//! Cube-root overpressure scaling: each damage band is
//! `yield^0.33 × k` km. The three bands share the exponent and differ
//! only in `k`, so the severe < moderate < light ordering is guaranteed
//! by the multiplier table and must not be edited per band.

/// Shared blast-scaling exponent.
const BLAST_EXPONENT: f64 = 0.33;

/// Band multipliers (km per MT^0.33), in increasing order.
const SEVERE_SCALE: f64 = 2.2;
const MODERATE_SCALE: f64 = 5.5;
const LIGHT_SCALE: f64 = 11.0;

/// Damage-band radii around the impact point, in km.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlastRadii {
    /// Near-total destruction.
    pub severe: f64,
    /// Heavy structural damage.
    pub moderate: f64,
    /// Broken windows, light injuries.
    pub light: f64,
}

impl BlastRadii {
    /// Largest affected radius (the light-damage ring).
    pub fn outer_km(&self) -> f64 {
        self.light
    }
}

/// Compute all three damage-band radii for a positive yield.
pub fn blast_radii(yield_megatons: f64) -> BlastRadii {
    let scaled = yield_megatons.powf(BLAST_EXPONENT);
    BlastRadii {
        severe: scaled * SEVERE_SCALE,
        moderate: scaled * MODERATE_SCALE,
        light: scaled * LIGHT_SCALE,
    }
}
