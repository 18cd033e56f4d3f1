//! Impactor mass, kinetic energy and TNT-equivalent yield.

use std::f64::consts::PI;

use crate::types::{JOULES_PER_MEGATON, METERS_PER_KM};

/// Mass of a spherical impactor (kg).
///
/// m = (4/3)·π·(d/2)³ · ρ
pub fn mass_kg(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * density_kg_m3
}

/// Kinetic energy at impact (joules), velocity given in km/s.
///
/// E = ½·m·v²
pub fn kinetic_energy_joules(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let velocity_m_s = velocity_km_s * METERS_PER_KM;
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Convert joules to megatons of TNT equivalent.
pub fn energy_megatons(energy_joules: f64) -> f64 {
    energy_joules / JOULES_PER_MEGATON
}
