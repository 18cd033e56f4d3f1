//! Core constants and shared types for impact assessment.

use bevy::math::DVec2;

/// Physical constants (SI units unless noted)

/// Assumed bulk density of a stony asteroid (kg/m³).
///
/// Every impactor is treated as a uniform sphere of this density; the
/// catalog does not carry per-object composition data.
pub const ASTEROID_DENSITY_KG_M3: f64 = 2500.0;

/// Energy released by one megaton of TNT (joules).
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Meters per kilometer, for velocity conversions.
pub const METERS_PER_KM: f64 = 1000.0;

/// A geographic point an impact is evaluated against.
///
/// The engine echoes the location through to the result for display; no
/// formula reads it (population density is location-independent, see the
/// casualty estimator).
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactLocation {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lng: f64,
    /// Human-readable place name.
    pub name: String,
}

impl ImpactLocation {
    /// Create a new location.
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    /// Whether both coordinates are finite and within range.
    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Default for ImpactLocation {
    fn default() -> Self {
        // Default target matches the simulator's initial selection.
        Self::new(40.7128, -74.0060, "New York City")
    }
}

/// A named entry in the static location gazetteer.
#[derive(Clone, Copy, Debug)]
pub struct NamedLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl NamedLocation {
    /// Convert to an owned [`ImpactLocation`].
    pub fn to_impact_location(self) -> ImpactLocation {
        ImpactLocation::new(self.lat, self.lng, self.name)
    }
}

/// Major cities, oceans and remote regions selectable as impact targets.
pub static LOCATIONS: &[NamedLocation] = &[
    NamedLocation { name: "New York City", lat: 40.7128, lng: -74.0060 },
    NamedLocation { name: "Los Angeles", lat: 34.0522, lng: -118.2437 },
    NamedLocation { name: "London", lat: 51.5074, lng: -0.1278 },
    NamedLocation { name: "Tokyo", lat: 35.6762, lng: 139.6503 },
    NamedLocation { name: "Paris", lat: 48.8566, lng: 2.3522 },
    NamedLocation { name: "Sydney", lat: -33.8688, lng: 151.2093 },
    NamedLocation { name: "Mumbai", lat: 19.0760, lng: 72.8777 },
    NamedLocation { name: "Beijing", lat: 39.9042, lng: 116.4074 },
    NamedLocation { name: "Moscow", lat: 55.7558, lng: 37.6173 },
    NamedLocation { name: "Cairo", lat: 30.0444, lng: 31.2357 },
    NamedLocation { name: "Mexico City", lat: 19.4326, lng: -99.1332 },
    NamedLocation { name: "São Paulo", lat: -23.5505, lng: -46.6333 },
    NamedLocation { name: "Singapore", lat: 1.3521, lng: 103.8198 },
    NamedLocation { name: "Dubai", lat: 25.2048, lng: 55.2708 },
    NamedLocation { name: "San Francisco", lat: 37.7749, lng: -122.4194 },
    NamedLocation { name: "Berlin", lat: 52.5200, lng: 13.4050 },
    NamedLocation { name: "Rome", lat: 41.9028, lng: 12.4964 },
    NamedLocation { name: "Madrid", lat: 40.4168, lng: -3.7038 },
    NamedLocation { name: "Toronto", lat: 43.6532, lng: -79.3832 },
    NamedLocation { name: "Chicago", lat: 41.8781, lng: -87.6298 },
    NamedLocation { name: "Seattle", lat: 47.6062, lng: -122.3321 },
    NamedLocation { name: "Hong Kong", lat: 22.3193, lng: 114.1694 },
    NamedLocation { name: "Istanbul", lat: 41.0082, lng: 28.9784 },
    NamedLocation { name: "Rio de Janeiro", lat: -22.9068, lng: -43.1729 },
    NamedLocation { name: "Amsterdam", lat: 52.3676, lng: 4.9041 },
    NamedLocation { name: "Bangkok", lat: 13.7563, lng: 100.5018 },
    NamedLocation { name: "Seoul", lat: 37.5665, lng: 126.9780 },
    NamedLocation { name: "Vancouver", lat: 49.2827, lng: -123.1207 },
    NamedLocation { name: "Melbourne", lat: -37.8136, lng: 144.9631 },
    NamedLocation { name: "Miami", lat: 25.7617, lng: -80.1918 },
    NamedLocation { name: "Pacific Ocean (Center)", lat: 0.0, lng: -160.0 },
    NamedLocation { name: "Atlantic Ocean (Center)", lat: 0.0, lng: -30.0 },
    NamedLocation { name: "Indian Ocean (Center)", lat: -20.0, lng: 80.0 },
    NamedLocation { name: "Sahara Desert", lat: 23.4162, lng: 25.6628 },
    NamedLocation { name: "Amazon Rainforest", lat: -3.4653, lng: -62.2159 },
    NamedLocation { name: "Antarctica", lat: -82.8628, lng: 135.0 },
    NamedLocation { name: "Arctic Ocean", lat: 90.0, lng: 0.0 },
];

/// Convert lat/lng to normalized equirectangular map coordinates.
///
/// Returns (x, y) in [0, 1], x growing east from 180°W, y growing south
/// from 90°N, matching the map widget's pixel space.
pub fn latlng_to_map(lat: f64, lng: f64) -> DVec2 {
    DVec2::new((lng + 180.0) / 360.0, (90.0 - lat) / 180.0)
}

/// Convert normalized map coordinates back to (lat, lng) degrees.
///
/// Input outside [0, 1] is clamped so edge clicks stay in range.
pub fn map_to_latlng(map: DVec2) -> (f64, f64) {
    let x = map.x.clamp(0.0, 1.0);
    let y = map.y.clamp(0.0, 1.0);
    (90.0 - y * 180.0, x * 360.0 - 180.0)
}

/// Format a physical magnitude at the display precision (two decimals).
pub fn format_magnitude(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a value in scientific notation with two significant decimals,
/// e.g. `1.64e11`.
pub fn format_exponential(value: f64) -> String {
    format!("{value:.2e}")
}

/// Format an integer count with thousands separators, e.g. `1,234,567`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
