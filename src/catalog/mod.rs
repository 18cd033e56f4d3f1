//! Near-Earth object catalog for browsing and simulation seeding.
//!
//! The catalog is a static reference table (see [`presets`]); nothing
//! here is fetched or recomputed at runtime. Browsing state lives in the
//! [`SelectedAsteroid`] resource, and selecting an entry seeds the
//! simulator's parameter controls.

pub mod presets;

use bevy::prelude::*;

use crate::engine::risk::{CatalogRisk, classify_probability};

pub use presets::CATALOG;

/// Keplerian summary of a catalog object's heliocentric orbit.
#[derive(Clone, Copy, Debug)]
pub struct OrbitElements {
    /// Semi-major axis in AU.
    pub semi_major_axis_au: f64,
    /// Eccentricity (0 = circular, <1 = elliptical).
    pub eccentricity: f64,
    /// Orbital period in days.
    pub period_days: f64,
}

/// One close-approach record (historical or predicted).
#[derive(Clone, Copy, Debug)]
pub struct ApproachSample {
    /// ISO date of the approach.
    pub date: &'static str,
    /// Miss distance in millions of km.
    pub distance_million_km: f64,
}

/// A catalog near-Earth object.
#[derive(Clone, Copy, Debug)]
pub struct CatalogAsteroid {
    /// Designation used for search and lookup.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description for the detail card.
    pub description: &'static str,
    /// Mean diameter in meters.
    pub diameter_m: f64,
    /// Expected impact velocity in km/s.
    pub velocity_km_s: f64,
    /// Mass as a display string (order of magnitude only).
    pub mass_display: &'static str,
    /// Date of the next notable close approach.
    pub next_approach: &'static str,
    /// Cumulative impact probability over the monitored window.
    pub impact_probability: f64,
    /// Orbit summary.
    pub orbit: OrbitElements,
    /// Close-approach history for the distance chart.
    pub approach_history: &'static [ApproachSample],
}

impl CatalogAsteroid {
    /// Risk tier from the probability-based classifier.
    pub fn risk(&self) -> CatalogRisk {
        classify_probability(self.impact_probability)
    }
}

/// Case-insensitive search over name and designation.
pub fn search_catalog(query: &str) -> Vec<&'static CatalogAsteroid> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle) || a.id.contains(query))
        .collect()
}

/// Look up a catalog entry by designation.
pub fn get_asteroid(id: &str) -> Option<&'static CatalogAsteroid> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Resource tracking which catalog entry is being browsed.
#[derive(Resource)]
pub struct SelectedAsteroid {
    /// Designation of the selected entry.
    pub id: &'static str,
}

impl Default for SelectedAsteroid {
    fn default() -> Self {
        Self { id: CATALOG[0].id }
    }
}

impl SelectedAsteroid {
    /// The selected catalog entry.
    ///
    /// Falls back to the first entry if the id is somehow stale.
    pub fn entry(&self) -> &'static CatalogAsteroid {
        get_asteroid(self.id).unwrap_or(&CATALOG[0])
    }
}

/// Plugin providing catalog browsing state.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedAsteroid>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_well_formed() {
        assert!(!CATALOG.is_empty());
        for a in CATALOG {
            assert!(a.diameter_m > 0.0, "{}", a.id);
            assert!(a.velocity_km_s > 0.0, "{}", a.id);
            assert!(
                (0.0..=1.0).contains(&a.impact_probability),
                "{} probability {}",
                a.id,
                a.impact_probability
            );
            assert!(a.orbit.semi_major_axis_au > 0.0, "{}", a.id);
            assert!((0.0..1.0).contains(&a.orbit.eccentricity), "{}", a.id);
            assert!(a.orbit.period_days > 0.0, "{}", a.id);
            assert!(!a.approach_history.is_empty(), "{}", a.id);
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_search_case_insensitive() {
        let hits = search_catalog("apophis");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "99942");

        let hits_upper = search_catalog("APOPHIS");
        assert_eq!(hits_upper.len(), 1);
    }

    #[test]
    fn test_search_by_designation() {
        let hits = search_catalog("101955");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "101955 Bennu");
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_catalog("not a rock").is_empty());
    }

    #[test]
    fn test_lookup_and_default_selection() {
        assert!(get_asteroid("99942").is_some());
        assert!(get_asteroid("00000").is_none());

        let selected = SelectedAsteroid::default();
        assert_eq!(selected.entry().id, CATALOG[0].id);

        let stale = SelectedAsteroid { id: "gone" };
        assert_eq!(stale.entry().id, CATALOG[0].id);
    }

    #[test]
    fn test_catalog_covers_all_risk_tiers() {
        use crate::engine::risk::CatalogRisk;
        let tiers: Vec<_> = CATALOG.iter().map(|a| a.risk()).collect();
        assert!(tiers.contains(&CatalogRisk::High));
        assert!(tiers.contains(&CatalogRisk::Moderate));
        assert!(tiers.contains(&CatalogRisk::Low));
    }
}
