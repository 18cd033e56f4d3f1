//! UI logic tests for view state, control seeding and pure helpers.
//!
//! Tests the pure logic extracted from the UI systems, without a
//! rendering context.

use bevy::math::DVec2;

use skysafe::catalog::{CATALOG, get_asteroid};
use skysafe::education::{QUIZ, QuizState};
use skysafe::engine::PopulationModel;
use skysafe::types::{ImpactLocation, latlng_to_map, map_to_latlng};
use skysafe::ui::{AppView, MitigationPanelState, SimulatorControls};

// ============================================================================
// View routing
// ============================================================================

#[test]
fn test_default_view_is_landing() {
    assert_eq!(AppView::default(), AppView::Landing);
}

// ============================================================================
// Simulator control seeding
// ============================================================================

#[test]
fn test_seed_from_catalog_copies_physicals() {
    let mut controls = SimulatorControls::default();
    let apophis = get_asteroid("99942").unwrap();
    controls.seed_from_catalog(apophis);
    assert_eq!(controls.diameter_m, apophis.diameter_m);
    assert_eq!(controls.velocity_km_s, apophis.velocity_km_s);
    assert_eq!(controls.source_name, Some(apophis.name));
}

#[test]
fn test_seed_from_catalog_clamps_to_slider_range() {
    // Eros is far larger than the 10 km slider ceiling.
    let mut controls = SimulatorControls::default();
    let eros = get_asteroid("433").unwrap();
    assert!(eros.diameter_m > 10_000.0);
    controls.seed_from_catalog(eros);
    assert_eq!(controls.diameter_m, 10_000.0);
    // Seeded controls must always produce valid engine parameters.
    assert!(controls.to_params().validate().is_ok());
}

#[test]
fn test_all_catalog_entries_seed_valid_parameters() {
    for asteroid in CATALOG {
        let mut controls = SimulatorControls::default();
        controls.seed_from_catalog(asteroid);
        assert!(
            controls.to_params().validate().is_ok(),
            "catalog entry {} seeds invalid parameters",
            asteroid.id
        );
    }
}

#[test]
fn test_population_model_selection() {
    let mut controls = SimulatorControls::default();
    assert_eq!(controls.population_model(), PopulationModel::Uniform);
    controls.sample_population = true;
    controls.sample_seed = 9;
    assert_eq!(
        controls.population_model(),
        PopulationModel::Sampled { seed: 9 }
    );
}

// ============================================================================
// Map picker coordinate conversion
// ============================================================================

#[test]
fn test_map_click_center_is_null_island() {
    let (lat, lng) = map_to_latlng(DVec2::new(0.5, 0.5));
    assert!(lat.abs() < 1e-9);
    assert!(lng.abs() < 1e-9);
}

#[test]
fn test_map_click_round_trip_stays_valid() {
    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (0.25, 0.8), (0.99, 0.01)] {
        let (lat, lng) = map_to_latlng(DVec2::new(x, y));
        let location = ImpactLocation::new(lat, lng, "Custom Location");
        assert!(location.in_bounds(), "click ({x}, {y}) left bounds");

        let back = latlng_to_map(lat, lng);
        assert!((back.x - x).abs() < 1e-9);
        assert!((back.y - y).abs() < 1e-9);
    }
}

// ============================================================================
// Quiz state machine
// ============================================================================

#[test]
fn test_quiz_mixed_run_scores_correct_answers_only() {
    let mut quiz = QuizState::default();
    // Answer the first correctly, the rest incorrectly.
    let first = quiz.question().unwrap();
    quiz.choose(first.correct);
    quiz.advance();
    while !quiz.finished {
        let q = quiz.question().unwrap();
        quiz.choose((q.correct + 1) % q.options.len());
        quiz.advance();
    }
    assert_eq!(quiz.score, 1);
    assert_eq!(quiz.current, QUIZ.len());
}

// ============================================================================
// Mitigation rollout timing
// ============================================================================

#[test]
fn test_rollout_phases_advance_on_interval() {
    let mut state = MitigationPanelState::default();
    state.start();
    assert!(state.running);
    assert_eq!(state.phase, 0);

    state.tick(1.4);
    assert_eq!(state.phase, 0);
    state.tick(0.2);
    assert_eq!(state.phase, 1);

    // A long frame completes multiple phases at once.
    state.tick(10.0);
    assert_eq!(state.phase, 4);
    assert!(!state.running);
}

#[test]
fn test_rollout_idle_until_started() {
    let mut state = MitigationPanelState::default();
    state.tick(100.0);
    assert_eq!(state.phase, 0);
    assert!(!state.running);
}
