//! Simulation orchestration around the pure impact engine.
//!
//! The UI fires a [`RunSimulationEvent`]; one system invokes the engine
//! synchronously, stores the outcome in [`SimulationState`] and emits a
//! [`SimulationCompleteEvent`] for the decorative animation. The latest
//! result supersedes the previous one (last-write-wins); nothing here
//! blocks or delays a subsequent request while an animation plays.

use bevy::prelude::*;

use crate::engine::{EngineError, ImpactParameters, ImpactResult, PopulationModel, assess_impact};

/// Event requesting one impact assessment.
#[derive(Message, Clone, Debug)]
pub struct RunSimulationEvent {
    /// Inputs captured from the UI controls at trigger time.
    pub params: ImpactParameters,
    /// How the casualty estimator resolves population density.
    pub population: PopulationModel,
}

/// Event fired after a successful assessment, for display collaborators.
#[derive(Message, Clone, Debug)]
pub struct SimulationCompleteEvent {
    /// The freshly produced result (also stored in [`SimulationState`]).
    pub result: ImpactResult,
}

/// Resource holding the most recent simulation outcome.
///
/// The result is held for display and superseded, never mutated, by the
/// next computation.
#[derive(Resource, Default)]
pub struct SimulationState {
    /// Latest successful result, if any.
    pub latest: Option<ImpactResult>,
    /// Error from the most recent attempt, cleared on success.
    pub last_error: Option<EngineError>,
}

impl SimulationState {
    /// Clear both result and error (e.g. when leaving the simulator).
    pub fn clear(&mut self) {
        self.latest = None;
        self.last_error = None;
    }

    /// Whether a result is available for downstream views.
    pub fn has_result(&self) -> bool {
        self.latest.is_some()
    }
}

/// Run the engine for each requested simulation.
pub fn handle_run_simulation(
    mut requests: MessageReader<RunSimulationEvent>,
    mut state: ResMut<SimulationState>,
    mut completed: MessageWriter<SimulationCompleteEvent>,
) {
    for request in requests.read() {
        match assess_impact(&request.params, request.population) {
            Ok(result) => {
                info!(
                    "Impact assessed: {:.0} m at {:.1} km/s over {} -> {:.1} MT, {} risk",
                    request.params.diameter_m,
                    request.params.velocity_km_s,
                    result.location.name,
                    result.energy_megatons,
                    result.risk.label(),
                );
                state.last_error = None;
                completed.write(SimulationCompleteEvent {
                    result: result.clone(),
                });
                state.latest = Some(result);
            }
            Err(err) => {
                warn!("Impact assessment rejected: {err}");
                state.last_error = Some(err);
            }
        }
    }
}

/// Plugin wiring the simulation request/response flow.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RunSimulationEvent>()
            .add_message::<SimulationCompleteEvent>()
            .insert_resource(SimulationState::default())
            .add_systems(Update, handle_run_simulation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clear() {
        let mut state = SimulationState::default();
        state.last_error = Some(EngineError::InvalidDiameter(0.0));
        state.clear();
        assert!(!state.has_result());
        assert!(state.last_error.is_none());
    }
}
