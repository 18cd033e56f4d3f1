//! Mitigation view: strategy reference cards and a simulated rollout.
//!
//! Strategy applicability is static reference data; the impact summary
//! strip shows engine context but never filters the options.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::mitigation::{MitigationStrategy, STRATEGIES, get_strategy};
use crate::simulation::SimulationState;
use crate::types::{format_count, format_magnitude};

use super::{AppView, back_button, colors, icons};

/// Seconds between simulated implementation phases.
const PHASE_SECONDS: f32 = 1.5;

/// Names of the four implementation phases, in order.
const PHASES: [&str; 4] = [
    "Phase 1: Mission Planning",
    "Phase 2: Launch & Transit",
    "Phase 3: Execution",
    "Phase 4: Verification",
];

/// Resource tracking strategy selection and the rollout animation.
#[derive(Resource)]
pub struct MitigationPanelState {
    /// Selected strategy id.
    pub selected: &'static str,
    /// Completed phases (0 = not started, 4 = done).
    pub phase: u8,
    /// Whether the rollout is running.
    pub running: bool,
    /// Time since the last phase completed.
    pub phase_timer: f32,
}

impl Default for MitigationPanelState {
    fn default() -> Self {
        Self {
            selected: STRATEGIES[0].id,
            phase: 0,
            running: false,
            phase_timer: 0.0,
        }
    }
}

impl MitigationPanelState {
    /// Begin the phased rollout from the start.
    pub fn start(&mut self) {
        self.phase = 0;
        self.running = true;
        self.phase_timer = 0.0;
    }

    /// Advance the rollout clock; each elapsed interval completes a phase.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.phase_timer += dt;
        while self.phase_timer >= PHASE_SECONDS && self.phase < PHASES.len() as u8 {
            self.phase_timer -= PHASE_SECONDS;
            self.phase += 1;
        }
        if self.phase >= PHASES.len() as u8 {
            self.running = false;
        }
    }

    fn strategy(&self) -> &'static MitigationStrategy {
        get_strategy(self.selected).unwrap_or(&STRATEGIES[0])
    }
}

fn icon_for(strategy_id: &str) -> &'static str {
    match strategy_id {
        "nuclear" => icons::ENERGY,
        "kinetic" => icons::ROCKET,
        "gravity" => icons::MAGNET,
        _ => icons::PEOPLE,
    }
}

fn success_color(rate: u8) -> egui::Color32 {
    if rate >= 80 {
        colors::SUCCESS
    } else if rate >= 60 {
        colors::AMBER
    } else {
        colors::DANGER
    }
}

/// System rendering the mitigation view.
pub fn mitigation_system(
    mut contexts: EguiContexts,
    mut view: ResMut<AppView>,
    mut state: ResMut<MitigationPanelState>,
    simulation: Res<SimulationState>,
    time: Res<Time>,
) {
    if *view != AppView::Mitigation {
        return;
    }
    state.tick(time.delta_secs());

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                back_button(ui, &mut view, AppView::Simulator, "Back to Simulator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("Decision Support {}", icons::FORWARD))
                        .clicked()
                    {
                        *view = AppView::Decision;
                    }
                });
            });
            ui.label(egui::RichText::new("Mitigation Strategies").size(20.0).strong());
            ui.label(
                egui::RichText::new("Evaluate defense options to prevent impact")
                    .color(colors::TEXT_DIM),
            );
            ui.add_space(8.0);

            if let Some(result) = &simulation.latest {
                egui::Frame::new()
                    .fill(colors::CARD_BG)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Impact Scenario Summary").strong());
                        ui.horizontal_wrapped(|ui| {
                            ui.label(format!("Location: {}", result.location.name));
                            ui.separator();
                            ui.label(format!(
                                "Energy: {} MT",
                                format_magnitude(result.energy_megatons)
                            ));
                            ui.separator();
                            ui.label(format!(
                                "Severe blast radius: {} km",
                                format_magnitude(result.blast_radii.severe)
                            ));
                            ui.separator();
                            ui.label(
                                egui::RichText::new(format!(
                                    "Est. casualties: {}",
                                    format_count(result.casualties.total)
                                ))
                                .color(colors::DANGER),
                            );
                        });
                    });
                ui.add_space(8.0);
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |columns| {
                    strategy_list(&mut columns[0], &mut state);
                    strategy_detail(&mut columns[1], &mut state);
                });
            });
        });
}

fn strategy_list(ui: &mut egui::Ui, state: &mut MitigationPanelState) {
    ui.label(egui::RichText::new("Available Strategies").strong());
    ui.add_space(4.0);
    for strategy in STRATEGIES {
        let is_selected = strategy.id == state.selected;
        let fill = if is_selected {
            colors::CARD_SELECTED
        } else {
            colors::CARD_BG
        };
        let response = egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(icon_for(strategy.id));
                    ui.label(egui::RichText::new(strategy.name).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}%", strategy.success_rate))
                                .color(success_color(strategy.success_rate)),
                        );
                    });
                });
                ui.label(
                    egui::RichText::new(strategy.description)
                        .color(colors::TEXT_DIM)
                        .small(),
                );
            })
            .response;
        if response.interact(egui::Sense::click()).clicked() && !is_selected {
            state.selected = strategy.id;
            state.phase = 0;
            state.running = false;
            state.phase_timer = 0.0;
        }
        ui.add_space(6.0);
    }
}

fn strategy_detail(ui: &mut egui::Ui, state: &mut MitigationPanelState) {
    let strategy = state.strategy();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon_for(strategy.id)).size(22.0));
        ui.label(egui::RichText::new(strategy.name).size(18.0).strong());
    });
    ui.label(egui::RichText::new(strategy.description).color(colors::TEXT_DIM));
    ui.add_space(6.0);

    egui::Grid::new("strategy_metrics").num_columns(3).show(ui, |ui| {
        ui.label(format!("{} Success Rate", icons::TARGET));
        ui.label(format!("{} Time Required", icons::CLOCK));
        ui.label(format!("{} Estimated Cost", icons::COST));
        ui.end_row();
        ui.label(
            egui::RichText::new(format!("{}%", strategy.success_rate))
                .size(18.0)
                .color(success_color(strategy.success_rate)),
        );
        ui.label(strategy.time_required);
        ui.label(strategy.cost);
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Requirements").strong());
    for req in strategy.requirements {
        ui.horizontal(|ui| {
            ui.label(req.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(req.value).color(colors::ACCENT));
            });
        });
    }

    ui.add_space(6.0);
    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Advantages").color(colors::SUCCESS));
        for adv in strategy.advantages {
            columns[0].label(format!("{} {adv}", icons::CHECK));
        }
        columns[1].label(egui::RichText::new("Disadvantages").color(colors::DANGER));
        for dis in strategy.disadvantages {
            columns[1].label(format!("{} {dis}", icons::CROSS));
        }
    });

    ui.add_space(8.0);
    let label = if state.phase == 0 && !state.running {
        "Simulate Implementation"
    } else if state.running {
        "Implementing..."
    } else {
        "Implementation Complete"
    };
    if ui
        .add_enabled(
            !state.running && state.phase == 0,
            egui::Button::new(format!("{} {label}", icons::SHIELD)),
        )
        .clicked()
    {
        state.start();
    }

    if state.phase > 0 || state.running {
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Implementation Progress").strong());
        for (i, phase_name) in PHASES.iter().enumerate() {
            let done = state.phase as usize > i;
            ui.horizontal(|ui| {
                let (icon, color) = if done {
                    (icons::CHECK, colors::SUCCESS)
                } else {
                    (icons::CLOCK, colors::TEXT_DIM)
                };
                ui.label(egui::RichText::new(icon).color(color));
                ui.label(*phase_name);
            });
        }
        if state.phase as usize >= PHASES.len() {
            ui.label(
                egui::RichText::new(
                    "Trajectory successfully altered. Impact probability reduced to 0.001%",
                )
                .color(colors::SUCCESS),
            );
        }
    }
}
