//! Simulator view: impact parameter controls, location picker, results.
//!
//! The left panel captures parameters and fires a simulation request;
//! the right panel reads the latest result verbatim (two decimals for
//! physical magnitudes, integer casualty counts). The central viewport
//! stays open for the impact animation.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::CatalogAsteroid;
use crate::engine::{ImpactParameters, PopulationModel};
use crate::simulation::{RunSimulationEvent, SimulationState};
use crate::types::{
    ImpactLocation, LOCATIONS, format_count, format_exponential, format_magnitude, latlng_to_map,
    map_to_latlng,
};

use super::{AppView, back_button, colors, icons};

/// Slider ranges mirrored by the parameter validator's expectations.
const DIAMETER_RANGE: std::ops::RangeInclusive<f64> = 10.0..=10_000.0;
const VELOCITY_RANGE: std::ops::RangeInclusive<f64> = 5.0..=70.0;
const ANGLE_RANGE: std::ops::RangeInclusive<f64> = 15.0..=90.0;

/// Kilometers per degree of latitude, for drawing blast rings on the map.
const KM_PER_DEGREE: f64 = 111.32;

/// Resource backing the simulator's parameter controls.
#[derive(Resource)]
pub struct SimulatorControls {
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub entry_angle_deg: f64,
    pub location: ImpactLocation,
    /// Name of the catalog object being simulated, if any.
    pub source_name: Option<&'static str>,
    /// Whether to sample population density instead of the uniform model.
    pub sample_population: bool,
    /// Seed for the sampled model, bumped on every run for variety.
    pub sample_seed: u64,
}

impl Default for SimulatorControls {
    fn default() -> Self {
        Self {
            diameter_m: 500.0,
            velocity_km_s: 20.0,
            entry_angle_deg: 45.0,
            location: ImpactLocation::default(),
            source_name: None,
            sample_population: false,
            sample_seed: 0,
        }
    }
}

impl SimulatorControls {
    /// Pre-fill size and velocity from a catalog entry, clamped to the
    /// slider ranges.
    pub fn seed_from_catalog(&mut self, asteroid: &CatalogAsteroid) {
        self.diameter_m = asteroid
            .diameter_m
            .clamp(*DIAMETER_RANGE.start(), *DIAMETER_RANGE.end());
        self.velocity_km_s = asteroid
            .velocity_km_s
            .clamp(*VELOCITY_RANGE.start(), *VELOCITY_RANGE.end());
        self.source_name = Some(asteroid.name);
    }

    /// Assemble engine parameters from the current control values.
    pub fn to_params(&self) -> ImpactParameters {
        ImpactParameters::new(
            self.diameter_m,
            self.velocity_km_s,
            self.entry_angle_deg,
            self.location.clone(),
        )
    }

    /// Population model for the next run.
    pub fn population_model(&self) -> PopulationModel {
        if self.sample_population {
            PopulationModel::Sampled {
                seed: self.sample_seed,
            }
        } else {
            PopulationModel::Uniform
        }
    }
}

/// System rendering the simulator's control and result panels.
pub fn simulator_system(
    mut contexts: EguiContexts,
    mut view: ResMut<AppView>,
    mut controls: ResMut<SimulatorControls>,
    state: Res<SimulationState>,
    mut requests: MessageWriter<RunSimulationEvent>,
) {
    if *view != AppView::Simulator {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("simulator_controls")
        .exact_width(340.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(12, 12)),
        )
        .show(ctx, |ui| {
            back_button(ui, &mut view, AppView::Dashboard, "Back to Dashboard");
            ui.label(egui::RichText::new("Impact Simulator").size(20.0).strong());
            if let Some(name) = controls.source_name {
                ui.label(
                    egui::RichText::new(format!("Simulating: {name}")).color(colors::TEXT_DIM),
                );
            }
            ui.add_space(12.0);

            ui.label("Impact Parameters");
            ui.add(
                egui::Slider::new(&mut controls.diameter_m, DIAMETER_RANGE)
                    .text("Diameter")
                    .suffix(" m"),
            );
            ui.add(
                egui::Slider::new(&mut controls.velocity_km_s, VELOCITY_RANGE)
                    .text("Velocity")
                    .suffix(" km/s"),
            );
            ui.add(
                egui::Slider::new(&mut controls.entry_angle_deg, ANGLE_RANGE)
                    .text("Entry Angle")
                    .suffix("°"),
            );

            ui.add_space(8.0);
            location_picker(ui, &mut controls, &state);

            ui.add_space(8.0);
            ui.checkbox(
                &mut controls.sample_population,
                "Sample population density (seeded)",
            );

            ui.add_space(8.0);
            if ui
                .add_sized(
                    [ui.available_width(), 36.0],
                    egui::Button::new(format!("{} Calculate Impact", icons::ENERGY)),
                )
                .clicked()
            {
                requests.write(RunSimulationEvent {
                    params: controls.to_params(),
                    population: controls.population_model(),
                });
                // Next sampled run draws a fresh stream.
                controls.sample_seed = controls.sample_seed.wrapping_add(1);
            }

            if let Some(err) = &state.last_error {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("{} {err}", icons::WARNING))
                        .color(colors::DANGER),
                );
            }
        });

    egui::SidePanel::right("simulator_results")
        .exact_width(340.0)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(12, 12)),
        )
        .show(ctx, |ui| {
            let Some(result) = &state.latest else {
                ui.label(egui::RichText::new("Impact Results").size(18.0).strong());
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "Set the parameters, pick a target location and press \
                         Calculate Impact.",
                    )
                    .color(colors::TEXT_DIM),
                );
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(egui::RichText::new("Impact Results").size(18.0).strong());
                ui.add_space(8.0);

                result_card(ui, colors::DANGER, "Energy Released", |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} Megatons",
                            format_magnitude(result.energy_megatons)
                        ))
                        .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "({} Joules, mass {} kg)",
                            format_exponential(result.energy_joules),
                            format_exponential(result.mass_kg),
                        ))
                        .color(colors::TEXT_DIM)
                        .small(),
                    );
                });

                result_card(ui, colors::TEXT_DIM, "Crater Dimensions", |ui| {
                    ui.label(format!(
                        "Diameter {} km · Depth {} km",
                        format_magnitude(result.crater_diameter_km),
                        format_magnitude(result.crater_depth_km),
                    ));
                });

                result_card(ui, colors::TEXT_DIM, "Blast Radius", |ui| {
                    for (label, value, color) in [
                        ("Severe damage", result.blast_radii.severe, colors::DANGER),
                        ("Moderate damage", result.blast_radii.moderate, colors::AMBER),
                        ("Light damage", result.blast_radii.light, egui::Color32::YELLOW),
                    ] {
                        ui.horizontal(|ui| {
                            ui.label(label);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} km",
                                            format_magnitude(value)
                                        ))
                                        .color(color),
                                    );
                                },
                            );
                        });
                    }
                });

                result_card(ui, colors::AMBER, "Estimated Casualties", |ui| {
                    ui.label(
                        egui::RichText::new(format_count(result.casualties.total)).size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "Severe: {} | Moderate: {} | Light: {}",
                            format_count(result.casualties.severe),
                            format_count(result.casualties.moderate),
                            format_count(result.casualties.light),
                        ))
                        .color(colors::TEXT_DIM)
                        .small(),
                    );
                });

                result_card(ui, colors::TEXT_DIM, "Seismic Effects", |ui| {
                    ui.horizontal(|ui| {
                        ui.label(icons::WAVES);
                        ui.label(format!(
                            "Magnitude {:.1} ({})",
                            result.seismic.magnitude,
                            result.seismic.category.label(),
                        ));
                    });
                });

                result_card(ui, colors::TEXT_DIM, "Atmospheric Effects", |ui| {
                    ui.horizontal(|ui| {
                        ui.label(icons::WIND);
                        ui.label(format!(
                            "Dust volume {} km³ · {}",
                            format_magnitude(result.atmospheric.dust_volume_km3),
                            result.atmospheric.climate.label(),
                        ));
                    });
                });

                ui.add_space(8.0);
                if ui
                    .add_sized(
                        [ui.available_width(), 32.0],
                        egui::Button::new(format!(
                            "{} Continue to Mitigation",
                            icons::FORWARD
                        )),
                    )
                    .clicked()
                {
                    *view = AppView::Mitigation;
                }
            });
        });
}

/// One titled result card.
fn result_card(
    ui: &mut egui::Ui,
    title_color: egui::Color32,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new(title).color(title_color).strong());
            add_contents(ui);
        });
    ui.add_space(6.0);
}

/// Location selection: gazetteer combo box plus a clickable world map.
fn location_picker(ui: &mut egui::Ui, controls: &mut SimulatorControls, state: &SimulationState) {
    ui.horizontal(|ui| {
        ui.label(icons::MAP_PIN);
        ui.label("Impact Location");
    });
    ui.label(
        egui::RichText::new(format!(
            "{} (lat {:.4}, lng {:.4})",
            controls.location.name, controls.location.lat, controls.location.lng
        ))
        .color(colors::TEXT_DIM)
        .small(),
    );

    egui::ComboBox::from_id_salt("location_select")
        .selected_text(controls.location.name.clone())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for named in LOCATIONS {
                if ui
                    .selectable_label(controls.location.name == named.name, named.name)
                    .clicked()
                {
                    controls.location = named.to_impact_location();
                }
            }
        });

    // Clickable equirectangular map with blast-ring overlay.
    let desired = egui::vec2(ui.available_width(), ui.available_width() / 2.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::click());
    let rect = response.rect;

    painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(15, 23, 42));
    // Latitude/longitude grid every 30 degrees.
    let grid = egui::Stroke::new(0.5, egui::Color32::from_rgb(51, 65, 85));
    for i in 1..6 {
        let y = rect.top() + rect.height() * i as f32 / 6.0;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], grid);
    }
    for i in 1..12 {
        let x = rect.left() + rect.width() * i as f32 / 12.0;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], grid);
    }

    // Gazetteer markers.
    for named in LOCATIONS {
        let map = latlng_to_map(named.lat, named.lng);
        let pos = egui::pos2(
            rect.left() + rect.width() * map.x as f32,
            rect.top() + rect.height() * map.y as f32,
        );
        painter.circle_filled(pos, 1.5, egui::Color32::from_rgb(100, 116, 139));
    }

    // Selected target and blast rings from the latest result.
    let selected_map = latlng_to_map(controls.location.lat, controls.location.lng);
    let selected_pos = egui::pos2(
        rect.left() + rect.width() * selected_map.x as f32,
        rect.top() + rect.height() * selected_map.y as f32,
    );
    if let Some(result) = &state.latest {
        let px_per_degree = rect.width() / 360.0;
        for (radius_km, color) in [
            (result.blast_radii.light, egui::Color32::YELLOW),
            (result.blast_radii.moderate, colors::AMBER),
            (result.blast_radii.severe, colors::DANGER),
        ] {
            let radius_px = (radius_km / KM_PER_DEGREE) as f32 * px_per_degree;
            painter.circle_stroke(selected_pos, radius_px, egui::Stroke::new(1.0, color));
        }
    }
    painter.circle_filled(selected_pos, 3.0, colors::DANGER);

    if response.clicked()
        && let Some(pointer) = response.interact_pointer_pos()
    {
        let map = DVec2::new(
            ((pointer.x - rect.left()) / rect.width()) as f64,
            ((pointer.y - rect.top()) / rect.height()) as f64,
        );
        let (lat, lng) = map_to_latlng(map);
        controls.location = ImpactLocation::new(lat, lng, "Custom Location");
    }
}
