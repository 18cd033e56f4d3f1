//! Dashboard view: catalog browser, risk badges and the news feed.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{CATALOG, SelectedAsteroid, search_catalog};
use crate::engine::risk::CatalogRisk;
use crate::news::{NEWS, format_age};

use super::{AppView, SimulatorControls, colors, icons};

/// Resource holding the catalog search box contents.
#[derive(Resource, Default)]
pub struct CatalogSearch {
    pub query: String,
}

fn risk_color(risk: CatalogRisk) -> egui::Color32 {
    match risk {
        CatalogRisk::High => colors::DANGER,
        CatalogRisk::Moderate => colors::AMBER,
        CatalogRisk::Low => colors::SUCCESS,
    }
}

/// System rendering the dashboard's side panels.
pub fn dashboard_system(
    mut contexts: EguiContexts,
    mut view: ResMut<AppView>,
    mut selected: ResMut<SelectedAsteroid>,
    mut search: ResMut<CatalogSearch>,
    mut controls: ResMut<SimulatorControls>,
) {
    if *view != AppView::Dashboard {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("catalog_list")
        .exact_width(300.0)
        .frame(egui::Frame::new()
            .fill(colors::PANEL_BG)
            .inner_margin(egui::Margin::symmetric(12, 12)))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("SkySafe Dashboard").size(20.0).strong());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(icons::SEARCH);
                ui.add(
                    egui::TextEdit::singleline(&mut search.query)
                        .hint_text("Search asteroids...")
                        .desired_width(f32::INFINITY),
                );
            });
            ui.add_space(8.0);

            let hits = if search.query.is_empty() {
                CATALOG.iter().collect::<Vec<_>>()
            } else {
                search_catalog(&search.query)
            };

            if hits.is_empty() {
                ui.label(
                    egui::RichText::new(format!(
                        "No asteroids found matching \"{}\"",
                        search.query
                    ))
                    .color(colors::TEXT_DIM),
                );
            }

            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 220.0)
                .show(ui, |ui| {
                    for asteroid in hits {
                        let is_selected = asteroid.id == selected.id;
                        let fill = if is_selected {
                            colors::CARD_SELECTED
                        } else {
                            colors::CARD_BG
                        };
                        let response = egui::Frame::new()
                            .fill(fill)
                            .inner_margin(egui::Margin::symmetric(8, 6))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new(asteroid.name).strong());
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            let risk = asteroid.risk();
                                            ui.label(
                                                egui::RichText::new(risk.label())
                                                    .color(risk_color(risk))
                                                    .small(),
                                            );
                                        },
                                    );
                                });
                                ui.label(
                                    egui::RichText::new(format!(
                                        "Diameter: {:.0} m · Velocity: {:.1} km/s",
                                        asteroid.diameter_m, asteroid.velocity_km_s
                                    ))
                                    .color(colors::TEXT_DIM)
                                    .small(),
                                );
                            })
                            .response;
                        if response.interact(egui::Sense::click()).clicked() {
                            selected.id = asteroid.id;
                        }
                        ui.add_space(4.0);
                    }
                });

            ui.separator();
            news_panel(ui);
        });

    egui::SidePanel::right("asteroid_detail")
        .exact_width(340.0)
        .frame(egui::Frame::new()
            .fill(colors::PANEL_BG)
            .inner_margin(egui::Margin::symmetric(12, 12)))
        .show(ctx, |ui| {
            let asteroid = selected.entry();

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(asteroid.name).size(18.0).strong());
            });
            ui.label(egui::RichText::new(asteroid.description).color(colors::TEXT_DIM));
            ui.add_space(8.0);

            egui::Grid::new("asteroid_stats").num_columns(2).show(ui, |ui| {
                ui.label(egui::RichText::new("Diameter").color(colors::TEXT_DIM));
                ui.label(format!("{:.0} m", asteroid.diameter_m));
                ui.end_row();
                ui.label(egui::RichText::new("Velocity").color(colors::TEXT_DIM));
                ui.label(format!("{:.1} km/s", asteroid.velocity_km_s));
                ui.end_row();
                ui.label(egui::RichText::new("Mass").color(colors::TEXT_DIM));
                ui.label(asteroid.mass_display);
                ui.end_row();
                ui.label(egui::RichText::new("Next approach").color(colors::TEXT_DIM));
                ui.label(asteroid.next_approach);
                ui.end_row();
            });

            ui.add_space(8.0);
            let risk = asteroid.risk();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::WARNING).color(risk_color(risk)));
                ui.label(
                    egui::RichText::new(format!("Risk Assessment: {}", risk.label())).strong(),
                );
            });
            ui.label(
                egui::RichText::new(format!(
                    "Impact probability: {:.4}%",
                    asteroid.impact_probability * 100.0
                ))
                .color(colors::TEXT_DIM),
            );
            // Probability bar, saturating at 0.1%.
            let fraction = (asteroid.impact_probability * 1000.0).min(1.0) as f32;
            let bar = egui::ProgressBar::new(fraction).fill(risk_color(risk));
            ui.add(bar);

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Orbital characteristics").strong());
            egui::Grid::new("orbit_stats").num_columns(2).show(ui, |ui| {
                ui.label(egui::RichText::new("Semi-major axis").color(colors::TEXT_DIM));
                ui.label(format!("{:.3} AU", asteroid.orbit.semi_major_axis_au));
                ui.end_row();
                ui.label(egui::RichText::new("Eccentricity").color(colors::TEXT_DIM));
                ui.label(format!("{:.3}", asteroid.orbit.eccentricity));
                ui.end_row();
                ui.label(egui::RichText::new("Orbital period").color(colors::TEXT_DIM));
                ui.label(format!("{:.0} days", asteroid.orbit.period_days));
                ui.end_row();
            });

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Close approaches").strong());
            for sample in asteroid.approach_history {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(sample.date).color(colors::TEXT_DIM));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{:.2} M km", sample.distance_million_km));
                    });
                });
            }

            ui.add_space(12.0);
            if ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(format!("{} Simulate Impact", icons::ENERGY)),
                )
                .clicked()
            {
                controls.seed_from_catalog(asteroid);
                *view = AppView::Simulator;
            }
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button(format!("{} Education", icons::BOOK)).clicked() {
                    *view = AppView::Education;
                }
                if ui.button(format!("{} Decision Support", icons::CHART)).clicked() {
                    *view = AppView::Decision;
                }
            });
        });
}

/// News feed rendered at the bottom of the catalog panel.
fn news_panel(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(icons::NEWS);
        ui.label(egui::RichText::new("Mission News").strong());
    });
    egui::ScrollArea::vertical()
        .id_salt("news_scroll")
        .show(ui, |ui| {
            for item in NEWS {
                egui::Frame::new()
                    .fill(colors::CARD_BG)
                    .inner_margin(egui::Margin::symmetric(8, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(item.category.label())
                                    .color(item.category.color())
                                    .small(),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format_age(item.age_days))
                                            .color(colors::TEXT_DIM)
                                            .small(),
                                    );
                                },
                            );
                        });
                        ui.label(egui::RichText::new(item.title).strong().small());
                        ui.label(
                            egui::RichText::new(item.summary)
                                .color(colors::TEXT_DIM)
                                .small(),
                        );
                    });
                ui.add_space(4.0);
            }
        });
}
