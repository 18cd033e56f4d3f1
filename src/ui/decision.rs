//! Decision-support view: risk banner, key metrics and recommendations.
//!
//! The banner tier comes straight from the engine's impact classifier;
//! the metric cards read result fields verbatim. Everything else here is
//! static policy reference content.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::engine::risk::RiskTier;
use crate::mitigation::RESPONSE_COMPARISON;
use crate::simulation::SimulationState;
use crate::types::{format_count, format_magnitude};

use super::{AppView, back_button, colors, icons};

/// Response timeline rows: phase, duration in months, completion state.
const TIMELINE: [(&str, u32, &str); 5] = [
    ("Detection", 12, "Complete"),
    ("Assessment", 3, "Complete"),
    ("Decision", 2, "In Progress"),
    ("Implementation", 18, "Pending"),
    ("Verification", 6, "Pending"),
];

fn tier_color(tier: RiskTier) -> egui::Color32 {
    match tier {
        RiskTier::Catastrophic => egui::Color32::from_rgb(153, 27, 27),
        RiskTier::Severe => egui::Color32::from_rgb(154, 52, 18),
        RiskTier::Moderate => egui::Color32::from_rgb(146, 64, 14),
        RiskTier::Low => egui::Color32::from_rgb(113, 99, 14),
    }
}

/// System rendering the decision-support view.
pub fn decision_system(
    mut contexts: EguiContexts,
    mut view: ResMut<AppView>,
    simulation: Res<SimulationState>,
) {
    if *view != AppView::Decision {
        return;
    }
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
            back_button(ui, &mut view, AppView::Dashboard, "Back to Dashboard");
            ui.label(
                egui::RichText::new("Decision Support Dashboard")
                    .size(20.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new("Comprehensive risk assessment and policy recommendations")
                    .color(colors::TEXT_DIM),
            );
            ui.add_space(8.0);

            let Some(result) = &simulation.latest else {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(icons::WARNING)
                            .size(40.0)
                            .color(colors::AMBER),
                    );
                    ui.label(egui::RichText::new("No Simulation Data Available").strong());
                    ui.label(
                        egui::RichText::new(
                            "Run an impact simulation first to generate decision support data.",
                        )
                        .color(colors::TEXT_DIM),
                    );
                    if ui.button("Go to Simulator").clicked() {
                        *view = AppView::Simulator;
                    }
                });
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                // Risk banner driven by the impact classifier.
                let tier = result.risk;
                egui::Frame::new()
                    .fill(tier_color(tier))
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icons::WARNING).size(32.0));
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "Risk Level: {}",
                                        tier.label()
                                    ))
                                    .size(20.0)
                                    .strong(),
                                );
                                ui.label(tier.description());
                                ui.label(egui::RichText::new(tier.priority()).small());
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} MT",
                                            format_magnitude(result.energy_megatons)
                                        ))
                                        .size(24.0),
                                    );
                                },
                            );
                        });
                    });
                ui.add_space(8.0);

                // Key metric cards, read verbatim from the result.
                ui.columns(4, |columns| {
                    metric_card(
                        &mut columns[0],
                        icons::PEOPLE,
                        "Casualties",
                        &format_count(result.casualties.total),
                        "Estimated affected population",
                        colors::DANGER,
                    );
                    metric_card(
                        &mut columns[1],
                        icons::COST,
                        "Economic Impact",
                        "$500B+",
                        "Direct and indirect costs",
                        colors::AMBER,
                    );
                    metric_card(
                        &mut columns[2],
                        icons::CHART,
                        "Blast Radius",
                        &format!("{} km", format_magnitude(result.blast_radii.severe)),
                        "Severe damage zone",
                        colors::ACCENT,
                    );
                    metric_card(
                        &mut columns[3],
                        icons::CLOCK,
                        "Response Time",
                        "12-24 mo",
                        "Available preparation window",
                        colors::SUCCESS,
                    );
                });
                ui.add_space(8.0);

                // Response options comparison.
                ui.label(egui::RichText::new("Response Options Comparison").strong());
                egui::Grid::new("response_comparison")
                    .num_columns(5)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Option").color(colors::TEXT_DIM));
                        ui.label(egui::RichText::new("Cost ($M)").color(colors::TEXT_DIM));
                        ui.label(egui::RichText::new("Time (months)").color(colors::TEXT_DIM));
                        ui.label(egui::RichText::new("Success (%)").color(colors::TEXT_DIM));
                        ui.label(egui::RichText::new("Residual risk").color(colors::TEXT_DIM));
                        ui.end_row();
                        for row in RESPONSE_COMPARISON {
                            ui.label(row.option);
                            ui.label(format!("{:.0}", row.cost_millions));
                            ui.label(format!("{:.0}", row.time_months));
                            ui.label(
                                egui::RichText::new(format!("{:.0}", row.success_percent))
                                    .color(colors::SUCCESS),
                            );
                            ui.label(
                                egui::RichText::new(format!("{:.0}", row.risk_score))
                                    .color(colors::DANGER),
                            );
                            ui.end_row();
                        }
                    });
                ui.add_space(8.0);

                // Policy recommendations.
                ui.label(egui::RichText::new("Policy Recommendations").strong());
                recommendation_block(
                    ui,
                    colors::ACCENT,
                    "Immediate Actions (0-3 months)",
                    &[
                        "Establish international coordination committee",
                        "Initiate mission planning for kinetic impactor",
                        "Begin evacuation planning for high-risk zones",
                        "Allocate emergency funding ($500M initial)",
                    ],
                );
                recommendation_block(
                    ui,
                    colors::AMBER,
                    "Short-term Actions (3-12 months)",
                    &[
                        "Launch deflection mission",
                        "Implement enhanced monitoring systems",
                        "Coordinate with international space agencies",
                        "Develop backup mitigation strategies",
                    ],
                );
                recommendation_block(
                    ui,
                    colors::SUCCESS,
                    "Long-term Actions (12+ months)",
                    &[
                        "Verify trajectory modification success",
                        "Maintain continuous monitoring",
                        "Review and update planetary defense protocols",
                        "Invest in next-generation detection systems",
                    ],
                );
                ui.add_space(8.0);

                // Response timeline.
                ui.label(egui::RichText::new("Response Timeline").strong());
                for (i, &(phase, months, status)) in TIMELINE.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let color = match status {
                            "Complete" => colors::SUCCESS,
                            "In Progress" => colors::ACCENT,
                            _ => colors::TEXT_DIM,
                        };
                        ui.label(egui::RichText::new(format!("{}", i + 1)).color(color));
                        ui.label(phase);
                        ui.label(
                            egui::RichText::new(format!("{months} months"))
                                .color(colors::TEXT_DIM)
                                .small(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(egui::RichText::new(status).color(color));
                            },
                        );
                    });
                }

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} Assessment compiled for distribution to decision-makers.",
                        icons::REPORT
                    ))
                    .color(colors::TEXT_DIM)
                    .small(),
                );
            });
        });
}

fn metric_card(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    value: &str,
    caption: &str,
    color: egui::Color32,
) {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).color(color));
                ui.label(egui::RichText::new(title).strong());
            });
            ui.label(egui::RichText::new(value).size(20.0).color(color));
            ui.label(
                egui::RichText::new(caption)
                    .color(colors::TEXT_DIM)
                    .small(),
            );
        });
}

fn recommendation_block(
    ui: &mut egui::Ui,
    accent: egui::Color32,
    title: &str,
    items: &[&str],
) {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, accent))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(title).strong());
            for item in items {
                ui.label(format!("• {item}"));
            }
        });
    ui.add_space(4.0);
}
