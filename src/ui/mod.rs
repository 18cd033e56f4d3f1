//! UI module providing the egui-based interface.
//!
//! Views mirror the application's navigation state machine: landing →
//! dashboard → simulator → mitigation → decision support, plus the
//! education mode. Each view renders as side panels around the central
//! viewport (dashboard, simulator) or as a full central panel
//! (mitigation, education, decision).

mod dashboard;
mod decision;
mod education_panel;
pub mod icons;
mod mitigation_panel;
mod simulator;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

pub use mitigation_panel::MitigationPanelState;
pub use simulator::SimulatorControls;

/// Which view is currently shown.
///
/// Navigation is last-write-wins; systems only render when their view
/// is active.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    /// Title screen with a start button.
    #[default]
    Landing,
    /// Catalog browser with news feed.
    Dashboard,
    /// Impact parameter controls and results.
    Simulator,
    /// Mitigation strategy reference.
    Mitigation,
    /// Topic articles and quiz.
    Education,
    /// Risk banner and policy recommendations.
    Decision,
}

/// Shared palette used across view panels.
pub(crate) mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(15, 23, 42, 245);
    pub const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);
    pub const CARD_SELECTED: Color32 = Color32::from_rgb(37, 58, 95);
    pub const TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    pub const DANGER: Color32 = Color32::from_rgb(224, 85, 85);
    pub const AMBER: Color32 = Color32::from_rgb(217, 160, 60);
    pub const SUCCESS: Color32 = Color32::from_rgb(85, 176, 85);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppView>()
            .init_resource::<SimulatorControls>()
            .init_resource::<MitigationPanelState>()
            .init_resource::<dashboard::CatalogSearch>()
            .init_resource::<education_panel::EducationState>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    landing_system,
                    dashboard::dashboard_system,
                    simulator::simulator_system,
                    mitigation_panel::mitigation_system,
                    decision::decision_system,
                    education_panel::education_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Title screen shown before any data view.
fn landing_system(mut contexts: EguiContexts, mut view: ResMut<AppView>) {
    if *view != AppView::Landing {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::PANEL_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.label(
                    egui::RichText::new(format!("{} SkySafe", icons::PLANET))
                        .size(42.0)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new("Asteroid impact assessment and planetary defense console")
                        .size(16.0)
                        .color(colors::TEXT_DIM),
                );
                ui.add_space(24.0);
                if ui
                    .add(egui::Button::new(
                        egui::RichText::new("Start Assessment").size(18.0),
                    ))
                    .clicked()
                {
                    *view = AppView::Dashboard;
                }
            });
        });
}

/// Standard back button used by every non-landing view.
pub(crate) fn back_button(ui: &mut egui::Ui, view: &mut AppView, target: AppView, label: &str) {
    if ui
        .button(format!("{} {}", icons::BACK, label))
        .clicked()
    {
        *view = target;
    }
}
