//! SkySafe - Asteroid Impact Assessment Console
//!
//! A desktop application wrapping an impact physics and risk estimation
//! engine with a catalog browser, simulator, mitigation reference and
//! decision-support views.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use skysafe::catalog::CatalogPlugin;
use skysafe::render::RenderPlugin;
use skysafe::simulation::SimulationPlugin;
use skysafe::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Engine plumbing before the views that read its state
        .add_plugins((SimulationPlugin, CatalogPlugin, RenderPlugin, UiPlugin))
        .run();
}
