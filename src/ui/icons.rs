//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Re-export commonly used icons with semantic names for our app.
// Browse all icons at https://phosphoricons.com/

/// Search/magnifier icon
pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
/// Warning triangle icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Map pin icon
pub const MAP_PIN: &str = egui_phosphor::regular::MAP_PIN;
/// Lightning/energy icon
pub const ENERGY: &str = egui_phosphor::regular::LIGHTNING;
/// Waves icon (seismic effects)
pub const WAVES: &str = egui_phosphor::regular::WAVES;
/// Wind icon (atmospheric effects)
pub const WIND: &str = egui_phosphor::regular::WIND;
/// Rocket icon (kinetic impactor)
pub const ROCKET: &str = egui_phosphor::regular::ROCKET_LAUNCH;
/// Magnet icon (gravity tractor)
pub const MAGNET: &str = egui_phosphor::regular::MAGNET;
/// People icon (evacuation, casualties)
pub const PEOPLE: &str = egui_phosphor::regular::USERS;
/// Money icon (costs)
pub const COST: &str = egui_phosphor::regular::CURRENCY_DOLLAR;
/// Target icon (success rate)
pub const TARGET: &str = egui_phosphor::regular::TARGET;
/// Clock icon (timelines)
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Book icon (education)
pub const BOOK: &str = egui_phosphor::regular::BOOK_OPEN;
/// Check mark icon
pub const CHECK: &str = egui_phosphor::regular::CHECK_CIRCLE;
/// Cross mark icon
pub const CROSS: &str = egui_phosphor::regular::X_CIRCLE;
/// Award/trophy icon (quiz completion)
pub const AWARD: &str = egui_phosphor::regular::TROPHY;
/// Newspaper icon
pub const NEWS: &str = egui_phosphor::regular::NEWSPAPER;
/// Back arrow icon
pub const BACK: &str = egui_phosphor::regular::ARROW_LEFT;
/// Forward arrow icon
pub const FORWARD: &str = egui_phosphor::regular::ARROW_RIGHT;
/// Planet icon
pub const PLANET: &str = egui_phosphor::regular::PLANET;
/// Shield icon (mitigation)
pub const SHIELD: &str = egui_phosphor::regular::SHIELD_CHECK;
/// Chart icon (decision support)
pub const CHART: &str = egui_phosphor::regular::CHART_BAR;
/// Report/file icon
pub const REPORT: &str = egui_phosphor::regular::FILE_TEXT;
