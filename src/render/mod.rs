//! Viewport rendering for the assessment console.
//!
//! The egui panels frame a central viewport where gizmo-based visuals
//! live: the orbit sketch of the browsed catalog object (dashboard) and
//! the decorative impact animation (simulator).

mod effects;
mod orbits;

use bevy::prelude::*;
use bevy::camera::ScalingMode;

pub use effects::ImpactEffect;

/// Viewport height in world units; visuals are laid out against this.
pub const VIEWPORT_HEIGHT: f32 = 800.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin aggregating viewport rendering.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    orbits::draw_orbit_sketch,
                    effects::spawn_impact_effects,
                    effects::animate_impact_effects,
                ),
            );
    }
}

/// Spawn the main camera with orthographic projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEWPORT_HEIGHT,
            },
            near: -1000.0,
            far: 1000.0,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 0.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Orbit sketch lines.
    pub const ORBITS: f32 = 1.0;
    /// Impact animation rings.
    pub const EFFECTS: f32 = 2.0;
}
