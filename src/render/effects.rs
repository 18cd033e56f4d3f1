//! Impact animation: expanding blast rings after a simulation run.
//!
//! Purely decorative display timing. Effects are spawned from
//! completion events and animate over a few seconds; a new simulation
//! simply spawns a fresh effect and the old one finishes or is
//! replaced, never delaying computation.

use bevy::prelude::*;

use crate::simulation::SimulationCompleteEvent;
use crate::ui::AppView;

use super::z_layers;

/// Seconds the blast animation plays.
const EFFECT_DURATION: f32 = 5.0;

/// Viewport radius (world units) the light-damage ring expands to.
const MAX_RING_RADIUS: f32 = 280.0;

/// Component for an animated blast-ring effect.
#[derive(Component)]
pub struct ImpactEffect {
    /// App time when the effect started (seconds).
    pub start_time: f32,
    /// Blast radii in km (severe, moderate, light), for ring scaling.
    pub radii_km: [f64; 3],
}

/// Spawn one effect per completed simulation, replacing any running one.
pub fn spawn_impact_effects(
    mut commands: Commands,
    mut events: MessageReader<SimulationCompleteEvent>,
    existing: Query<Entity, With<ImpactEffect>>,
    time: Res<Time>,
) {
    for event in events.read() {
        for entity in existing.iter() {
            commands.entity(entity).despawn();
        }
        let radii = &event.result.blast_radii;
        commands.spawn(ImpactEffect {
            start_time: time.elapsed_secs(),
            radii_km: [radii.severe, radii.moderate, radii.light],
        });
    }
}

/// Animate and render blast-ring effects.
pub fn animate_impact_effects(
    mut commands: Commands,
    effects: Query<(Entity, &ImpactEffect)>,
    view: Res<AppView>,
    time: Res<Time>,
    mut gizmos: Gizmos,
) {
    for (entity, effect) in effects.iter() {
        let elapsed = time.elapsed_secs() - effect.start_time;
        let progress = (elapsed / EFFECT_DURATION).clamp(0.0, 1.0);

        // Despawn when complete
        if progress >= 1.0 {
            commands.entity(entity).despawn();
            continue;
        }

        // Rings only show in the simulator's viewport.
        if *view != AppView::Simulator {
            continue;
        }

        let center = Vec3::new(0.0, 0.0, z_layers::EFFECTS);
        let light_km = effect.radii_km[2].max(f64::EPSILON);

        // Entry flash during the first fifth of the animation.
        if progress < 0.2 {
            let flash_alpha = 1.0 - progress * 5.0;
            let flash_color = Color::srgba(1.0, 1.0, 0.9, flash_alpha);
            draw_circle_segments(&mut gizmos, center, 12.0, flash_color, 12);
        }

        // Each band expands toward its share of the viewport, outermost
        // ring mapped to MAX_RING_RADIUS.
        let band_colors = [
            Color::srgba(0.88, 0.33, 0.33, 1.0 - progress), // severe
            Color::srgba(0.85, 0.63, 0.24, 1.0 - progress), // moderate
            Color::srgba(0.9, 0.85, 0.3, (1.0 - progress) * 0.7), // light
        ];
        for (radius_km, color) in effect.radii_km.iter().zip(band_colors) {
            let share = (radius_km / light_km) as f32;
            let radius = MAX_RING_RADIUS * share * progress;
            draw_circle_segments(&mut gizmos, center, radius, color, 48);
        }
    }
}

/// Draw a circle as a polyline of gizmo segments.
fn draw_circle_segments(
    gizmos: &mut Gizmos,
    center: Vec3,
    radius: f32,
    color: Color,
    segments: usize,
) {
    let angle_step = std::f32::consts::TAU / segments as f32;

    for i in 0..segments {
        let angle1 = i as f32 * angle_step;
        let angle2 = (i + 1) as f32 * angle_step;

        let p1 = center + Vec3::new(angle1.cos() * radius, angle1.sin() * radius, 0.0);
        let p2 = center + Vec3::new(angle2.cos() * radius, angle2.sin() * radius, 0.0);

        gizmos.line(p1, p2, color);
    }
}
