//! Orbit sketch for the browsed catalog asteroid.
//!
//! Draws an idealized Keplerian ellipse from the entry's (a, e) summary
//! together with Earth's orbit as a reference circle. Rendering-only: a
//! sketch of shape and scale, not an ephemeris.

use bevy::prelude::*;

use crate::catalog::SelectedAsteroid;
use crate::ui::AppView;

use super::z_layers;

/// World units per AU in the sketch.
const AU_SCALE: f32 = 120.0;

/// Segments per ellipse; enough for a smooth closed curve at this size.
const SEGMENTS: u32 = 128;

/// Draw the orbit sketch while the dashboard is active.
pub fn draw_orbit_sketch(
    view: Res<AppView>,
    selected: Res<SelectedAsteroid>,
    mut gizmos: Gizmos,
) {
    if *view != AppView::Dashboard {
        return;
    }

    // Sun marker.
    draw_ellipse(&mut gizmos, 4.0, 0.0, Color::srgb(0.95, 0.8, 0.3), 16);

    // Earth reference orbit: 1 AU circle.
    draw_ellipse(&mut gizmos, AU_SCALE, 0.0, Color::srgba(0.3, 0.5, 0.9, 0.6), SEGMENTS);

    // Selected asteroid's ellipse, Sun at one focus.
    let orbit = selected.entry().orbit;
    let a = orbit.semi_major_axis_au as f32 * AU_SCALE;
    gizmos.line(
        Vec3::new(-8.0, 0.0, z_layers::ORBITS),
        Vec3::new(8.0, 0.0, z_layers::ORBITS),
        Color::srgba(0.95, 0.8, 0.3, 0.8),
    );
    draw_ellipse(
        &mut gizmos,
        a,
        orbit.eccentricity as f32,
        Color::srgba(0.85, 0.55, 0.3, 0.9),
        SEGMENTS,
    );
}

/// Draw an ellipse with the origin at one focus; e = 0 gives a circle
/// centered on the origin.
fn draw_ellipse(gizmos: &mut Gizmos, semi_major: f32, eccentricity: f32, color: Color, segments: u32) {
    // Conic section in polar form: r = p / (1 + e·cos ν).
    let p = semi_major * (1.0 - eccentricity * eccentricity);

    let mut first: Option<Vec3> = None;
    let mut prev: Option<Vec3> = None;

    for i in 0..=segments {
        let nu = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let r = if eccentricity > 0.0 {
            p / (1.0 + eccentricity * nu.cos())
        } else {
            semi_major
        };
        let pt = Vec3::new(r * nu.cos(), r * nu.sin(), z_layers::ORBITS);

        if first.is_none() {
            first = Some(pt);
        }
        if let Some(p0) = prev {
            gizmos.line(p0, pt, color);
        }
        prev = Some(pt);
    }

    if let (Some(last), Some(first)) = (prev, first) {
        gizmos.line(last, first, color);
    }
}
