use glam::{Vec2, Vec3};

use crate::math::distance_point_segment;
use crate::terrain::HeightField;

/// Generate a radial falloff mask: 0 along the grid's central axis rising
/// toward 1 at the corners.
///
/// Square grids measure distance from the center point; non-square grids
/// project onto the central line segment running along the long axis, so
/// elongated islands keep rounded ends instead of being squeezed into an
/// ellipse. Distances normalize by the short dimension times sqrt(0.5)
/// (the corner distance of the inscribed square).
pub fn generate_falloff_map(width: usize, height: usize, a: f32, b: f32) -> HeightField {
    let mut map = HeightField::new(width, height);
    let w = width as f32;
    let h = height as f32;

    for j in 0..height {
        for i in 0..width {
            let dist = if width > height {
                distance_point_segment(
                    Vec3::new(i as f32, j as f32, 0.0),
                    Vec3::new(h / 2.0, h / 2.0, 0.0),
                    Vec3::new(w - h / 2.0, h / 2.0, 0.0),
                ) / (h * 0.5_f32.sqrt())
            } else if height > width {
                distance_point_segment(
                    Vec3::new(i as f32, j as f32, 0.0),
                    Vec3::new(w / 2.0, w / 2.0, 0.0),
                    Vec3::new(w / 2.0, h - w / 2.0, 0.0),
                ) / (w * 0.5_f32.sqrt())
            } else {
                let normalized = Vec2::new(i as f32 / w, j as f32 / h);
                normalized.distance(Vec2::splat(0.5)) / 0.5_f32.sqrt()
            };

            map.set(i, j, evaluate(dist, a, b));
        }
    }

    map
}

/// Falloff shaping curve `d^a / (d^a + (b - b*d)^a)`: `a` controls the
/// steepness of the transition, `b` where it sits.
fn evaluate(value: f32, a: f32, b: f32) -> f32 {
    value.powf(a) / (value.powf(a) + (b - b * value).powf(a))
}
