use glam::Vec3;

use crate::forces::validated;
use crate::hull::{HullTriangle, SlammingState};

/// Impulsive water-entry force on one submerged triangle.
///
/// Captures the fluid's response to sudden penetration: the rate of change
/// of swept water volume between ticks, `dV/dt` from current and previous
/// submerged area times velocity over `original_area * dt`, gives an
/// acceleration magnitude. A reference stopping force
/// `mass * velocity * (2 * area / body_area)` is then ramped by
/// `clamp01(acc / acc_ref)^2` and `-cos_theta`.
///
/// Faces receding from the water (`cos_theta < 0`) and degenerate parents
/// (`original_area <= 0`) take no slamming force.
pub fn slamming_force(
    triangle: &HullTriangle,
    state: &SlammingState,
    dt: f32,
    body_mass: f32,
    body_surface_area: f32,
    force_scale: f32,
    acc_ref: f32,
) -> Vec3 {
    if triangle.cos_theta < 0.0 || state.original_area <= 0.0 || dt <= 0.0 {
        return Vec3::ZERO;
    }

    // Swept volume per second, this tick and last.
    let dv = state.submerged_area * state.velocity;
    let dv_previous = state.previous_submerged_area * state.previous_velocity;

    // Acceleration of the original triangle's center, not the clipped one.
    let acc = ((dv - dv_previous) / (state.original_area * dt)).length();

    // Force that would stop the body over this triangle's share of the hull.
    let stop_force = body_mass * triangle.velocity * (2.0 * triangle.area / body_surface_area);

    let ramp = (acc / acc_ref).clamp(0.0, 1.0);
    let force = -(ramp * ramp) * triangle.cos_theta * stop_force * force_scale;

    validated(force)
}
