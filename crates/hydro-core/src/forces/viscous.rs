use glam::Vec3;

use crate::forces::validated;
use crate::hull::HullTriangle;

/// ITTC-style empirical resistance coefficient from the Reynolds number:
/// `C_f = 0.075 / (log10(Rn) - 2)^2` with `Rn = v * L / nu`.
///
/// The formula is singular where `log10(Rn) = 2` (Rn = 100) and undefined
/// for `Rn <= 0`; both collapse to zero, which an idle or just-launched
/// hull hits every time.
pub fn resistance_coefficient(speed: f32, hull_length: f32, kinematic_viscosity: f32) -> f32 {
    let rn = speed * hull_length / kinematic_viscosity;
    if rn <= 0.0 {
        return 0.0;
    }
    let denom = rn.log10() - 2.0;
    if denom.abs() < 1e-4 {
        return 0.0;
    }
    0.075 / (denom * denom)
}

/// Viscous (skin friction) resistance on one submerged triangle.
///
/// The triangle's velocity is projected onto its tangent plane; the force
/// acts opposite the tangential flow with magnitude
/// `0.5 * rho * C_f * |v_t| * v_t * area`.
pub fn viscous_resistance_force(triangle: &HullTriangle, water_density: f32, coeff: f32) -> Vec3 {
    // v projected onto the plane with normal n: n x (v x n) for unit n.
    let n = triangle.normal;
    let tangent_velocity = n.cross(triangle.velocity.cross(n));

    // Flow direction opposes the tangential motion; the triangle's full
    // speed is attributed along it.
    let tangent_dir = -tangent_velocity.normalize_or_zero();
    let velocity = triangle.velocity.length() * tangent_dir;

    let force = 0.5 * water_density * coeff * velocity.length() * velocity * triangle.area;
    validated(force)
}
