use glam::Vec3;

use crate::forces::validated;
use crate::hull::HullTriangle;

/// Hydrostatic buoyancy on one submerged triangle.
///
/// `-rho * g_y * dist * area * normal` with the horizontal components
/// zeroed; buoyancy acts vertically only. `gravity` is the positive
/// acceleration magnitude, applied along -y.
pub fn buoyancy_force(triangle: &HullTriangle, water_density: f32, gravity: f32) -> Vec3 {
    let mut force =
        -water_density * -gravity * triangle.dist_to_water * triangle.area * triangle.normal;
    force.x = 0.0;
    force.z = 0.0;
    validated(force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::RigidBodyState;
    use glam::Quat;

    fn still_body() -> RigidBodyState {
        RigidBodyState {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            center_of_mass: Vec3::ZERO,
        }
    }

    /// Downward-facing unit-area pair at depth 1.
    fn submerged_bottom_triangle() -> HullTriangle {
        let body = still_body();
        // Wound so the normal points down (outward for a hull bottom).
        let mut t = HullTriangle::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(2.0, -1.0, 0.0),
            Vec3::new(0.0, -1.0, 2.0),
            &body,
        );
        t.dist_to_water = -1.0;
        t
    }

    #[test]
    fn test_buoyancy_is_purely_vertical() {
        let t = submerged_bottom_triangle();
        let f = buoyancy_force(&t, 1000.0, 9.81);
        assert_eq!(f.x, 0.0);
        assert_eq!(f.z, 0.0);
        assert!(f.y > 0.0, "submerged bottom face should be pushed up, got {:?}", f);
    }

    #[test]
    fn test_buoyancy_magnitude() {
        let t = submerged_bottom_triangle();
        let f = buoyancy_force(&t, 1000.0, 9.81);
        // rho * g * depth * area = 1000 * 9.81 * 1 * 2
        assert!(
            (f.y - 1000.0 * 9.81 * 2.0).abs() < 1.0,
            "expected ~19620 N, got {}",
            f.y
        );
    }

    #[test]
    fn test_degenerate_triangle_gives_zero() {
        let body = still_body();
        // Collinear points: zero area and zero normal.
        let mut t = HullTriangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, &body);
        t.dist_to_water = -1.0;
        let f = buoyancy_force(&t, 1000.0, 9.81);
        assert_eq!(f, Vec3::ZERO);
    }
}
