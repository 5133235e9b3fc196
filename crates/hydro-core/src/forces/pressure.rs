use glam::Vec3;

use crate::config::HydroConfig;
use crate::forces::validated;
use crate::hull::HullTriangle;

/// Asymmetric pressure/suction drag on one submerged triangle.
///
/// Leading faces (`cos_theta > 0`) take a pressure force against the
/// normal, `-(c1*v + c2*v^2) * area * cos_theta^falloff * normal`; trailing
/// faces take the mirrored suction term with its own coefficients. The
/// speed is normalized by a reference speed equal to itself, so the tuned
/// coefficients carry the actual magnitude; a still triangle normalizes to
/// 0/0 = NaN and is zeroed by the guard.
pub fn pressure_drag_force(triangle: &HullTriangle, config: &HydroConfig) -> Vec3 {
    let speed = triangle.velocity.length();
    let reference_speed = speed;
    let v = speed / reference_speed;

    let force = if triangle.cos_theta > 0.0 {
        -(config.pressure_coeff_linear * v + config.pressure_coeff_quadratic * (v * v))
            * triangle.area
            * triangle.cos_theta.powf(config.pressure_falloff)
            * triangle.normal
    } else {
        (config.suction_coeff_linear * v + config.suction_coeff_quadratic * (v * v))
            * triangle.area
            * triangle.cos_theta.abs().powf(config.suction_falloff)
            * triangle.normal
    };

    validated(force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::RigidBodyState;
    use glam::Quat;

    fn moving_body(velocity: Vec3) -> RigidBodyState {
        RigidBodyState {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            linear_velocity: velocity,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            center_of_mass: Vec3::ZERO,
        }
    }

    /// Triangle in the yz plane with normal +x.
    fn facing_triangle(body: &RigidBodyState) -> HullTriangle {
        HullTriangle::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 1.0),
            body,
        )
    }

    #[test]
    fn test_leading_face_pushed_back() {
        let body = moving_body(Vec3::X * 3.0);
        let t = facing_triangle(&body);
        assert!(t.cos_theta > 0.0, "setup: face should lead into the flow");
        let f = pressure_drag_force(&t, &HydroConfig::default());
        assert!(f.x < 0.0, "pressure should oppose the normal, got {:?}", f);
    }

    #[test]
    fn test_trailing_face_sucked_back() {
        let body = moving_body(Vec3::X * -3.0);
        let t = facing_triangle(&body);
        assert!(t.cos_theta < 0.0, "setup: face should trail the flow");
        let f = pressure_drag_force(&t, &HydroConfig::default());
        assert!(f.x > 0.0, "suction should pull along the normal, got {:?}", f);
    }

    #[test]
    fn test_still_triangle_zeroed_by_nan_guard() {
        let body = moving_body(Vec3::ZERO);
        let t = facing_triangle(&body);
        let f = pressure_drag_force(&t, &HydroConfig::default());
        assert_eq!(f, Vec3::ZERO, "0/0 speed normalization must collapse to zero force");
    }
}
