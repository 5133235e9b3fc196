use glam::{Quat, Vec3};

/// Read-only snapshot of the external rigid body for one tick.
///
/// The simulation never integrates motion itself; the host's physics
/// integrator owns position/velocity state and applies the forces this
/// crate produces.
#[derive(Clone, Copy, Debug)]
pub struct RigidBodyState {
    pub position: Vec3,
    pub rotation: Quat,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub mass: f32,
    /// Center of mass in world space.
    pub center_of_mass: Vec3,
}

impl RigidBodyState {
    /// Body-local point -> world space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }

    /// World point -> body-local space.
    pub fn inverse_transform_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.position)
    }

    /// Velocity of a world-space point rigidly attached to the body:
    /// `v + omega x (p - com)`.
    pub fn point_velocity(&self, world_point: Vec3) -> Vec3 {
        self.linear_velocity + self.angular_velocity.cross(world_point - self.center_of_mass)
    }
}

/// A force and the world-space point it acts at.
///
/// Handed to the external integrator as standard force-at-point pairs;
/// torque arises there from off-center application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedForce {
    pub force: Vec3,
    pub point: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resting_body() -> RigidBodyState {
        RigidBodyState {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 100.0,
            center_of_mass: Vec3::new(1.0, 2.0, 3.0),
        }
    }

    #[test]
    fn test_transform_round_trip() {
        let mut body = resting_body();
        body.rotation = Quat::from_rotation_y(0.7);
        let local = Vec3::new(2.0, -1.0, 0.5);
        let back = body.inverse_transform_point(body.transform_point(local));
        assert!((back - local).length() < 1e-5, "round trip drifted: {:?}", back);
    }

    #[test]
    fn test_point_velocity_from_spin() {
        let mut body = resting_body();
        body.angular_velocity = Vec3::Y; // 1 rad/s about +y
        let v = body.point_velocity(body.center_of_mass + Vec3::X * 2.0);
        // omega x r = (0,1,0) x (2,0,0) = (0,0,-2)
        assert!((v - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5, "got {:?}", v);
    }

    #[test]
    fn test_point_velocity_pure_translation() {
        let mut body = resting_body();
        body.linear_velocity = Vec3::new(3.0, 0.0, 0.0);
        let v = body.point_velocity(Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(v, Vec3::new(3.0, 0.0, 0.0));
    }
}
