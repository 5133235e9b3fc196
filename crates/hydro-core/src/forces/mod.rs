//! Per-triangle hydrodynamic force components.
//!
//! Each function is stateless and NaN-guarded: degenerate geometry (zero
//! area, zero-length normals or velocities) collapses to a zero force
//! instead of poisoning the whole-body sum.

use glam::Vec3;

pub mod buoyancy;
pub mod pressure;
pub mod slamming;
pub mod viscous;

pub use buoyancy::buoyancy_force;
pub use pressure::pressure_drag_force;
pub use slamming::slamming_force;
pub use viscous::{resistance_coefficient, viscous_resistance_force};

/// Zero out a force if any component is NaN.
#[inline]
pub(crate) fn validated(force: Vec3) -> Vec3 {
    if (force.x + force.y + force.z).is_nan() {
        Vec3::ZERO
    } else {
        force
    }
}
