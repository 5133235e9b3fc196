/// Tunable simulation parameters. Defaults are the reference tuning for a
/// meter-scale hull in sea water.
#[derive(Clone, Copy, Debug)]
pub struct HydroConfig {
    /// Water density in kg/m^3.
    pub water_density: f32,
    /// Gravitational acceleration magnitude (applied along -y).
    pub gravity: f32,
    /// Rest height of the water surface in world space.
    pub sea_level: f32,
    /// Water patch density in vertices per world unit.
    pub patch_resolution: f32,
    /// Pressure-drag falloff exponent for leading faces, expected in [0,1].
    pub pressure_falloff: f32,
    pub pressure_coeff_linear: f32,
    pub pressure_coeff_quadratic: f32,
    /// Suction falloff exponent for trailing faces, expected in [0,1].
    pub suction_falloff: f32,
    pub suction_coeff_linear: f32,
    pub suction_coeff_quadratic: f32,
    /// Overall slamming force multiplier.
    pub slamming_force_scale: f32,
    /// Reference acceleration the slamming ramp saturates at, in m/s^2.
    pub slamming_acc_ref: f32,
    /// Kinematic viscosity of water in m^2/s, for the Reynolds number.
    pub kinematic_viscosity: f32,
}

impl Default for HydroConfig {
    fn default() -> Self {
        Self {
            water_density: 1000.0,
            gravity: 9.81,
            sea_level: 0.0,
            patch_resolution: 2.0,
            pressure_falloff: 0.5,
            pressure_coeff_linear: 10.0,
            pressure_coeff_quadratic: 10.0,
            suction_falloff: 0.5,
            suction_coeff_linear: 10.0,
            suction_coeff_quadratic: 10.0,
            slamming_force_scale: 1.0,
            slamming_acc_ref: 1000.0,
            kinematic_viscosity: 1.0e-6,
        }
    }
}
