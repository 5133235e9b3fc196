use glam::Vec3;

/// One directional Gerstner component. Only the xz part of `direction` is
/// meaningful; its magnitude acts as the wave number.
#[derive(Clone, Copy, Debug)]
pub struct WaveComponent {
    pub direction: Vec3,
    pub speed: f32,
    pub amplitude: f32,
}

/// Superposition of Gerstner (trochoidal) wave components sharing gravity,
/// water depth and a global phase shift.
///
/// Closed-form evaluation: for each component with direction `d`,
/// `omega = sqrt(g * |d| * tanh(|d| * depth))`,
/// `theta = d . pos - omega * (speed * t) - phase`, horizontal displacement
/// `-(d/|d|) * (A / tanh(|d| * depth)) * sin(theta)` and vertical
/// displacement `A * cos(theta)`.
#[derive(Clone, Debug)]
pub struct WaveField {
    pub gravity: f32,
    pub depth: f32,
    pub phase: f32,
    pub components: Vec<WaveComponent>,
}

impl WaveField {
    /// A flat, waveless surface. Useful for tests and calm-sea hosts.
    pub fn flat() -> Self {
        Self { gravity: 9.81, depth: 100.0, phase: 0.0, components: Vec::new() }
    }

    /// Total surface displacement at a world position and time.
    ///
    /// Zero-length directions contribute nothing instead of poisoning the
    /// sum with NaN.
    pub fn displacement(&self, pos: Vec3, time: f32) -> Vec3 {
        let mut total = Vec3::ZERO;
        for wave in &self.components {
            let dir_length = wave.direction.length();
            if dir_length < 1e-6 {
                continue;
            }
            let tanh_term = (dir_length * self.depth).tanh();
            let angular_freq = (self.gravity * dir_length * tanh_term).sqrt();
            let theta = wave.direction.x * pos.x + wave.direction.z * pos.z
                - angular_freq * (wave.speed * time)
                - self.phase;

            let horizontal = wave.amplitude / tanh_term * theta.sin();
            total += Vec3::new(
                -(wave.direction.x / dir_length) * horizontal,
                wave.amplitude * theta.cos(),
                -(wave.direction.z / dir_length) * horizontal,
            );
        }
        total
    }

    /// Sum of every component's worst-case horizontal displacement, per axis.
    ///
    /// Bounds how far the surface can shift sideways regardless of phase;
    /// the water patch is padded by this so it always covers the hull.
    pub fn max_horizontal_offset(&self) -> Vec3 {
        let mut total = Vec3::ZERO;
        for wave in &self.components {
            let dir_length = wave.direction.length();
            if dir_length < 1e-6 {
                continue;
            }
            let reach = wave.amplitude / (dir_length * self.depth).tanh();
            total.x += (wave.direction.x / dir_length * reach).abs();
            total.z += (wave.direction.z / dir_length * reach).abs();
        }
        total
    }

    /// Largest possible crest height above the rest level.
    pub fn max_amplitude(&self) -> f32 {
        self.components.iter().map(|w| w.amplitude.abs()).sum()
    }
}
