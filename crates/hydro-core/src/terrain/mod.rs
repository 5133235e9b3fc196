//! Island terrain synthesis: seeded noise fields, radial falloff masks and
//! height-map-to-mesh construction. Runs at map-generation time, never in
//! the per-tick hydrodynamics path, and every generation call is a pure
//! function of its inputs.

use log::debug;

use crate::mesh::TriMesh;

pub mod falloff;
pub mod noise;

pub use falloff::generate_falloff_map;
pub use noise::{generate_noise_map, NoiseParams};

/// Row-major 2D grid of f32 samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl HeightField {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, data: vec![0.0; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Compose a noise field and a falloff mask into an island height map:
/// `clamp01(noise - falloff)`, so heights fade to zero toward the edges
/// and the island meets the sea naturally.
pub fn island_height_map(
    width: usize,
    height: usize,
    seed: u64,
    noise_params: &NoiseParams,
    falloff_a: f32,
    falloff_b: f32,
) -> HeightField {
    let noise_map = generate_noise_map(width, height, seed, noise_params);
    let falloff_map = generate_falloff_map(width, height, falloff_a, falloff_b);

    let mut map = noise_map;
    for (value, &falloff) in map.values_mut().iter_mut().zip(falloff_map.values()) {
        *value = (*value - falloff).clamp(0.0, 1.0);
    }

    debug!("island height map: {}x{}, seed {}", width, height, seed);
    map
}

/// Build an island mesh from a height map.
///
/// The grid plane shares the water patch topology; each vertex is lifted
/// to `height_curve(h) * height_multiplier`. `height_curve` is supplied by
/// the host (the shaping curve lives in its tooling, not here).
pub fn island_mesh(
    heights: &HeightField,
    height_multiplier: f32,
    height_curve: impl Fn(f32) -> f32,
    scale: f32,
) -> TriMesh {
    let mut mesh = TriMesh::grid_plane(heights.width(), heights.height(), scale);

    for j in 0..heights.height() {
        for i in 0..heights.width() {
            mesh.vertices[j * heights.width() + i].y =
                height_curve(heights.get(i, j)) * height_multiplier;
        }
    }

    mesh
}
