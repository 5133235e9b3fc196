use glam::Vec2;
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::math::inverse_lerp;
use crate::terrain::HeightField;

/// Multi-octave noise parameters. Invalid values are clamped at generation
/// time rather than rejected, so a field is always produced.
#[derive(Clone, Copy, Debug)]
pub struct NoiseParams {
    /// Divisor of grid coordinates; higher zooms out. Clamped to a small
    /// positive epsilon.
    pub scale: f32,
    /// Number of noise layers, at least 1.
    pub octaves: u32,
    /// Per-octave amplitude multiplier, expected in [0,1].
    pub persistence: f32,
    /// Per-octave frequency multiplier, expected > 1.
    pub lacunarity: f32,
    /// Manual sample offset added on top of the seeded per-octave offsets.
    pub offset: Vec2,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self { scale: 27.0, octaves: 4, persistence: 0.5, lacunarity: 2.0, offset: Vec2::ZERO }
    }
}

/// Generate a `width` x `height` coherent-noise field normalized to [0,1].
///
/// Each octave samples Perlin noise at a seeded random offset so layers
/// decorrelate; amplitudes shrink by `persistence` and frequencies grow by
/// `lacunarity`. The raw sum is remapped to [0,1] by the field-wide
/// min/max. Output is bit-identical for identical inputs: the offset
/// stream comes from a seeded `StdRng` and nothing else is stateful.
pub fn generate_noise_map(
    width: usize,
    height: usize,
    seed: u64,
    params: &NoiseParams,
) -> HeightField {
    let scale = if params.scale <= 0.0 { f32::EPSILON } else { params.scale };
    let octaves = params.octaves.max(1);

    // One offset per octave from the seeded stream, so each layer samples
    // a different region of the noise lattice.
    let mut rng = StdRng::seed_from_u64(seed);
    let octave_offsets: Vec<Vec2> = (0..octaves)
        .map(|_| {
            Vec2::new(
                rng.gen_range(-100_000.0..100_000.0) + params.offset.x,
                rng.gen_range(-100_000.0..100_000.0) + params.offset.y,
            )
        })
        .collect();

    let perlin = Perlin::new(seed as u32);

    let sample = |i: usize, j: usize| -> f32 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut value = 0.0;

        for offset in &octave_offsets {
            let x = (i as f32 - width as f32 / 2.0) / scale * frequency + offset.x;
            let y = (j as f32 - height as f32 / 2.0) / scale * frequency + offset.y;

            value += perlin.get([x as f64, y as f64]) as f32 * amplitude;

            amplitude *= params.persistence;
            frequency *= params.lacunarity;
        }

        value
    };

    let mut map = HeightField::new(width, height);

    #[cfg(feature = "parallel")]
    map.values_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = sample(i, j);
            }
        });

    #[cfg(not(feature = "parallel"))]
    for j in 0..height {
        for i in 0..width {
            map.set(i, j, sample(i, j));
        }
    }

    // Remap the raw octave sums to [0,1] over the whole field.
    let mut min_value = f32::MAX;
    let mut max_value = f32::MIN;
    for &value in map.values() {
        min_value = min_value.min(value);
        max_value = max_value.max(value);
    }
    for value in map.values_mut() {
        *value = inverse_lerp(min_value, max_value, *value);
    }

    map
}
