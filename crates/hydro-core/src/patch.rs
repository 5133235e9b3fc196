use glam::Vec3;
use log::debug;

use crate::math::{intersect_triangle, Ray};
use crate::mesh::TriMesh;
use crate::waves::WaveField;

/// Local water-surface mesh tracking the wave field beneath a floating body.
///
/// The topology is fixed at construction; only vertex positions move. The
/// patch is sized from the hull footprint plus the maximum horizontal
/// Gerstner offset on each side, so whatever the wave phase, every hull
/// vertex has surface underneath (or above) it to probe against.
pub struct WaterPatch {
    mesh: TriMesh,
    /// Flat rest positions of each vertex, patch-local.
    vertex_origins: Vec<Vec3>,
    /// World-space anchor the patch is evaluated around. Updated every tick.
    origin: Vec3,
    vertices_x: usize,
    vertices_z: usize,
}

impl WaterPatch {
    /// Build a patch covering `footprint` (world-space xz extent of the hull)
    /// at `resolution` vertices per world unit.
    pub fn new(footprint: Vec3, waves: &WaveField, resolution: f32) -> Self {
        let resolution = resolution.max(0.05);
        let max_offset = waves.max_horizontal_offset();

        let vertices_x =
            ((footprint.x + max_offset.x * 2.0) * resolution).ceil() as usize + 2;
        let vertices_z =
            ((footprint.z + max_offset.z * 2.0) * resolution).ceil() as usize + 2;

        let mesh = TriMesh::grid_plane(vertices_x, vertices_z, 1.0 / resolution);
        let vertex_origins = mesh.vertices.clone();

        debug!(
            "water patch: {}x{} vertices, {:.2} units/cell, wave pad ({:.2}, {:.2})",
            vertices_x,
            vertices_z,
            1.0 / resolution,
            max_offset.x,
            max_offset.z
        );

        Self { mesh, vertex_origins, origin: Vec3::ZERO, vertices_x, vertices_z }
    }

    /// Re-evaluate every vertex as `origin + displacement(origin + rest, t)`.
    pub fn update(&mut self, origin: Vec3, waves: &WaveField, time: f32) {
        self.origin = origin;
        for (vertex, &rest) in self.mesh.vertices.iter_mut().zip(&self.vertex_origins) {
            *vertex = rest + waves.displacement(origin + rest, time);
        }
    }

    /// Closest intersection of a world-space ray with the current surface.
    ///
    /// Prefers the smallest positive `t`; when every hit lies behind the ray
    /// origin (a probe point under the surface), returns the negative `t`
    /// nearest zero so the caller still gets a signed distance.
    pub fn intersect_ray(&self, ray: Ray) -> Option<f32> {
        let local_ray = Ray::new(ray.origin - self.origin, ray.direction);
        let mut best_positive: Option<f32> = None;
        let mut best_negative: Option<f32> = None;

        for i in 0..self.mesh.triangle_count() {
            let [p0, p1, p2] = self.mesh.triangle(i);
            if let Some(t) = intersect_triangle(local_ray, p0, p1, p2) {
                if t >= 0.0 {
                    if best_positive.map_or(true, |b| t < b) {
                        best_positive = Some(t);
                    }
                } else if best_negative.map_or(true, |b| t > b) {
                    best_negative = Some(t);
                }
            }
        }

        best_positive.or(best_negative)
    }

    /// Signed height of `point` above the water surface (negative when
    /// submerged). `0.0` when the point is outside the patch footprint.
    pub fn height_above(&self, point: Vec3) -> f32 {
        self.intersect_ray(Ray::down(point)).unwrap_or(0.0)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Current displaced surface mesh, for host-side debug rendering.
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.vertices_x, self.vertices_z)
    }
}
