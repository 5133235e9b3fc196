use glam::Vec3;

/// Engine-agnostic triangle mesh: vertex positions plus index triples.
///
/// The simulation owns its geometry directly instead of borrowing it from a
/// scene graph. Hull meshes are expressed in body-local space; the water
/// patch and island meshes are expressed in their own local frames and
/// positioned by the host.
#[derive(Clone, Debug)]
pub struct TriMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count must be a multiple of 3");
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of bounds"
        );
        Self { vertices, indices }
    }

    /// Centered, flat triangulated quad grid in the xz plane.
    ///
    /// `width` and `height` are vertex counts per side, `spacing` the world
    /// distance between adjacent vertices. Each cell is split into two
    /// triangles with counter-clockwise winding seen from +y, matching the
    /// water-patch and island-mesh topology.
    pub fn grid_plane(width: usize, height: usize, spacing: f32) -> Self {
        let mut vertices = Vec::with_capacity(width * height);
        let mut indices = Vec::with_capacity((width - 1) * (height - 1) * 6);

        for j in 0..height {
            for i in 0..width {
                vertices.push(
                    Vec3::new(
                        (width as f32 - 1.0) / -2.0 + i as f32,
                        0.0,
                        (height as f32 - 1.0) / 2.0 - j as f32,
                    ) * spacing,
                );

                if i < width - 1 && j < height - 1 {
                    let v = (j * width + i) as u32;
                    let w = width as u32;
                    indices.extend_from_slice(&[v, v + w + 1, v + w]);
                    indices.extend_from_slice(&[v + w + 1, v, v + 1]);
                }
            }
        }

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions of triangle `i`.
    pub fn triangle(&self, i: usize) -> [Vec3; 3] {
        [
            self.vertices[self.indices[i * 3] as usize],
            self.vertices[self.indices[i * 3 + 1] as usize],
            self.vertices[self.indices[i * 3 + 2] as usize],
        ]
    }

    /// Axis-aligned bounds of the vertex set. Zero extents when empty.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut min = self.vertices.first().copied().unwrap_or(Vec3::ZERO);
        let mut max = min;
        for &v in &self.vertices {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Raw vertex bytes for host-side GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
