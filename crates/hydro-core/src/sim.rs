use glam::Vec3;
use log::debug;

use crate::body::{AppliedForce, RigidBodyState};
use crate::config::HydroConfig;
use crate::forces::{
    buoyancy_force, pressure_drag_force, resistance_coefficient, slamming_force,
    viscous_resistance_force,
};
use crate::hull::{clip_triangle, HullTriangle, SlammingState};
use crate::math::{triangle_area, Ray};
use crate::mesh::TriMesh;
use crate::patch::WaterPatch;
use crate::waves::WaveField;

/// Per-hull hydrodynamics simulation.
///
/// Owns the hull mesh (body-local), the per-triangle slamming records and
/// the water patch. Each fixed-timestep tick the caller hands in the rigid
/// body's current state and gets back force-at-point pairs for its
/// integrator; this type never integrates motion itself.
///
/// Independent hulls own independent state, so separate bodies can run
/// their ticks on separate threads; within one hull the tick is a strict
/// dependency chain and runs sequentially.
pub struct HullHydrodynamics {
    hull: TriMesh,
    waves: WaveField,
    pub config: HydroConfig,
    patch: WaterPatch,
    slamming: Vec<SlammingState>,
    body_surface_area: f32,

    // Tick-scoped buffers, reused across ticks.
    world_vertices: Vec<Vec3>,
    vertex_distances: Vec<f32>,
    submerged: Vec<HullTriangle>,
    /// Original hull-triangle index for each entry of `submerged`.
    parent_indices: Vec<usize>,
    /// Submerged areas staged during clipping, committed after the full
    /// pass so an abandoned tick never leaves half-updated state.
    staged_areas: Vec<f32>,
    forces: Vec<AppliedForce>,
}

impl HullHydrodynamics {
    /// `hull` is the triangulated hull surface in body-local space with
    /// outward-facing winding.
    pub fn new(hull: TriMesh, waves: WaveField, config: HydroConfig) -> Self {
        let triangle_count = hull.triangle_count();

        let mut slamming = Vec::with_capacity(triangle_count);
        let mut body_surface_area = 0.0;
        for i in 0..triangle_count {
            let [p1, p2, p3] = hull.triangle(i);
            let area = triangle_area(p1, p2, p3);
            slamming.push(SlammingState::new(area, (p1 + p2 + p3) / 3.0));
            body_surface_area += area;
        }

        let (min, max) = hull.bounds();
        let patch = WaterPatch::new(max - min, &waves, config.patch_resolution);

        debug!(
            "hull hydrodynamics: {} triangles, surface area {:.2}, {} wave components",
            triangle_count,
            body_surface_area,
            waves.components.len()
        );

        let vertex_count = hull.vertices.len();
        Self {
            hull,
            waves,
            config,
            patch,
            slamming,
            body_surface_area,
            world_vertices: vec![Vec3::ZERO; vertex_count],
            vertex_distances: vec![0.0; vertex_count],
            submerged: Vec::new(),
            parent_indices: Vec::new(),
            staged_areas: vec![0.0; triangle_count],
            forces: Vec::new(),
        }
    }

    /// Run one fixed-timestep tick.
    ///
    /// `time` is accumulated simulation time driving the wave phase, `dt`
    /// the fixed tick duration. Returns the forces to apply at their
    /// world-space points; the slice is valid until the next call.
    pub fn step(&mut self, body: &RigidBodyState, time: f32, dt: f32) -> &[AppliedForce] {
        self.update_patch(body, time);
        self.update_vertex_distances();
        self.clip_hull(body);
        self.accumulate_forces(body, dt);
        &self.forces
    }

    /// Center the patch under the hull at sea level and displace it.
    fn update_patch(&mut self, body: &RigidBodyState, time: f32) {
        let mut min = body.transform_point(self.hull.vertices[0]);
        let mut max = min;
        for (world, &local) in self.world_vertices.iter_mut().zip(&self.hull.vertices) {
            *world = body.transform_point(local);
            min = min.min(*world);
            max = max.max(*world);
        }

        let mut origin = (min + max) * 0.5;
        origin.y = self.config.sea_level;
        self.patch.update(origin, &self.waves, time);
    }

    /// Signed height above water for every hull vertex, via downward rays
    /// against the patch. Misses (outside the padded patch) read as 0.
    fn update_vertex_distances(&mut self) {
        for (dist, &vertex) in self.vertex_distances.iter_mut().zip(&self.world_vertices) {
            *dist = self.patch.intersect_ray(Ray::down(vertex)).unwrap_or(0.0);
        }
    }

    /// Clip every hull triangle against the water surface, rebuilding the
    /// submerged triangle list and refreshing slamming state.
    fn clip_hull(&mut self, body: &RigidBodyState) {
        self.submerged.clear();
        self.parent_indices.clear();

        // Rotate current -> previous before staging this tick's values.
        for state in &mut self.slamming {
            state.previous_submerged_area = state.submerged_area;
            state.previous_velocity = state.velocity;
        }

        let patch = &self.patch;
        for i in 0..self.hull.triangle_count() {
            let i1 = self.hull.indices[i * 3] as usize;
            let i2 = self.hull.indices[i * 3 + 1] as usize;
            let i3 = self.hull.indices[i * 3 + 2] as usize;

            let positions = [
                self.world_vertices[i1],
                self.world_vertices[i2],
                self.world_vertices[i3],
            ];
            let distances = [
                self.vertex_distances[i1],
                self.vertex_distances[i2],
                self.vertex_distances[i3],
            ];

            let before = self.submerged.len();
            let area = clip_triangle(
                positions,
                distances,
                body,
                |p| patch.height_above(p),
                &mut self.submerged,
            );
            for _ in before..self.submerged.len() {
                self.parent_indices.push(i);
            }

            self.staged_areas[i] = area.clamp(0.0, self.slamming[i].original_area);
        }

        // Commit staged state only after the whole pass succeeded.
        for (state, &area) in self.slamming.iter_mut().zip(&self.staged_areas) {
            state.submerged_area = area;
            state.velocity = body.point_velocity(body.transform_point(state.center));
        }
    }

    /// Sum buoyancy, viscous resistance, pressure drag and slamming per
    /// submerged triangle into force-at-point pairs.
    fn accumulate_forces(&mut self, body: &RigidBodyState, dt: f32) {
        self.forces.clear();

        let resistance = resistance_coefficient(
            body.linear_velocity.length(),
            self.underwater_length(body),
            self.config.kinematic_viscosity,
        );

        for (triangle, &parent) in self.submerged.iter().zip(&self.parent_indices) {
            let force = buoyancy_force(triangle, self.config.water_density, self.config.gravity)
                + viscous_resistance_force(triangle, self.config.water_density, resistance)
                + pressure_drag_force(triangle, &self.config)
                + slamming_force(
                    triangle,
                    &self.slamming[parent],
                    dt,
                    body.mass,
                    self.body_surface_area,
                    self.config.slamming_force_scale,
                    self.config.slamming_acc_ref,
                );

            self.forces.push(AppliedForce { force, point: triangle.center });
        }
    }

    /// Extent of the submerged geometry along the body-local z axis, the
    /// waterline length feeding the Reynolds number.
    fn underwater_length(&self, body: &RigidBodyState) -> f32 {
        let mut min_z = f32::MAX;
        let mut max_z = f32::MIN;
        for triangle in &self.submerged {
            for p in [triangle.p1, triangle.p2, triangle.p3] {
                let z = body.inverse_transform_point(p).z;
                min_z = min_z.min(z);
                max_z = max_z.max(z);
            }
        }
        if min_z > max_z {
            0.0
        } else {
            max_z - min_z
        }
    }

    /// Submerged triangles from the last tick, for host debug rendering.
    pub fn submerged_triangles(&self) -> &[HullTriangle] {
        &self.submerged
    }

    /// Per-original-triangle slamming records.
    pub fn slamming_states(&self) -> &[SlammingState] {
        &self.slamming
    }

    /// Total submerged area from the last tick.
    pub fn submerged_area(&self) -> f32 {
        self.slamming.iter().map(|s| s.submerged_area).sum()
    }

    pub fn body_surface_area(&self) -> f32 {
        self.body_surface_area
    }

    pub fn hull(&self) -> &TriMesh {
        &self.hull
    }

    pub fn waves(&self) -> &WaveField {
        &self.waves
    }

    /// Water patch after the last tick, positioned and displaced.
    pub fn patch(&self) -> &WaterPatch {
        &self.patch
    }

    /// Project an arbitrary world-space ray (a shot's flight direction, a
    /// camera pick) onto the current water surface. Used by hosts for
    /// aim-assist impact markers.
    pub fn project_onto_water(&self, ray: Ray) -> Option<Vec3> {
        self.patch
            .intersect_ray(ray)
            .filter(|&t| t >= 0.0)
            .map(|t| ray.origin + ray.direction * t)
    }
}
