use glam::Vec3;

use crate::body::RigidBodyState;
use crate::math::triangle_area;

/// One triangle of submerged hull surface, in world space.
///
/// Built fresh each tick from the clipper output and never mutated after
/// construction; all derived quantities the force model needs are computed
/// here once.
#[derive(Clone, Copy, Debug)]
pub struct HullTriangle {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
    pub center: Vec3,
    /// Unit outward normal; zero for degenerate triangles.
    pub normal: Vec3,
    pub area: f32,
    /// Signed height of the centroid above the water surface. Negative
    /// while submerged. Measured per emitted triangle, not inherited from
    /// the parent.
    pub dist_to_water: f32,
    /// Velocity of the centroid as a point on the rigid body.
    pub velocity: Vec3,
    pub velocity_dir: Vec3,
    /// normal . velocity_dir: positive when the face leads into the flow.
    pub cos_theta: f32,
}

impl HullTriangle {
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, body: &RigidBodyState) -> Self {
        let center = (p1 + p2 + p3) / 3.0;
        let normal = (p2 - p1).cross(p3 - p1).normalize_or_zero();
        let area = triangle_area(p1, p2, p3);
        let velocity = body.point_velocity(center);
        let velocity_dir = velocity.normalize_or_zero();
        let cos_theta = velocity_dir.dot(normal);

        Self { p1, p2, p3, center, normal, area, dist_to_water: 0.0, velocity, velocity_dir, cos_theta }
    }
}

/// Per-original-hull-triangle state that persists across ticks, required by
/// the slamming force model. One record per hull-mesh triangle for the
/// lifetime of the simulation.
#[derive(Clone, Copy, Debug)]
pub struct SlammingState {
    /// Area of the unclipped hull triangle, fixed at load time.
    pub original_area: f32,
    /// Submerged portion of that area this tick, in [0, original_area].
    pub submerged_area: f32,
    pub previous_submerged_area: f32,
    /// Triangle centroid in body-local space, fixed at load time.
    pub center: Vec3,
    /// Velocity of the centroid this tick.
    pub velocity: Vec3,
    pub previous_velocity: Vec3,
}

impl SlammingState {
    pub fn new(original_area: f32, center: Vec3) -> Self {
        Self {
            original_area,
            submerged_area: 0.0,
            previous_submerged_area: 0.0,
            center,
            velocity: Vec3::ZERO,
            previous_velocity: Vec3::ZERO,
        }
    }
}

/// Vertex of a triangle being clipped: original winding slot, world
/// position, and signed water distance.
#[derive(Clone, Copy)]
struct ClipVertex {
    index: usize,
    position: Vec3,
    dist: f32,
}

/// Clip one hull triangle against the water surface.
///
/// `distances` are the signed heights of the three vertices above the
/// surface (positive = dry). Fully submerged triangles are emitted as-is;
/// partially submerged ones are cut along the water line into one or two
/// sub-triangles lying strictly below it. Each emitted triangle's
/// `dist_to_water` is re-measured at its own centroid via `height_above`.
///
/// Returns the total emitted (submerged) area.
///
/// Vertex roles follow the original winding: in the one-above case, M is
/// the vertex one step counter-clockwise from the dry vertex H; in the
/// two-above case, H is one step clockwise from the wet vertex L. The cut
/// parameter along an edge is `t = -h_start / (h_end - h_start)`.
pub fn clip_triangle<F: Fn(Vec3) -> f32>(
    positions: [Vec3; 3],
    distances: [f32; 3],
    body: &RigidBodyState,
    height_above: F,
    out: &mut Vec<HullTriangle>,
) -> f32 {
    // Everything dry: no contribution.
    if distances[0] > 0.0 && distances[1] > 0.0 && distances[2] > 0.0 {
        return 0.0;
    }

    // Everything wet: emit the triangle unchanged.
    if distances[0] < 0.0 && distances[1] < 0.0 && distances[2] < 0.0 {
        let mut triangle = HullTriangle::new(positions[0], positions[1], positions[2], body);
        triangle.dist_to_water = height_above(triangle.center);
        let area = triangle.area;
        out.push(triangle);
        return area;
    }

    // Mixed: sort descending by water distance; dry vertices come first,
    // while `index` keeps the original winding slot.
    let mut sorted = [
        ClipVertex { index: 0, position: positions[0], dist: distances[0] },
        ClipVertex { index: 1, position: positions[1], dist: distances[1] },
        ClipVertex { index: 2, position: positions[2], dist: distances[2] },
    ];
    sorted.sort_unstable_by(|a, b| b.dist.total_cmp(&a.dist));

    if sorted[0].dist > 0.0 && sorted[1].dist < 0.0 && sorted[2].dist < 0.0 {
        clip_one_above(sorted, body, height_above, out)
    } else if sorted[0].dist > 0.0 && sorted[1].dist > 0.0 && sorted[2].dist < 0.0 {
        clip_two_above(sorted, body, height_above, out)
    } else {
        // A vertex sits exactly on the surface; the wet region has zero
        // area on one side of it, so skip rather than emit slivers.
        0.0
    }
}

fn clip_one_above<F: Fn(Vec3) -> f32>(
    sorted: [ClipVertex; 3],
    body: &RigidBodyState,
    height_above: F,
    out: &mut Vec<HullTriangle>,
) -> f32 {
    // H is the lone dry vertex; M sits one winding step before it.
    let h = sorted[0];
    let m_index = (h.index + 2) % 3;

    let (m, l) = if sorted[1].index == m_index {
        (sorted[1], sorted[2])
    } else {
        (sorted[2], sorted[1])
    };

    // Water-line crossings on edges M->H and L->H.
    let t_m = -m.dist / (h.dist - m.dist);
    let i_m = m.position + t_m * (h.position - m.position);

    let t_l = -l.dist / (h.dist - l.dist);
    let i_l = l.position + t_l * (h.position - l.position);

    let mut t1 = HullTriangle::new(m.position, i_m, i_l, body);
    let mut t2 = HullTriangle::new(m.position, i_l, l.position, body);
    t1.dist_to_water = height_above(t1.center);
    t2.dist_to_water = height_above(t2.center);

    let area = t1.area + t2.area;
    out.push(t1);
    out.push(t2);
    area
}

fn clip_two_above<F: Fn(Vec3) -> f32>(
    sorted: [ClipVertex; 3],
    body: &RigidBodyState,
    height_above: F,
    out: &mut Vec<HullTriangle>,
) -> f32 {
    // L is the lone wet vertex; H sits one winding step after it.
    let l = sorted[2];
    let h_index = (l.index + 1) % 3;

    let (h, m) = if sorted[1].index == h_index {
        (sorted[1], sorted[0])
    } else {
        (sorted[0], sorted[1])
    };

    // Water-line crossings on edges L->M and L->H.
    let t_m = -l.dist / (m.dist - l.dist);
    let j_m = l.position + t_m * (m.position - l.position);

    let t_h = -l.dist / (h.dist - l.dist);
    let j_h = l.position + t_h * (h.position - l.position);

    let mut triangle = HullTriangle::new(l.position, j_h, j_m, body);
    triangle.dist_to_water = height_above(triangle.center);

    let area = triangle.area;
    out.push(triangle);
    area
}
