use glam::Vec3;

const DET_EPSILON: f32 = 1e-7;

/// A ray with an origin and a (not necessarily unit) direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray pointing straight down, used for water-distance probes.
    pub fn down(origin: Vec3) -> Self {
        Self { origin, direction: Vec3::NEG_Y }
    }
}

/// Möller-Trumbore ray/triangle intersection.
///
/// Returns the **signed** distance `t` along the ray at the hit point, or
/// `None` when the ray misses or the determinant is near zero (ray parallel
/// to the triangle plane). `t` is deliberately not clamped to positive
/// values: a downward probe from a point below the surface reports a
/// negative `t`, which is exactly the signed water distance the clipper
/// needs.
///
/// Reference: Möller & Trumbore, "Fast, Minimum Storage Ray/Triangle
/// Intersection", JGT 1997.
pub fn intersect_triangle(ray: Ray, p0: Vec3, p1: Vec3, p2: Vec3) -> Option<f32> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);

    if det.abs() < DET_EPSILON {
        return None;
    }

    let tvec = ray.origin - p0;
    let u = tvec.dot(pvec);
    // Barycentric bounds checks are done against the unscaled determinant
    // so a single divide suffices at the end. det may be negative for
    // back-facing triangles; compare accordingly.
    if det > 0.0 {
        if u < 0.0 || u > det {
            return None;
        }
    } else if u > 0.0 || u < det {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec);
    if det > 0.0 {
        if v < 0.0 || u + v > det {
            return None;
        }
    } else if v > 0.0 || u + v < det {
        return None;
    }

    Some(edge2.dot(qvec) / det)
}

/// Area of the triangle (p0, p1, p2): half the cross-product magnitude.
pub fn triangle_area(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    0.5 * (p1 - p0).cross(p2 - p0).length()
}

/// Project `point` onto the segment `[start, end]`, clamped to its extent.
pub fn project_point_segment(point: Vec3, start: Vec3, end: Vec3) -> Vec3 {
    let relative = point - start;
    let dir = end - start;
    let length = dir.length();
    if length < 1e-6 {
        return start;
    }
    let along = (dir / length).dot(relative).clamp(0.0, length);
    start + dir / length * along
}

/// Distance from `point` to the segment `[start, end]`.
pub fn distance_point_segment(point: Vec3, start: Vec3, end: Vec3) -> f32 {
    (project_point_segment(point, start, end) - point).length()
}

/// Percentage of `value` between `start` and `end`, clamped to [0,1].
pub fn inverse_lerp(start: f32, end: f32, value: f32) -> f32 {
    if (end - start).abs() < f32::EPSILON {
        return 0.0;
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}
