use serde::{Deserialize, Serialize};

use crate::plane::Plane;
use crate::point::{Point3d, Vec3};

/// Errors from planar face construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FaceError {
    #[error("face boundary has {count} vertices, need at least 3")]
    TooFewVertices { count: usize },

    #[error("face boundary is degenerate (zero area or collinear)")]
    DegenerateBoundary,

    #[error("boundary vertex lies {distance} from the fitted plane (tolerance {tolerance})")]
    NonPlanar { distance: f64, tolerance: f64 },
}

/// A planar polygon face: an ordered boundary loop, optional hole loops,
/// and the plane fitted to the boundary.
///
/// Loops are implicitly closed; a duplicated closing vertex is stripped on
/// construction. All vertices (boundary and holes) must lie within the
/// construction tolerance of the fitted plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face3d {
    boundary: Vec<Point3d>,
    holes: Vec<Vec<Point3d>>,
    plane: Plane,
}

impl Face3d {
    pub fn new(
        boundary: Vec<Point3d>,
        holes: Vec<Vec<Point3d>>,
        tolerance: f64,
    ) -> Result<Self, FaceError> {
        let boundary = strip_closing_vertex(boundary);
        if boundary.len() < 3 {
            return Err(FaceError::TooFewVertices {
                count: boundary.len(),
            });
        }
        let plane = Plane::fit(&boundary).ok_or(FaceError::DegenerateBoundary)?;

        let holes: Vec<Vec<Point3d>> = holes.into_iter().map(strip_closing_vertex).collect();
        for loop_points in std::iter::once(&boundary).chain(holes.iter()) {
            for p in loop_points {
                let distance = plane.signed_distance(p).abs();
                if distance > tolerance {
                    return Err(FaceError::NonPlanar {
                        distance,
                        tolerance,
                    });
                }
            }
        }

        Ok(Self {
            boundary,
            holes,
            plane,
        })
    }

    pub fn boundary(&self) -> &[Point3d] {
        &self.boundary
    }

    pub fn holes(&self) -> &[Vec<Point3d>] {
        &self.holes
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn normal(&self) -> Vec3 {
        self.plane.normal
    }

    /// Boundary area minus hole areas, via the shoelace formula in the
    /// plane's (u, v) frame.
    pub fn area(&self) -> f64 {
        let outer = shoelace_area(&self.uv_loop(&self.boundary));
        let inner: f64 = self
            .holes
            .iter()
            .map(|h| shoelace_area(&self.uv_loop(h)))
            .sum();
        (outer - inner).max(0.0)
    }

    /// Even-odd containment test for a point in plane (u, v) coordinates:
    /// inside the boundary and outside every hole.
    pub fn contains_uv(&self, u: f64, v: f64) -> bool {
        if !point_in_loop(u, v, &self.uv_loop(&self.boundary)) {
            return false;
        }
        !self
            .holes
            .iter()
            .any(|h| point_in_loop(u, v, &self.uv_loop(h)))
    }

    /// The (u, v) bounding box of the boundary: `(min_u, min_v, max_u, max_v)`.
    pub fn uv_bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_u = f64::INFINITY;
        let mut min_v = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        let mut max_v = f64::NEG_INFINITY;
        for p in &self.boundary {
            let (u, v) = self.plane.uv_of(p);
            min_u = min_u.min(u);
            min_v = min_v.min(v);
            max_u = max_u.max(u);
            max_v = max_v.max(v);
        }
        (min_u, min_v, max_u, max_v)
    }

    fn uv_loop(&self, points: &[Point3d]) -> Vec<(f64, f64)> {
        points.iter().map(|p| self.plane.uv_of(p)).collect()
    }
}

fn strip_closing_vertex(mut points: Vec<Point3d>) -> Vec<Point3d> {
    if points.len() > 1 {
        let first = points[0];
        let last = points[points.len() - 1];
        if first.distance_to(&last) < 1e-12 {
            points.pop();
        }
    }
    points
}

fn shoelace_area(uv: &[(f64, f64)]) -> f64 {
    let mut twice_area = 0.0;
    for (i, &(u0, v0)) in uv.iter().enumerate() {
        let (u1, v1) = uv[(i + 1) % uv.len()];
        twice_area += u0 * v1 - u1 * v0;
    }
    (twice_area * 0.5).abs()
}

fn point_in_loop(u: f64, v: f64, uv: &[(f64, f64)]) -> bool {
    let mut inside = false;
    for (i, &(u0, v0)) in uv.iter().enumerate() {
        let (u1, v1) = uv[(i + 1) % uv.len()];
        if (v0 > v) != (v1 > v) {
            let cross_u = u0 + (v - v0) / (v1 - v0) * (u1 - u0);
            if u < cross_u {
                inside = !inside;
            }
        }
    }
    inside
}
