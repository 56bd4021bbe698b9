use serde::{Deserialize, Serialize};

use crate::point::{Point3d, Vec3};

/// An oriented plane with an in-plane 2D frame.
///
/// The frame (`x_axis`, `y_axis`, `normal`) is right-handed and orthonormal;
/// `uv_of`/`point_at` map between world space and plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3d,
    pub normal: Vec3,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
}

impl Plane {
    /// Build a plane from an origin and a (not necessarily unit) normal.
    /// Returns `None` for a near-zero normal.
    pub fn new(origin: Point3d, normal: Vec3) -> Option<Self> {
        let normal = normal.normalized()?;
        // Pick the global axis least aligned with the normal to seed the frame.
        let seed = if normal.z.abs() < 0.9 {
            Vec3::Z
        } else {
            Vec3::new(1.0, 0.0, 0.0)
        };
        let x_axis = seed.cross(&normal).normalized()?;
        let y_axis = normal.cross(&x_axis);
        Some(Self {
            origin,
            normal,
            x_axis,
            y_axis,
        })
    }

    /// Fit a plane to a closed boundary using Newell's method.
    ///
    /// The resulting normal follows the boundary's winding (counter-clockwise
    /// winding yields the side the boundary turns counter-clockwise around).
    /// Returns `None` when the boundary is degenerate (fewer than three
    /// points, or collinear).
    pub fn fit(boundary: &[Point3d]) -> Option<Self> {
        if boundary.len() < 3 {
            return None;
        }
        let mut normal = Vec3::ZERO;
        let mut centroid = Vec3::ZERO;
        for (i, p) in boundary.iter().enumerate() {
            let q = boundary[(i + 1) % boundary.len()];
            normal.x += (p.y - q.y) * (p.z + q.z);
            normal.y += (p.z - q.z) * (p.x + q.x);
            normal.z += (p.x - q.x) * (p.y + q.y);
            centroid = centroid + p.to_vec3();
        }
        let centroid = centroid / boundary.len() as f64;
        Self::new(Point3d::new(centroid.x, centroid.y, centroid.z), normal)
    }

    /// Signed distance from a point to the plane, positive on the normal side.
    pub fn signed_distance(&self, point: &Point3d) -> f64 {
        (*point - self.origin).dot(&self.normal)
    }

    /// Project a world point into plane (u, v) coordinates.
    pub fn uv_of(&self, point: &Point3d) -> (f64, f64) {
        let d = *point - self.origin;
        (d.dot(&self.x_axis), d.dot(&self.y_axis))
    }

    /// Map plane (u, v) coordinates back to a world point.
    pub fn point_at(&self, u: f64, v: f64) -> Point3d {
        self.origin + self.x_axis * u + self.y_axis * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point3d> {
        vec![
            Point3d::new(0.0, 0.0, 2.0),
            Point3d::new(1.0, 0.0, 2.0),
            Point3d::new(1.0, 1.0, 2.0),
            Point3d::new(0.0, 1.0, 2.0),
        ]
    }

    #[test]
    fn fit_horizontal_square() {
        let plane = Plane::fit(&square()).unwrap();
        assert_relative_eq!(plane.normal.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.signed_distance(&Point3d::new(0.5, 0.5, 3.0)), 1.0);
    }

    #[test]
    fn fit_rejects_collinear() {
        let line = vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
        ];
        assert!(Plane::fit(&line).is_none());
    }

    #[test]
    fn uv_round_trip() {
        let plane = Plane::fit(&square()).unwrap();
        let p = Point3d::new(0.25, 0.75, 2.0);
        let (u, v) = plane.uv_of(&p);
        let back = plane.point_at(u, v);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-12);
    }
}
