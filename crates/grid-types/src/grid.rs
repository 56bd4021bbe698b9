use serde::{Deserialize, Serialize};

use crate::face::Face3d;
use crate::point::{Point3d, Vec3};

/// Errors from sensor grid assembly.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    #[error("positions and directions differ in length ({positions} vs {directions})")]
    MismatchedLengths { positions: usize, directions: usize },
}

/// A single radiance sample: a position and an outward unit direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub pos: Point3d,
    pub dir: Vec3,
}

/// A named, ordered collection of sensors. Each grid owns its sensor list
/// exclusively; sensors are never shared between grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorGrid {
    identifier: String,
    sensors: Vec<Sensor>,
}

impl SensorGrid {
    /// Seed sensors over a set of planar faces on a regular grid.
    ///
    /// For each face the boundary's (u, v) bounding box is stepped in cells
    /// of `x_dim` by `y_dim`; every cell center inside the boundary (and
    /// outside all holes) becomes a sensor, offset along the face normal by
    /// `offset`, with its direction set to the face normal. Cells are
    /// enumerated row-major (v outer, u inner) so output order is
    /// deterministic. Non-positive or non-finite spacing is degenerate and
    /// seeds no sensors at all.
    pub fn from_face3d(
        identifier: impl Into<String>,
        faces: &[Face3d],
        x_dim: f64,
        y_dim: f64,
        offset: f64,
    ) -> Self {
        let mut sensors = Vec::new();
        if x_dim > 0.0 && y_dim > 0.0 && x_dim.is_finite() && y_dim.is_finite() {
            for face in faces {
                seed_face(face, x_dim, y_dim, offset, &mut sensors);
            }
        }
        Self {
            identifier: identifier.into(),
            sensors,
        }
    }

    /// Assemble a grid from parallel position and direction lists.
    pub fn from_position_and_direction(
        identifier: impl Into<String>,
        positions: Vec<Point3d>,
        directions: Vec<Vec3>,
    ) -> Result<Self, GridError> {
        if positions.len() != directions.len() {
            return Err(GridError::MismatchedLengths {
                positions: positions.len(),
                directions: directions.len(),
            });
        }
        let sensors = positions
            .into_iter()
            .zip(directions)
            .map(|(pos, dir)| Sensor { pos, dir })
            .collect();
        Ok(Self {
            identifier: identifier.into(),
            sensors,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn positions(&self) -> Vec<Point3d> {
        self.sensors.iter().map(|s| s.pos).collect()
    }

    pub fn directions(&self) -> Vec<Vec3> {
        self.sensors.iter().map(|s| s.dir).collect()
    }
}

fn seed_face(face: &Face3d, x_dim: f64, y_dim: f64, offset: f64, out: &mut Vec<Sensor>) {
    let (min_u, min_v, max_u, max_v) = face.uv_bounds();
    let normal = face.normal();
    let plane = face.plane();

    let mut v = min_v + y_dim * 0.5;
    while v <= max_v {
        let mut u = min_u + x_dim * 0.5;
        while u <= max_u {
            if face.contains_uv(u, v) {
                let pos = plane.point_at(u, v) + normal * offset;
                out.push(Sensor { pos, dir: normal });
            }
            u += x_dim;
        }
        v += y_dim;
    }
}
