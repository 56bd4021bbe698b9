use grid_types::{Face3d, FaceError, Point3d};

use crate::document::{Geometry, ModelObject};

/// Errors converting object geometry into planar faces.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    #[error("mesh geometry cannot be converted to planar faces")]
    MeshNotSupported,

    #[error("invalid face boundary: {0}")]
    Face(#[from] FaceError),

    #[error("degenerate extrusion: {reason}")]
    DegenerateExtrusion { reason: String },
}

/// Convert an object's boundary geometry into planar polygon faces.
///
/// `tolerance` bounds how far any boundary vertex may sit from its face's
/// fitted plane. Mesh geometry is refused here as well as in the importer.
pub fn to_face3d(obj: &ModelObject, tolerance: f64) -> Result<Vec<Face3d>, ConversionError> {
    match &obj.geometry {
        Geometry::Mesh { .. } => Err(ConversionError::MeshNotSupported),

        Geometry::Brep { faces } => faces
            .iter()
            .map(|f| {
                Face3d::new(f.boundary.clone(), f.holes.clone(), tolerance).map_err(Into::into)
            })
            .collect(),

        Geometry::PlanarSurface { boundary, holes } => {
            let face = Face3d::new(boundary.clone(), holes.clone(), tolerance)?;
            Ok(vec![face])
        }

        Geometry::Extrusion {
            profile,
            direction,
            distance,
        } => extrude(profile, *direction, *distance, tolerance),
    }
}

/// Sweep a planar profile along a direction: bottom cap, top cap, and one
/// quad wall per profile edge.
fn extrude(
    profile: &[Point3d],
    direction: grid_types::Vec3,
    distance: f64,
    tolerance: f64,
) -> Result<Vec<Face3d>, ConversionError> {
    let axis = direction
        .normalized()
        .ok_or_else(|| ConversionError::DegenerateExtrusion {
            reason: "zero-length direction".to_string(),
        })?;
    if distance == 0.0 {
        return Err(ConversionError::DegenerateExtrusion {
            reason: "zero extrusion distance".to_string(),
        });
    }
    let sweep = axis * distance;

    let bottom = Face3d::new(profile.to_vec(), vec![], tolerance)?;
    let top_points: Vec<Point3d> = bottom
        .boundary()
        .iter()
        .rev()
        .map(|p| *p + sweep)
        .collect();
    let top = Face3d::new(top_points, vec![], tolerance)?;

    let mut faces = vec![bottom, top];
    let boundary = faces[0].boundary().to_vec();
    for (i, &a) in boundary.iter().enumerate() {
        let b = boundary[(i + 1) % boundary.len()];
        let wall = Face3d::new(vec![a, b, b + sweep, a + sweep], vec![], tolerance)?;
        faces.push(wall);
    }
    Ok(faces)
}
