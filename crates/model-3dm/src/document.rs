use grid_types::{Point3d, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of objects. Layers nest through `parent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: Uuid,
    pub name: String,
    pub parent: Option<Uuid>,
}

/// One geometric object in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelObject {
    pub id: Uuid,
    /// Human-readable name; `None` or empty means unnamed.
    pub name: Option<String>,
    /// The layer this object sits on.
    pub layer: Uuid,
    pub geometry: Geometry,
}

impl ModelObject {
    /// The stored name, if non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// The geometry payload kinds the document can carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A raw triangle/quad mesh. Never accepted as a grid source.
    Mesh {
        vertices: Vec<Point3d>,
        faces: Vec<Vec<u32>>,
    },
    /// A boundary representation: a list of planar faces.
    Brep { faces: Vec<BrepFace> },
    /// A single planar surface given by its boundary loop.
    PlanarSurface {
        boundary: Vec<Point3d>,
        #[serde(default)]
        holes: Vec<Vec<Point3d>>,
    },
    /// A planar profile swept along a direction.
    Extrusion {
        profile: Vec<Point3d>,
        direction: Vec3,
        distance: f64,
    },
}

impl Geometry {
    pub fn is_mesh(&self) -> bool {
        matches!(self, Geometry::Mesh { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Mesh { .. } => "Mesh",
            Geometry::Brep { .. } => "Brep",
            Geometry::PlanarSurface { .. } => "PlanarSurface",
            Geometry::Extrusion { .. } => "Extrusion",
        }
    }
}

/// One face of a brep: an outer boundary loop plus hole loops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrepFace {
    pub boundary: Vec<Point3d>,
    #[serde(default)]
    pub holes: Vec<Vec<Point3d>>,
}

/// A parsed model document: layer table, object table, and the document's
/// absolute tolerance. Read-only for the duration of any import call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub layers: Vec<Layer>,
    pub objects: Vec<ModelObject>,
    pub tolerance: f64,
}

impl Model {
    pub fn layer_by_id(&self, id: Uuid) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }
}
