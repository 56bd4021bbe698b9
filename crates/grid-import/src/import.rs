use tracing::{debug, info, instrument};
use uuid::Uuid;

use grid_types::{clean_string, GridControls, GridError, NameGenerator, SensorGrid};
use model_3dm::{
    objects_on_layer, objects_on_parent_child, to_face3d, ConversionError, Layer, LayerError,
    Model,
};

/// Errors from grid import. Every variant aborts the whole call; no partial
/// results are ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("object {object_id} is a mesh; mesh geometry is not accepted as a grid source")]
    RejectedGeometryKind { object_id: Uuid },

    #[error(
        "please check object with ID {object_id}: {source}. Either the object has faces too \
         small for the grid size or it is not supported for grids; try again with a smaller \
         grid size in the config file"
    )]
    FaceConversion {
        object_id: Uuid,
        source: ConversionError,
    },

    #[error(transparent)]
    Layer(#[from] LayerError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Per-object record of how many sensors it contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub object_name: String,
    pub point_count: usize,
}

impl SummaryRow {
    /// The row as exported fields: name, then count.
    pub fn fields(&self) -> Vec<String> {
        vec![self.object_name.clone(), self.point_count.to_string()]
    }
}

/// Create sensor grids from the objects on a model layer.
///
/// Enumerates the layer's objects (plus descendant layers' objects when
/// `child_layer` is set), converts each to planar faces at `tolerance`,
/// seeds sensors per `grid_controls` (`None` means `(1.0, 1.0, 0.0)`), and
/// merges everything into a single grid named after the layer. Unnamed
/// objects get a fallback name from `names`; all names are sanitized for
/// downstream radiance identifiers.
///
/// Returns the one merged grid together with a `(name, count)` summary row
/// per source object, in traversal order. A layer with no objects yields an
/// empty grid and an empty summary.
#[instrument(skip(model, names), fields(layer = %layer.name, child_layer))]
pub fn import_grids(
    model: &Model,
    layer: &Layer,
    tolerance: f64,
    grid_controls: Option<GridControls>,
    child_layer: bool,
    names: &mut dyn NameGenerator,
) -> Result<(Vec<SensorGrid>, Vec<SummaryRow>), ImportError> {
    let objects = if child_layer {
        objects_on_parent_child(model, &layer.name)?
    } else {
        objects_on_layer(model, layer)
    };
    let controls = grid_controls.unwrap_or_default();

    let mut positions = Vec::new();
    let mut directions = Vec::new();
    let mut summary = Vec::new();

    for obj in objects {
        if obj.geometry.is_mesh() {
            return Err(ImportError::RejectedGeometryKind { object_id: obj.id });
        }

        let faces = to_face3d(obj, tolerance).map_err(|source| ImportError::FaceConversion {
            object_id: obj.id,
            source,
        })?;

        let raw_name = match obj.display_name() {
            Some(n) => n.to_string(),
            None => names.next_name(),
        };
        let object_name = clean_string(&raw_name);

        // The x spacing fills both cell-dimension slots of the seeding call
        // and the y spacing lands in the offset slot (see DESIGN.md).
        let sensors = SensorGrid::from_face3d(
            object_name.as_str(),
            &faces,
            controls.spacing_x,
            controls.spacing_x,
            controls.spacing_y,
        );
        debug!(
            object = %object_name,
            kind = obj.geometry.kind(),
            faces = faces.len(),
            sensors = sensors.len(),
            "seeded object"
        );

        positions.extend(sensors.positions());
        directions.extend(sensors.directions());
        summary.push(SummaryRow {
            object_name,
            point_count: sensors.len(),
        });
    }

    let merged =
        SensorGrid::from_position_and_direction(layer.name.as_str(), positions, directions)?;
    info!(
        sensors = merged.len(),
        objects = summary.len(),
        "merged layer grid"
    );
    Ok((vec![merged], summary))
}
