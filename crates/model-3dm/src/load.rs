use std::collections::HashSet;

use serde::Deserialize;
use uuid::Uuid;

use crate::document::{Layer, Model, ModelObject};
use crate::errors::LoadError;

/// Format identifier expected in the document header.
pub const MODEL_FORMAT: &str = "model-3dm";

/// Current document format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level document structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
struct ModelFileRaw {
    format: String,
    version: u32,
    tolerance: f64,
    layers: Vec<Layer>,
    objects: Vec<ModelObject>,
}

/// Deserialize and validate a model document from a JSON string.
///
/// Validates the format identifier and version, then checks referential
/// integrity: layer ids are unique, every parent reference resolves without
/// cycles, and every object sits on a known layer.
pub fn load_model(json: &str) -> Result<Model, LoadError> {
    let raw: ModelFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != MODEL_FORMAT {
        return Err(LoadError::UnknownFormat(raw.format));
    }
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }
    if !(raw.tolerance > 0.0) {
        return Err(LoadError::InvalidTolerance {
            tolerance: raw.tolerance,
        });
    }

    let model = Model {
        layers: raw.layers,
        objects: raw.objects,
        tolerance: raw.tolerance,
    };
    validate_references(&model)?;
    Ok(model)
}

fn validate_references(model: &Model) -> Result<(), LoadError> {
    let mut ids: HashSet<Uuid> = HashSet::new();
    for layer in &model.layers {
        if !ids.insert(layer.id) {
            return Err(LoadError::DuplicateLayerId { layer_id: layer.id });
        }
    }

    for layer in &model.layers {
        if let Some(parent_id) = layer.parent {
            if !ids.contains(&parent_id) {
                return Err(LoadError::UnknownParent {
                    layer_id: layer.id,
                    parent_id,
                });
            }
        }
        // Walk the parent chain; more hops than layers means a cycle.
        let mut current = layer.parent;
        let mut hops = 0;
        while let Some(parent_id) = current {
            hops += 1;
            if hops > model.layers.len() {
                return Err(LoadError::ParentCycle { layer_id: layer.id });
            }
            current = model.layer_by_id(parent_id).and_then(|l| l.parent);
        }
    }

    for obj in &model.objects {
        if !ids.contains(&obj.layer) {
            return Err(LoadError::UnknownLayerRef {
                object_id: obj.id,
                layer_id: obj.layer,
            });
        }
    }
    Ok(())
}
