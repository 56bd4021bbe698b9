use std::collections::HashSet;

use uuid::Uuid;

use crate::document::{Layer, Model, ModelObject};

/// Errors from layer traversal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LayerError {
    #[error("no layer named {name:?} in the document")]
    UnknownLayer { name: String },
}

/// Look up a layer by exact (case-sensitive) name.
pub fn find_layer<'a>(model: &'a Model, name: &str) -> Option<&'a Layer> {
    model.layers.iter().find(|l| l.name == name)
}

/// Objects sitting directly on `layer`, in document order.
pub fn objects_on_layer<'a>(model: &'a Model, layer: &Layer) -> Vec<&'a ModelObject> {
    model
        .objects
        .iter()
        .filter(|o| o.layer == layer.id)
        .collect()
}

/// Objects on the named layer and on every layer nested beneath it,
/// in document order.
pub fn objects_on_parent_child<'a>(
    model: &'a Model,
    layer_name: &str,
) -> Result<Vec<&'a ModelObject>, LayerError> {
    let root = find_layer(model, layer_name).ok_or_else(|| LayerError::UnknownLayer {
        name: layer_name.to_string(),
    })?;

    let mut wanted: HashSet<Uuid> = HashSet::new();
    wanted.insert(root.id);
    // Layers form a forest; sweep until no new descendants appear.
    loop {
        let before = wanted.len();
        for layer in &model.layers {
            if let Some(parent) = layer.parent {
                if wanted.contains(&parent) {
                    wanted.insert(layer.id);
                }
            }
        }
        if wanted.len() == before {
            break;
        }
    }

    Ok(model
        .objects
        .iter()
        .filter(|o| wanted.contains(&o.layer))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Geometry;
    use grid_types::Point3d;
    use uuid::Uuid;

    fn triangle() -> Geometry {
        Geometry::PlanarSurface {
            boundary: vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(0.0, 1.0, 0.0),
            ],
            holes: vec![],
        }
    }

    fn obj(layer: Uuid) -> ModelObject {
        ModelObject {
            id: Uuid::new_v4(),
            name: None,
            layer,
            geometry: triangle(),
        }
    }

    fn nested_model() -> (Model, Uuid, Uuid, Uuid) {
        let grid = Uuid::new_v4();
        let child = Uuid::new_v4();
        let grandchild = Uuid::new_v4();
        let other = Uuid::new_v4();
        let model = Model {
            layers: vec![
                Layer {
                    id: grid,
                    name: "grid".into(),
                    parent: None,
                },
                Layer {
                    id: child,
                    name: "grid::rooms".into(),
                    parent: Some(grid),
                },
                Layer {
                    id: grandchild,
                    name: "grid::rooms::south".into(),
                    parent: Some(child),
                },
                Layer {
                    id: other,
                    name: "context".into(),
                    parent: None,
                },
            ],
            objects: vec![obj(grid), obj(child), obj(grandchild), obj(other)],
            tolerance: 0.001,
        };
        (model, grid, child, grandchild)
    }

    #[test]
    fn direct_objects_only() {
        let (model, grid, _, _) = nested_model();
        let layer = model.layer_by_id(grid).unwrap();
        let objs = objects_on_layer(&model, layer);
        assert_eq!(objs.len(), 1);
        assert_eq!(objs[0].layer, grid);
    }

    #[test]
    fn parent_child_includes_all_descendants() {
        let (model, grid, child, grandchild) = nested_model();
        let objs = objects_on_parent_child(&model, "grid").unwrap();
        let layers: Vec<Uuid> = objs.iter().map(|o| o.layer).collect();
        assert_eq!(layers, vec![grid, child, grandchild]);
    }

    #[test]
    fn parent_child_unknown_layer_errors() {
        let (model, _, _, _) = nested_model();
        let err = objects_on_parent_child(&model, "missing").unwrap_err();
        assert!(matches!(err, LayerError::UnknownLayer { .. }));
    }

    #[test]
    fn find_layer_is_case_sensitive() {
        let (model, _, _, _) = nested_model();
        assert!(find_layer(&model, "grid").is_some());
        assert!(find_layer(&model, "Grid").is_none());
    }
}
