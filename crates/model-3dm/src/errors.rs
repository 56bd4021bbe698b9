use uuid::Uuid;

/// Errors during model document loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse document: {0}")]
    ParseError(String),

    #[error("unknown document format: {0}")]
    UnknownFormat(String),

    #[error("document version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("duplicate layer id {layer_id}")]
    DuplicateLayerId { layer_id: Uuid },

    #[error("layer {layer_id} references unknown parent {parent_id}")]
    UnknownParent { layer_id: Uuid, parent_id: Uuid },

    #[error("layer {layer_id} is part of a parent cycle")]
    ParentCycle { layer_id: Uuid },

    #[error("object {object_id} references unknown layer {layer_id}")]
    UnknownLayerRef { object_id: Uuid, layer_id: Uuid },

    #[error("document tolerance must be positive, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },
}
