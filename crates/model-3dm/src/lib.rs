pub mod convert;
pub mod document;
pub mod errors;
pub mod layers;
pub mod load;

pub use convert::{to_face3d, ConversionError};
pub use document::{BrepFace, Geometry, Layer, Model, ModelObject};
pub use errors::LoadError;
pub use layers::{find_layer, objects_on_layer, objects_on_parent_child, LayerError};
pub use load::{load_model, FORMAT_VERSION, MODEL_FORMAT};
