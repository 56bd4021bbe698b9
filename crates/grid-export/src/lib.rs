pub mod writer;

pub use writer::{DataWriter, ExportError};
