pub mod import;

pub use import::{import_grids, ImportError, SummaryRow};
