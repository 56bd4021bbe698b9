pub mod controls;
pub mod face;
pub mod grid;
pub mod naming;
pub mod plane;
pub mod point;

pub use controls::GridControls;
pub use face::{Face3d, FaceError};
pub use grid::{GridError, Sensor, SensorGrid};
pub use naming::{clean_string, NameGenerator, UuidNames};
pub use plane::Plane;
pub use point::{Point3d, Vec3};
