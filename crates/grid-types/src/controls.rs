use serde::{Deserialize, Serialize};

/// Grid seeding controls: sample spacing along each axis and the standoff
/// distance applied along each face normal.
///
/// Components are expected to be non-negative. A spacing of zero is
/// permitted and produces degenerate seeding (no interior sensors).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridControls {
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub offset_z: f64,
}

impl GridControls {
    pub fn new(spacing_x: f64, spacing_y: f64, offset_z: f64) -> Self {
        Self {
            spacing_x,
            spacing_y,
            offset_z,
        }
    }
}

impl Default for GridControls {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unit_spacing_zero_offset() {
        let c = GridControls::default();
        assert_eq!(c, GridControls::new(1.0, 1.0, 0.0));
    }
}
