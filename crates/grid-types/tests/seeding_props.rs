//! Property-based tests for grid seeding invariants.

use grid_types::{Face3d, Point3d, SensorGrid};
use proptest::prelude::*;

fn rect_face(width: f64, height: f64) -> Face3d {
    Face3d::new(
        vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(width, 0.0, 0.0),
            Point3d::new(width, height, 0.0),
            Point3d::new(0.0, height, 0.0),
        ],
        vec![],
        1e-9,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn sensors_stay_inside_the_face_bounds(
        width in 0.5f64..20.0,
        height in 0.5f64..20.0,
        spacing in 0.1f64..3.0,
        offset in -1.0f64..1.0,
    ) {
        let face = rect_face(width, height);
        let grid = SensorGrid::from_face3d("g", &[face], spacing, spacing, offset);

        let eps = 1e-9;
        for s in grid.sensors() {
            prop_assert!(s.pos.x >= -eps && s.pos.x <= width + eps);
            prop_assert!(s.pos.y >= -eps && s.pos.y <= height + eps);
            prop_assert!((s.pos.z - offset * s.dir.z).abs() < eps);
            prop_assert!((s.dir.length() - 1.0).abs() < 1e-9);
        }

        // Never more sensors than bounding-box cells.
        let max_cells = ((width / spacing).ceil() + 1.0) * ((height / spacing).ceil() + 1.0);
        prop_assert!(grid.len() as f64 <= max_cells);
    }

    #[test]
    fn non_positive_spacing_is_degenerate(
        width in 0.5f64..5.0,
        height in 0.5f64..5.0,
        spacing in -2.0f64..=0.0,
    ) {
        let face = rect_face(width, height);
        let grid = SensorGrid::from_face3d("g", &[face], spacing, spacing, 0.0);
        prop_assert!(grid.is_empty());
    }
}
