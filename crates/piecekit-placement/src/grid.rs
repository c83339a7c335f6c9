//! Grid Fallback
//!
//! Used when neither matcher found anything in range. X and Z snap to the
//! centre of the grid cell under the cursor, so piece edges fall on grid
//! lines. Y rests on the ground plus the manual height, and the manual yaw is
//! rounded to the shape's rotation step.

use nalgebra::Point3;
use piecekit_core::quantize_angle;

use crate::registry::ShapeDef;

/// Grid-snapped placement of one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlacement {
    pub position: Point3<f64>,
    pub yaw: f64,
}

/// Centre of the cell of size `unit` containing `value`.
pub fn cell_center(value: f64, unit: f64) -> f64 {
    if unit <= 0.0 || !unit.is_finite() {
        return value;
    }
    ((value / unit).floor() + 0.5) * unit
}

/// Snaps `cursor` for `def`.
pub fn snap_to_grid(
    def: &ShapeDef,
    cursor: &Point3<f64>,
    manual_yaw: f64,
    manual_height: f64,
) -> GridPlacement {
    let unit = def.grid_unit;
    GridPlacement {
        position: Point3::new(
            cell_center(cursor.x, unit),
            def.vertical_offset + manual_height,
            cell_center(cursor.z, unit),
        ),
        yaw: quantize_angle(manual_yaw, def.rotation_step),
    }
}
