//! Yaw geometry helpers.
//!
//! Yaw is a right-handed rotation about +Y. The heading of a horizontal
//! direction is measured so that rotating a vector by yaw `θ` adds `θ` to its
//! heading, which lets the matchers solve a yaw as a plain heading difference.

use nalgebra::{Rotation3, Vector3};
use std::f64::consts::{PI, TAU};

/// Heading of the horizontal part of `v`, in radians.
///
/// ```text
/// heading(v) = atan2(-v.z, v.x)
/// ```
///
/// +X has heading 0 and -Z has heading π/2. Callers must check
/// [`horizontal_length`] first; a vertical vector yields an arbitrary angle.
pub fn heading(v: &Vector3<f64>) -> f64 {
    (-v.z).atan2(v.x)
}

/// Length of the horizontal (XZ) part of `v`.
pub fn horizontal_length(v: &Vector3<f64>) -> f64 {
    v.x.hypot(v.z)
}

/// Wraps an angle into (-π, π]. Non-finite input maps to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Absolute angular distance between two angles, in [0, π].
pub fn angle_difference(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}

/// Rounds `angle` to the nearest multiple of `step` and normalizes it.
///
/// A non-positive step leaves the angle unquantized.
pub fn quantize_angle(angle: f64, step: f64) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return normalize_angle(angle);
    }
    normalize_angle((angle / step).round() * step)
}

/// Rotation about +Y by `yaw` radians.
pub fn yaw_rotation(yaw: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), yaw)
}
