//! Unit sizes shared by the shape catalog and the matchers.
//!
//! Lengths are in world units; Y is up.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

/// Side length of the foundation footprint family.
pub const FOUNDATION_UNIT: f64 = 2.0;
/// Slab thickness of foundation pieces.
pub const FOUNDATION_THICKNESS: f64 = 0.4;

/// Side length of the structure footprint family.
pub const STRUCTURE_UNIT: f64 = 4.0;
/// Block height of structure pieces.
pub const STRUCTURE_HEIGHT: f64 = 1.0;

/// Wall length; matches the foundation edge so walls sit one per edge.
pub const WALL_LENGTH: f64 = FOUNDATION_UNIT;
/// Full wall height.
pub const WALL_HEIGHT: f64 = 2.0;
/// Half wall height.
pub const HALF_WALL_HEIGHT: f64 = 1.0;

/// Horizontal run of a sloped roof panel, eave to ridge.
pub const ROOF_RUN: f64 = 2.0;
/// Vertical rise of a sloped roof panel, eave to ridge.
pub const ROOF_RISE: f64 = 1.0;

/// Horizontal run of ramps and stairs.
pub const INCLINE_RUN: f64 = 2.0;
/// Vertical rise of ramps and stairs; reaches a ground foundation's top.
pub const INCLINE_RISE: f64 = FOUNDATION_THICKNESS;

/// Rotation step of four-fold symmetric shapes.
pub const QUARTER_TURN: f64 = FRAC_PI_2;
/// Rotation step of triangular shapes.
pub const SIXTH_TURN: f64 = FRAC_PI_3;

/// Horizontal normal components below this are treated as vertical.
pub const NORMAL_EPSILON: f64 = 1e-3;

/// Scores closer than this are considered tied.
pub const SCORE_EPSILON: f64 = 1e-6;
