//! # PieceKit Core
//!
//! Core types, errors, and geometry helpers shared by the PieceKit crates.
//! Provides the piece identifier, the unit constants that size every shape,
//! and the yaw math (headings, angle normalization) the matchers build on.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod id;

pub use error::{Error, Result, ShapeError};
pub use geometry::{
    angle_difference, heading, horizontal_length, normalize_angle, quantize_angle, yaw_rotation,
};
pub use id::PieceId;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
