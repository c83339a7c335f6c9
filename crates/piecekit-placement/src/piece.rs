//! Placed-piece records and a minimal insertion-ordered store.

use nalgebra::{Point3, Vector3};
use piecekit_core::PieceId;
use serde::{Deserialize, Serialize};

use crate::kind::PieceKind;

/// A committed piece in the scene.
///
/// `rotation` holds Euler angles (pitch, yaw, roll) about (X, Y, Z). Only the
/// yaw is ever non-zero; the engine reads `rotation.y` and ignores the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub position: Point3<f64>,
    pub rotation: Vector3<f64>,
}

impl PlacedPiece {
    /// Creates a piece with a fresh id and yaw-only rotation.
    pub fn new(kind: PieceKind, position: Point3<f64>, yaw: f64) -> Self {
        Self::with_id(PieceId::new(), kind, position, yaw)
    }

    /// Creates a piece with a caller-supplied id.
    pub fn with_id(id: PieceId, kind: PieceKind, position: Point3<f64>, yaw: f64) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: Vector3::new(0.0, yaw, 0.0),
        }
    }

    /// Rotation about the vertical axis, in radians.
    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }

    /// True when pitch or roll carry a value, which the engine will ignore.
    pub fn has_tilt(&self) -> bool {
        self.rotation.x != 0.0 || self.rotation.z != 0.0
    }
}

/// Insertion-ordered collection of placed pieces.
///
/// Stands in for the scene store that owns pieces in a host application.
/// Order is preserved on removal so tie-breaks stay reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PieceSet {
    pieces: Vec<PlacedPiece>,
}

impl PieceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a piece and returns its id.
    pub fn insert(&mut self, piece: PlacedPiece) -> PieceId {
        let id = piece.id;
        self.pieces.push(piece);
        id
    }

    /// Removes a piece by id, keeping the order of the rest.
    pub fn remove(&mut self, id: PieceId) -> Option<PlacedPiece> {
        let index = self.pieces.iter().position(|p| p.id == id)?;
        Some(self.pieces.remove(index))
    }

    pub fn get(&self, id: PieceId) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.pieces.iter()
    }

    /// Read-only snapshot handed to the engine each frame.
    pub fn as_slice(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

impl FromIterator<PlacedPiece> for PieceSet {
    fn from_iter<I: IntoIterator<Item = PlacedPiece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}
