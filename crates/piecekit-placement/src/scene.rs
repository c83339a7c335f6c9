//! Scene files.
//!
//! A saved scene is a versioned JSON document holding one record per placed
//! piece. Records keep the kind as its string tag, so a file naming a kind
//! this build does not know fails with
//! [`ShapeError::UnknownPieceKind`](piecekit_core::ShapeError::UnknownPieceKind)
//! instead of a generic parse error.

use std::path::Path;

use nalgebra::Point3;
use piecekit_core::{Error, PieceId, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::kind::PieceKind;
use crate::piece::{PieceSet, PlacedPiece};

/// Current scene file format version.
pub const SCENE_FORMAT_VERSION: u32 = 1;

/// On-disk form of one placed piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub id: PieceId,
    pub kind: String,
    pub position: [f64; 3],
    pub yaw: f64,
}

impl PieceRecord {
    pub fn from_piece(piece: &PlacedPiece) -> Self {
        Self {
            id: piece.id,
            kind: piece.kind.to_string(),
            position: [piece.position.x, piece.position.y, piece.position.z],
            yaw: piece.yaw(),
        }
    }

    pub fn to_piece(&self) -> Result<PlacedPiece> {
        let kind: PieceKind = self.kind.parse()?;
        let [x, y, z] = self.position;
        Ok(PlacedPiece::with_id(self.id, kind, Point3::new(x, y, z), self.yaw))
    }
}

/// A saved scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: u32,
    pub pieces: Vec<PieceRecord>,
}

impl SceneFile {
    pub fn from_pieces(pieces: &PieceSet) -> Self {
        Self {
            version: SCENE_FORMAT_VERSION,
            pieces: pieces.iter().map(PieceRecord::from_piece).collect(),
        }
    }

    /// Rebuilds the pieces in file order.
    pub fn to_pieces(&self) -> Result<PieceSet> {
        if self.version != SCENE_FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: SCENE_FORMAT_VERSION,
            });
        }
        self.pieces.iter().map(PieceRecord::to_piece).collect()
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        debug!(path = %path.as_ref().display(), pieces = self.pieces.len(), "scene saved");
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let scene: SceneFile = serde_json::from_str(&content)?;
        debug!(path = %path.as_ref().display(), pieces = scene.pieces.len(), "scene loaded");
        Ok(scene)
    }
}

impl PieceSet {
    /// Writes the set as a scene file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        SceneFile::from_pieces(self).save_to_file(path)
    }

    /// Reads a scene file written by [`PieceSet::save_to_file`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        SceneFile::load_from_file(path)?.to_pieces()
    }
}
