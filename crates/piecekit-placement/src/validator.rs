//! Placement Validator
//!
//! Decides whether a resolved placement may be committed:
//!
//! | Resolution | Footprint shape | Other shape |
//! |---|---|---|
//! | edge or socket match | no duplicate | no duplicate |
//! | grid | no overlapping footprint | no duplicate |
//!
//! Roofs are additionally invalid on the grid, since they must rest on a
//! structural attachment.
//!
//! Two footprints overlap when their centres are horizontally closer than
//! [`CLEARANCE`] times the sum of their footprint radii. Neighbours sharing an
//! edge sit exactly one radius sum apart.

use nalgebra::{distance, Point3};
use piecekit_core::horizontal_length;
use piecekit_settings::SnapSettings;
use tracing::trace;

use crate::piece::PlacedPiece;
use crate::registry::{ShapeDef, ShapeRegistry};

/// Fraction of the edge-to-edge centre distance below which footprints overlap.
pub const CLEARANCE: f64 = 0.9;

/// Checks resolved placements against the scene.
#[derive(Debug, Clone, Copy)]
pub struct PlacementValidator<'a> {
    registry: &'a ShapeRegistry,
    settings: &'a SnapSettings,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(registry: &'a ShapeRegistry, settings: &'a SnapSettings) -> Self {
        Self { registry, settings }
    }

    /// Whether `pending` may be placed at `position`. `matched` is true when
    /// an edge or socket match produced the position.
    pub fn is_valid(
        &self,
        pending: &ShapeDef,
        position: &Point3<f64>,
        matched: bool,
        pieces: &[PlacedPiece],
    ) -> bool {
        if !matched && pending.is_roof() {
            trace!(kind = %pending.kind, "roof has no support");
            return false;
        }

        if let Some(existing) = self.duplicate_of(position, pieces) {
            trace!(kind = %pending.kind, existing = %existing.id, "duplicate placement");
            return false;
        }

        if !matched && pending.is_footprint() {
            if let Some(existing) = self.overlapping_footprint(pending, position, pieces) {
                trace!(kind = %pending.kind, existing = %existing.id, "footprint overlap");
                return false;
            }
        }

        true
    }

    /// First piece whose centre is within the duplicate radius of `position`.
    pub fn duplicate_of<'p>(
        &self,
        position: &Point3<f64>,
        pieces: &'p [PlacedPiece],
    ) -> Option<&'p PlacedPiece> {
        pieces
            .iter()
            .find(|piece| distance(&piece.position, position) < self.settings.duplicate_epsilon)
    }

    /// First footprint piece whose outline `pending` would cut into at
    /// `position`.
    pub fn overlapping_footprint<'p>(
        &self,
        pending: &ShapeDef,
        position: &Point3<f64>,
        pieces: &'p [PlacedPiece],
    ) -> Option<&'p PlacedPiece> {
        pieces.iter().find(|piece| {
            let existing = self.registry.definition_for(piece.kind);
            existing.is_footprint()
                && horizontal_length(&(piece.position - position))
                    < CLEARANCE * (pending.footprint_radius + existing.footprint_radius)
        })
    }
}
