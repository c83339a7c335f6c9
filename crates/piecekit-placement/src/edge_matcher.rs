//! Edge-Socket Matcher
//!
//! Joins footprint pieces edge to edge. Each pairing of a target edge on a
//! placed piece with an edge of the pending shape has exactly one rigid
//! transform that lays the pending edge over the target with its direction
//! reversed:
//!
//! ```text
//!   target:   start ─────────► end
//!   pending:    end ◄───────── start
//!
//!   yaw         = heading(-target_dir) - heading(pending_dir)
//!   translation = target.end - R(yaw) * pending.start
//! ```
//!
//! The solve is then checked at all three reference points (start, center,
//! end). A pairing missing any of them by more than the point tolerance is
//! discarded, which rules out the wrong-angle joins a single-point test lets
//! through.
//!
//! Which edge kinds may join is read from the socket compatibility table,
//! queried from the placed edge's side; only opposing entries describe a
//! reversed join.

use nalgebra::{distance, Point3};
use piecekit_core::constants::{NORMAL_EPSILON, SCORE_EPSILON};
use piecekit_core::{angle_difference, heading, horizontal_length, yaw_rotation, PieceId};
use piecekit_settings::SnapSettings;
use tracing::trace;

use crate::kind::{EdgeRole, NormalRelation};
use crate::observer::{CandidateStatus, EdgeCandidate};
use crate::piece::PlacedPiece;
use crate::registry::{relation_between, EdgeSocket, ShapeDef, ShapeRegistry};
use crate::transform::{world_edges_with, WorldEdgeSocket, YawTransform};

/// The winning edge pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMatch {
    /// Solved origin of the pending piece
    pub position: Point3<f64>,
    /// Solved yaw, normalized
    pub yaw: f64,
    /// Height of the target edge center
    pub reference_height: f64,
    /// The target edge in world space
    pub target: WorldEdgeSocket,
    /// Index into the pending shape's edge list
    pub pending_index: usize,
    pub pending_role: EdgeRole,
    /// Distance from the solved origin to the cursor
    pub distance: f64,
}

/// Searches edge joins for one pending shape against a scene.
#[derive(Debug, Clone, Copy)]
pub struct EdgeMatcher<'a> {
    registry: &'a ShapeRegistry,
    settings: &'a SnapSettings,
}

impl<'a> EdgeMatcher<'a> {
    pub fn new(registry: &'a ShapeRegistry, settings: &'a SnapSettings) -> Self {
        Self { registry, settings }
    }

    /// Finds the best edge join for `pending` near `cursor`, appending every
    /// pairing considered to `candidates`.
    ///
    /// Returns `None` when no target edge is in range or no pairing survives
    /// the length filter and three-point check.
    pub fn find(
        &self,
        cursor: &Point3<f64>,
        pieces: &[PlacedPiece],
        pending: &ShapeDef,
        manual_yaw: f64,
        candidates: &mut Vec<EdgeCandidate>,
    ) -> Option<EdgeMatch> {
        let scene = self.scene_edges(pieces);
        let mut best: Option<(EdgeMatch, f64)> = None;

        for target in &scene {
            let center_distance = distance(&target.center, cursor);
            if center_distance > self.settings.snap_radius {
                continue;
            }

            if let Some(by) = self.occupant(target, &scene) {
                trace!(piece = %target.owner, role = ?target.role, occupant = %by, "edge occupied");
                candidates.push(rejected(target, CandidateStatus::Occupied { by }));
                continue;
            }

            for (index, local) in pending.edges.iter().enumerate() {
                let (transform, status) = match self.evaluate(target, local) {
                    Ok(transform) => {
                        let score = distance(&transform.origin(), cursor);
                        (Some(transform), CandidateStatus::Accepted { score })
                    }
                    Err(status) => (None, status),
                };

                candidates.push(EdgeCandidate {
                    target: target.owner,
                    target_role: target.role,
                    target_center: target.center,
                    pending_role: Some(local.role),
                    position: transform.map(|t| t.origin()),
                    yaw: transform.map(|t| t.yaw),
                    status,
                });

                let (Some(transform), Some(score)) = (transform, status.score()) else {
                    continue;
                };
                let yaw_gap = angle_difference(transform.yaw, manual_yaw);
                let candidate = EdgeMatch {
                    position: transform.origin(),
                    yaw: transform.yaw,
                    reference_height: target.center.y,
                    target: *target,
                    pending_index: index,
                    pending_role: local.role,
                    distance: score,
                };
                if beats(score, yaw_gap, best.as_ref()) {
                    best = Some((candidate, yaw_gap));
                }
            }
        }

        best.map(|(found, _)| found)
    }

    /// World edges of every placed piece that joins by edges, in piece order.
    fn scene_edges(&self, pieces: &[PlacedPiece]) -> Vec<WorldEdgeSocket> {
        pieces
            .iter()
            .filter_map(|piece| {
                let def = self.registry.definition_for(piece.kind);
                def.uses_edges().then(|| world_edges_with(def, piece))
            })
            .flatten()
            .collect()
    }

    /// Another piece whose edge midpoint sits on `target`'s midpoint.
    fn occupant(&self, target: &WorldEdgeSocket, scene: &[WorldEdgeSocket]) -> Option<PieceId> {
        scene
            .iter()
            .find(|other| {
                let gap = distance(&other.center, &target.center);
                other.owner != target.owner && gap <= self.settings.edge_occupied_distance
            })
            .map(|other| other.owner)
    }

    /// Solves one pairing and runs the compatibility, length and three-point
    /// checks.
    fn evaluate(
        &self,
        target: &WorldEdgeSocket,
        local: &EdgeSocket,
    ) -> Result<YawTransform, CandidateStatus> {
        if relation_between(target.kind, local.kind) != Some(NormalRelation::Opposing) {
            trace!(
                target_kind = %target.kind,
                pending_kind = %local.kind,
                "edge kinds incompatible"
            );
            return Err(CandidateStatus::Incompatible);
        }

        if (local.length - target.length).abs() > self.settings.edge_length_tolerance {
            trace!(
                pending_length = local.length,
                target_length = target.length,
                "edge length mismatch"
            );
            return Err(CandidateStatus::LengthMismatch {
                pending: local.length,
                target: target.length,
            });
        }

        let transform = solve_reversed(target, local).ok_or(CandidateStatus::DegenerateNormal)?;

        let max_error = reversal_error(&transform, target, local);
        if max_error > self.settings.edge_point_tolerance {
            trace!(max_error, "edge three-point check failed");
            return Err(CandidateStatus::Tolerance { max_error });
        }

        Ok(transform)
    }
}

/// Transform laying `local` over `target` with start and end swapped, or
/// `None` if either edge has no horizontal extent.
pub fn solve_reversed(target: &WorldEdgeSocket, local: &EdgeSocket) -> Option<YawTransform> {
    let target_dir = target.direction();
    let local_dir = local.direction();
    if horizontal_length(&target_dir) < NORMAL_EPSILON
        || horizontal_length(&local_dir) < NORMAL_EPSILON
    {
        return None;
    }

    let yaw = heading(&-target_dir) - heading(&local_dir);
    let rotated_start = yaw_rotation(yaw) * local.start;
    Some(YawTransform::new(yaw, target.end - rotated_start))
}

/// Largest of the three reference-point errors of a reversed join.
pub fn reversal_error(t: &YawTransform, target: &WorldEdgeSocket, local: &EdgeSocket) -> f64 {
    let start = distance(&t.apply_point(&local.start), &target.end);
    let center = distance(&t.apply_point(&local.center), &target.center);
    let end = distance(&t.apply_point(&local.end), &target.start);
    start.max(center).max(end)
}

fn rejected(target: &WorldEdgeSocket, status: CandidateStatus) -> EdgeCandidate {
    EdgeCandidate {
        target: target.owner,
        target_role: target.role,
        target_center: target.center,
        pending_role: None,
        position: None,
        yaw: None,
        status,
    }
}

/// Closer wins; near-equal distances go to the yaw nearer the manual yaw,
/// then to whichever came first.
fn beats(score: f64, yaw_gap: f64, best: Option<&(EdgeMatch, f64)>) -> bool {
    let Some((current, current_gap)) = best else {
        return true;
    };
    if score < current.distance - SCORE_EPSILON {
        return true;
    }
    (score - current.distance).abs() <= SCORE_EPSILON && yaw_gap < current_gap - SCORE_EPSILON
}
