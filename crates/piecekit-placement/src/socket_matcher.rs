//! Point-Socket Matcher
//!
//! Attaches walls, roofs and inclines by single sockets. For each placed
//! socket the pending shape attaches to, the compatibility table names which
//! pending sockets may join it and whether their normals must oppose or align.
//! The yaw comes from the normals' headings; the translation puts the rotated
//! pending socket on the target.
//!
//! Candidates are scored by the distance from the solved origin to the cursor,
//! plus a penalty when the yaw disagrees with the manual yaw, minus a bonus for
//! top sockets while the cursor is raised. The lowest score wins and ties keep
//! the earlier candidate.

use nalgebra::{distance, Point3, Vector3};
use piecekit_core::constants::{NORMAL_EPSILON, SCORE_EPSILON};
use piecekit_core::{angle_difference, heading, horizontal_length, quantize_angle, yaw_rotation};
use piecekit_settings::SnapSettings;
use tracing::trace;

use crate::kind::{NormalRelation, SocketKind};
use crate::observer::{CandidateStatus, SocketCandidate};
use crate::piece::PlacedPiece;
use crate::registry::{relation_between, PointSocket, ShapeDef, ShapeRegistry};
use crate::transform::{world_sockets_with, WorldPointSocket, YawTransform};

/// The winning socket pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketMatch {
    pub position: Point3<f64>,
    pub yaw: f64,
    /// Height of the target socket
    pub reference_height: f64,
    pub target: WorldPointSocket,
    /// Index into the pending shape's socket list
    pub pending_index: usize,
    pub pending_kind: SocketKind,
    pub score: f64,
}

/// Searches socket attachments for one pending shape against a scene.
#[derive(Debug, Clone, Copy)]
pub struct SocketMatcher<'a> {
    registry: &'a ShapeRegistry,
    settings: &'a SnapSettings,
}

impl<'a> SocketMatcher<'a> {
    pub fn new(registry: &'a ShapeRegistry, settings: &'a SnapSettings) -> Self {
        Self { registry, settings }
    }

    /// Finds the best-scoring attachment for `pending` near `cursor`,
    /// appending every pairing considered to `candidates`.
    pub fn find(
        &self,
        cursor: &Point3<f64>,
        pieces: &[PlacedPiece],
        pending: &ShapeDef,
        manual_yaw: f64,
        candidates: &mut Vec<SocketCandidate>,
    ) -> Option<SocketMatch> {
        let mut best: Option<SocketMatch> = None;

        for piece in pieces {
            let def = self.registry.definition_for(piece.kind);
            for target in world_sockets_with(def, piece) {
                if !pending.can_attach_to(target.kind) {
                    continue;
                }

                let reach = distance(&target.position, cursor);
                if reach > self.settings.snap_radius {
                    let status = CandidateStatus::OutOfRange { distance: reach };
                    candidates.push(rejected(&target, status));
                    continue;
                }

                let mut tried = false;
                for (index, local) in pending.sockets.iter().enumerate() {
                    let Some(relation) = relation_between(target.kind, local.kind) else {
                        continue;
                    };
                    tried = true;

                    let Some(yaw) = solve_yaw(
                        &target.normal,
                        &local.normal,
                        relation,
                        manual_yaw,
                        pending.rotation_step,
                    ) else {
                        trace!(
                            piece = %target.owner,
                            kind = %target.kind,
                            "degenerate socket normals"
                        );
                        candidates.push(SocketCandidate {
                            pending_kind: Some(local.kind),
                            ..rejected(&target, CandidateStatus::DegenerateNormal)
                        });
                        continue;
                    };

                    let transform = attach(&target, local, yaw);
                    let score = self.score(&transform, &target, cursor, manual_yaw);
                    candidates.push(SocketCandidate {
                        target: target.owner,
                        target_kind: target.kind,
                        target_position: target.position,
                        pending_kind: Some(local.kind),
                        position: Some(transform.origin()),
                        yaw: Some(transform.yaw),
                        status: CandidateStatus::Accepted { score },
                    });

                    if best.is_none_or(|current| score < current.score - SCORE_EPSILON) {
                        best = Some(SocketMatch {
                            position: transform.origin(),
                            yaw: transform.yaw,
                            reference_height: target.position.y,
                            target,
                            pending_index: index,
                            pending_kind: local.kind,
                            score,
                        });
                    }
                }

                if !tried {
                    candidates.push(rejected(&target, CandidateStatus::Incompatible));
                }
            }
        }

        best
    }

    fn score(
        &self,
        transform: &YawTransform,
        target: &WorldPointSocket,
        cursor: &Point3<f64>,
        manual_yaw: f64,
    ) -> f64 {
        let mut score = distance(&transform.origin(), cursor);
        if angle_difference(transform.yaw, manual_yaw) > self.settings.yaw_mismatch_threshold {
            score += self.settings.yaw_mismatch_penalty;
        }
        if cursor.y > self.settings.elevated_cursor_height && target.kind.is_top() {
            score -= self.settings.top_socket_bonus;
        }
        score
    }
}

/// Yaw that brings `local` into `relation` with `target`.
///
/// Two vertical normals leave the yaw free, so the manual yaw quantized to
/// `step` is used. A zero normal, or a vertical normal paired with a
/// horizontal one, has no solution.
pub fn solve_yaw(
    target: &Vector3<f64>,
    local: &Vector3<f64>,
    relation: NormalRelation,
    manual_yaw: f64,
    step: f64,
) -> Option<f64> {
    if target.norm() < NORMAL_EPSILON || local.norm() < NORMAL_EPSILON {
        return None;
    }
    let target_flat = horizontal_length(target) < NORMAL_EPSILON;
    let local_flat = horizontal_length(local) < NORMAL_EPSILON;

    match (target_flat, local_flat) {
        (true, true) => Some(quantize_angle(manual_yaw, step)),
        (false, false) => {
            let wanted = match relation {
                NormalRelation::Opposing => -target,
                NormalRelation::Aligned => *target,
            };
            Some(heading(&wanted) - heading(local))
        }
        _ => None,
    }
}

/// Transform putting the pending socket `local`, rotated by `yaw`, onto `target`.
pub fn attach(target: &WorldPointSocket, local: &PointSocket, yaw: f64) -> YawTransform {
    let rotated = yaw_rotation(yaw) * local.position;
    YawTransform::new(yaw, target.position - rotated)
}

fn rejected(target: &WorldPointSocket, status: CandidateStatus) -> SocketCandidate {
    SocketCandidate {
        target: target.owner,
        target_kind: target.kind,
        target_position: target.position,
        pending_kind: None,
        position: None,
        yaw: None,
        status,
    }
}
