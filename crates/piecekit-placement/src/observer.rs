//! Candidate observation
//!
//! Debug and visualization collaborators can watch every candidate the
//! matchers consider by passing a [`PlacementObserver`] to
//! [`compute_placement_observed`](crate::PlacementEngine::compute_placement_observed).
//! The observer sits outside the return value; [`NoopObserver`] is what the
//! plain entry point uses.

use nalgebra::Point3;
use piecekit_core::PieceId;
use serde::{Deserialize, Serialize};

use crate::engine::SnapResult;
use crate::kind::{EdgeRole, SocketKind};

/// Outcome of evaluating one candidate pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CandidateStatus {
    /// Passed every check; lower scores win
    Accepted { score: f64 },
    /// Target farther from the cursor than the snap radius
    OutOfRange { distance: f64 },
    /// Another piece already joins the target edge
    Occupied { by: PieceId },
    /// Pending and target edge lengths differ
    LengthMismatch { pending: f64, target: f64 },
    /// Solved transform missed a reference point; carries the worst error
    Tolerance { max_error: f64 },
    /// Target socket does not accept any of the pending shape's sockets
    Incompatible,
    /// Direction or normal too close to vertical to solve a yaw
    DegenerateNormal,
}

impl CandidateStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Accepted { score } => Some(*score),
            _ => None,
        }
    }
}

/// One (target edge, pending edge) pairing.
///
/// `pending_role`, `position` and `yaw` are absent when the target was
/// rejected before any pending edge was tried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeCandidate {
    pub target: PieceId,
    pub target_role: EdgeRole,
    pub target_center: Point3<f64>,
    pub pending_role: Option<EdgeRole>,
    pub position: Option<Point3<f64>>,
    pub yaw: Option<f64>,
    pub status: CandidateStatus,
}

/// One (target socket, pending socket) pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocketCandidate {
    pub target: PieceId,
    pub target_kind: SocketKind,
    pub target_position: Point3<f64>,
    pub pending_kind: Option<SocketKind>,
    pub position: Option<Point3<f64>>,
    pub yaw: Option<f64>,
    pub status: CandidateStatus,
}

/// Receives the candidate lists of one placement call, synchronously.
///
/// Every method has an empty default so implementors pick what they need.
pub trait PlacementObserver {
    /// Called at the start of every placement call, before any tier runs.
    fn on_begin(&mut self) {}

    /// Called once per call that ran the edge matcher, even with no candidates.
    fn on_edge_candidates(&mut self, _candidates: &[EdgeCandidate]) {}

    /// Called once per call that ran the socket matcher.
    fn on_socket_candidates(&mut self, _candidates: &[SocketCandidate]) {}

    /// Called with the final result.
    fn on_resolved(&mut self, _result: &SnapResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PlacementObserver for NoopObserver {}

/// Observer that keeps the candidates of the most recent call. Lists for a
/// tier the call skipped are left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecorder {
    pub edge_candidates: Vec<EdgeCandidate>,
    pub socket_candidates: Vec<SocketCandidate>,
    pub resolved: Option<SnapResult>,
    /// Number of results observed over the recorder's lifetime.
    pub calls: usize,
}

impl CandidateRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.edge_candidates.clear();
        self.socket_candidates.clear();
        self.resolved = None;
    }

    pub fn accepted_edges(&self) -> impl Iterator<Item = &EdgeCandidate> {
        self.edge_candidates.iter().filter(|c| c.status.is_accepted())
    }

    pub fn accepted_sockets(&self) -> impl Iterator<Item = &SocketCandidate> {
        self.socket_candidates
            .iter()
            .filter(|c| c.status.is_accepted())
    }
}

impl PlacementObserver for CandidateRecorder {
    fn on_begin(&mut self) {
        self.clear();
    }

    fn on_edge_candidates(&mut self, candidates: &[EdgeCandidate]) {
        self.edge_candidates = candidates.to_vec();
    }

    fn on_socket_candidates(&mut self, candidates: &[SocketCandidate]) {
        self.socket_candidates = candidates.to_vec();
    }

    fn on_resolved(&mut self, result: &SnapResult) {
        self.resolved = Some(*result);
        self.calls += 1;
    }
}
