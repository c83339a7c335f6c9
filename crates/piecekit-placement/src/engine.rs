//! Placement engine entry point.
//!
//! Runs the tiers in order for one frame's request and validates the outcome:
//!
//! ```text
//! cursor ─► edge matcher (edge shapes) ─► socket matcher ─► grid ─► validator
//! ```
//!
//! Each call is a pure function of its request and the engine's settings.

use nalgebra::{Point3, Vector3};
use piecekit_core::normalize_angle;
use piecekit_settings::SnapSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::edge_matcher::EdgeMatcher;
use crate::grid::snap_to_grid;
use crate::kind::PieceKind;
use crate::observer::{NoopObserver, PlacementObserver};
use crate::piece::PlacedPiece;
use crate::registry::ShapeRegistry;
use crate::socket_matcher::SocketMatcher;
use crate::validator::PlacementValidator;

/// Which tier produced a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapSource {
    /// No cursor; nothing was computed
    #[default]
    None,
    Edge,
    Socket,
    Grid,
}

/// Placement decision for the pending piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub position: Point3<f64>,
    /// Yaw in (-π, π]
    pub yaw: f64,
    pub is_valid: bool,
    /// Height of the matched edge or socket; absent on the grid.
    pub reference_height: Option<f64>,
    pub source: SnapSource,
}

impl SnapResult {
    /// Zero-valued, invalid result returned when there is no cursor.
    pub fn invalid() -> Self {
        Self {
            position: Point3::origin(),
            yaw: 0.0,
            is_valid: false,
            reference_height: None,
            source: SnapSource::None,
        }
    }

    /// True when an edge or socket match produced the placement.
    pub fn is_resolved(&self) -> bool {
        matches!(self.source, SnapSource::Edge | SnapSource::Socket)
    }

    /// Euler rotation (pitch, yaw, roll) for a new `PlacedPiece`.
    pub fn rotation(&self) -> Vector3<f64> {
        Vector3::new(0.0, self.yaw, 0.0)
    }

    /// Commits this placement as a new piece, if it is valid.
    pub fn to_piece(&self, kind: PieceKind) -> Option<PlacedPiece> {
        self.is_valid
            .then(|| PlacedPiece::new(kind, self.position, self.yaw))
    }
}

impl Default for SnapResult {
    fn default() -> Self {
        Self::invalid()
    }
}

/// One frame's inputs.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest<'a> {
    /// Ground intersection of the cursor ray, if any
    pub cursor: Option<Point3<f64>>,
    pub pieces: &'a [PlacedPiece],
    pub kind: PieceKind,
    /// Accumulated free rotation, radians, any range
    pub manual_yaw: f64,
    /// Extra height applied on the grid tier only
    pub manual_height: f64,
}

impl<'a> PlacementRequest<'a> {
    pub fn new(cursor: Option<Point3<f64>>, pieces: &'a [PlacedPiece], kind: PieceKind) -> Self {
        Self {
            cursor,
            pieces,
            kind,
            manual_yaw: 0.0,
            manual_height: 0.0,
        }
    }

    pub fn with_manual_yaw(mut self, yaw: f64) -> Self {
        self.manual_yaw = yaw;
        self
    }

    pub fn with_manual_height(mut self, height: f64) -> Self {
        self.manual_height = height;
        self
    }
}

/// Computes placements against a shape registry with fixed settings.
#[derive(Debug, Clone)]
pub struct PlacementEngine<'r> {
    registry: &'r ShapeRegistry,
    settings: SnapSettings,
}

impl PlacementEngine<'static> {
    /// Engine over the built-in shape catalog.
    pub fn new(settings: SnapSettings) -> Self {
        Self::with_registry(ShapeRegistry::global(), settings)
    }
}

impl Default for PlacementEngine<'static> {
    fn default() -> Self {
        Self::new(SnapSettings::default())
    }
}

impl<'r> PlacementEngine<'r> {
    pub fn with_registry(registry: &'r ShapeRegistry, settings: SnapSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &SnapSettings {
        &self.settings
    }

    pub fn registry(&self) -> &'r ShapeRegistry {
        self.registry
    }

    /// Resolves where the pending piece goes this frame.
    ///
    /// # Panics
    ///
    /// Panics if `request.kind` or the kind of any placed piece has no shape
    /// definition in the engine's registry.
    pub fn compute_placement(&self, request: &PlacementRequest<'_>) -> SnapResult {
        self.compute_placement_observed(request, &mut NoopObserver)
    }

    /// Like [`compute_placement`](Self::compute_placement), reporting every
    /// candidate considered to `observer`.
    pub fn compute_placement_observed<O>(
        &self,
        request: &PlacementRequest<'_>,
        observer: &mut O,
    ) -> SnapResult
    where
        O: PlacementObserver + ?Sized,
    {
        observer.on_begin();
        let result = self.resolve(request, observer);
        observer.on_resolved(&result);
        result
    }

    fn resolve<O>(&self, request: &PlacementRequest<'_>, observer: &mut O) -> SnapResult
    where
        O: PlacementObserver + ?Sized,
    {
        let Some(cursor) = request.cursor else {
            return SnapResult::invalid();
        };
        if !cursor.coords.iter().all(|c| c.is_finite()) {
            warn!(?cursor, "ignoring non-finite cursor");
            return SnapResult::invalid();
        }

        let pieces = request.pieces;
        let tilted = pieces.iter().filter(|p| p.has_tilt()).count();
        if tilted > 0 {
            warn!(tilted, "placed pieces carry pitch or roll; only yaw is used");
        }

        let pending = self.registry.definition_for(request.kind);
        let manual_yaw = normalize_angle(request.manual_yaw);
        let validator = PlacementValidator::new(self.registry, &self.settings);

        if pending.uses_edges() {
            let mut candidates = Vec::new();
            let found = EdgeMatcher::new(self.registry, &self.settings).find(
                &cursor,
                pieces,
                pending,
                manual_yaw,
                &mut candidates,
            );
            observer.on_edge_candidates(&candidates);

            if let Some(found) = found {
                debug!(
                    kind = %request.kind,
                    piece = %found.target.owner,
                    role = ?found.target.role,
                    yaw = found.yaw,
                    "edge match"
                );
                return SnapResult {
                    position: found.position,
                    yaw: found.yaw,
                    is_valid: validator.is_valid(pending, &found.position, true, pieces),
                    reference_height: Some(found.reference_height),
                    source: SnapSource::Edge,
                };
            }
        }

        if !pending.attaches_to.is_empty() {
            let mut candidates = Vec::new();
            let found = SocketMatcher::new(self.registry, &self.settings).find(
                &cursor,
                pieces,
                pending,
                manual_yaw,
                &mut candidates,
            );
            observer.on_socket_candidates(&candidates);

            if let Some(found) = found {
                debug!(
                    kind = %request.kind,
                    piece = %found.target.owner,
                    socket = %found.target.kind,
                    score = found.score,
                    "socket match"
                );
                return SnapResult {
                    position: found.position,
                    yaw: found.yaw,
                    is_valid: validator.is_valid(pending, &found.position, true, pieces),
                    reference_height: Some(found.reference_height),
                    source: SnapSource::Socket,
                };
            }
        }

        let placed = snap_to_grid(pending, &cursor, manual_yaw, request.manual_height);
        debug!(kind = %request.kind, position = ?placed.position, "grid fallback");
        SnapResult {
            position: placed.position,
            yaw: placed.yaw,
            is_valid: validator.is_valid(pending, &placed.position, false, pieces),
            reference_height: None,
            source: SnapSource::Grid,
        }
    }
}

/// Computes a placement with default settings and the built-in catalog.
pub fn compute_placement(
    cursor: Option<Point3<f64>>,
    pieces: &[PlacedPiece],
    kind: PieceKind,
    manual_yaw: f64,
) -> SnapResult {
    PlacementEngine::default()
        .compute_placement(&PlacementRequest::new(cursor, pieces, kind).with_manual_yaw(manual_yaw))
}
