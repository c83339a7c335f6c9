//! Shape Registry
//!
//! A single immutable table from [`PieceKind`] to the declarative data that
//! describes how a shape connects: its category, local sockets and edges, the
//! socket kinds it attaches to, and its grid metadata. Matchers and the
//! validator query this table; nothing branches on individual kinds.
//!
//! ```text
//! PieceKind ──► ShapeDef
//!                ├── category / matching mode
//!                ├── vertical offset, rotation step, grid unit, footprint radius
//!                ├── PointSocket[]   (position + outward normal + kind)
//!                ├── EdgeSocket[]    (start, center, end + kind + role)
//!                └── attaches_to     (socket kinds on placed pieces)
//! ```

use nalgebra::{distance, Point3, Vector3};
use piecekit_core::constants::QUARTER_TURN;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::kind::{EdgeRole, MatchingMode, PieceKind, ShapeCategory, SocketKind};

mod attached;
mod compat;
mod footprint;

pub use compat::{accepted_by, relation_between, Compatibility};

/// Point connection declared in a shape's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSocket {
    pub position: Point3<f64>,
    /// Unit outward direction; zero when the declared normal was degenerate.
    pub normal: Vector3<f64>,
    pub kind: SocketKind,
}

impl PointSocket {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>, kind: SocketKind) -> Self {
        Self {
            position,
            normal: normal
                .try_normalize(f64::EPSILON)
                .unwrap_or_else(Vector3::zeros),
            kind,
        }
    }
}

/// Segment connection declared in a shape's local space.
///
/// `center` is the midpoint of `start`/`end` and `length` their distance;
/// both are derived in [`EdgeSocket::new`] and never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSocket {
    pub start: Point3<f64>,
    pub center: Point3<f64>,
    pub end: Point3<f64>,
    pub kind: SocketKind,
    pub length: f64,
    pub role: EdgeRole,
}

impl EdgeSocket {
    pub fn new(start: Point3<f64>, end: Point3<f64>, kind: SocketKind, role: EdgeRole) -> Self {
        Self {
            start,
            center: nalgebra::center(&start, &end),
            end,
            kind,
            length: distance(&start, &end),
            role,
        }
    }

    /// Direction from start to end (not normalized).
    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }
}

/// Everything the engine knows about one shape kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub category: ShapeCategory,
    pub matching: MatchingMode,
    /// Height of the piece origin above the surface it rests on.
    pub vertical_offset: f64,
    /// Yaw quantization step for grid placement.
    pub rotation_step: f64,
    /// Grid cell size used by the fallback tier.
    pub grid_unit: f64,
    /// Inradius of the in-plane outline: the distance from the origin to
    /// the nearest edge. Zero for shapes without a footprint.
    pub footprint_radius: f64,
    pub sockets: SmallVec<[PointSocket; 4]>,
    pub edges: SmallVec<[EdgeSocket; 4]>,
    /// Socket kinds on placed pieces this shape is willing to attach to.
    pub attaches_to: SmallVec<[SocketKind; 4]>,
}

impl ShapeDef {
    pub fn new(kind: PieceKind, category: ShapeCategory, matching: MatchingMode) -> Self {
        Self {
            kind,
            category,
            matching,
            vertical_offset: 0.0,
            rotation_step: QUARTER_TURN,
            grid_unit: 1.0,
            footprint_radius: 0.0,
            sockets: SmallVec::new(),
            edges: SmallVec::new(),
            attaches_to: SmallVec::new(),
        }
    }

    pub fn with_vertical_offset(mut self, offset: f64) -> Self {
        self.vertical_offset = offset;
        self
    }

    pub fn with_rotation_step(mut self, step: f64) -> Self {
        self.rotation_step = step;
        self
    }

    pub fn with_grid_unit(mut self, unit: f64) -> Self {
        self.grid_unit = unit;
        self
    }

    pub fn with_footprint_radius(mut self, radius: f64) -> Self {
        self.footprint_radius = radius;
        self
    }

    pub fn with_sockets(mut self, sockets: impl IntoIterator<Item = PointSocket>) -> Self {
        self.sockets.extend(sockets);
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = EdgeSocket>) -> Self {
        self.edges.extend(edges);
        self
    }

    pub fn attaching_to(mut self, kinds: impl IntoIterator<Item = SocketKind>) -> Self {
        self.attaches_to.extend(kinds);
        self
    }

    /// The one place "is this a footprint" is decided.
    pub fn is_footprint(&self) -> bool {
        self.category == ShapeCategory::Footprint
    }

    pub fn is_roof(&self) -> bool {
        self.category == ShapeCategory::Roof
    }

    pub fn uses_edges(&self) -> bool {
        self.matching == MatchingMode::Edge
    }

    pub fn can_attach_to(&self, kind: SocketKind) -> bool {
        self.attaches_to.contains(&kind)
    }
}

/// Immutable catalog of shape definitions.
#[derive(Debug)]
pub struct ShapeRegistry {
    defs: HashMap<PieceKind, ShapeDef>,
}

static BUILTIN: LazyLock<ShapeRegistry> = LazyLock::new(ShapeRegistry::builtin);

impl ShapeRegistry {
    /// The built-in catalog, constructed once on first use.
    pub fn global() -> &'static ShapeRegistry {
        &BUILTIN
    }

    fn builtin() -> Self {
        Self::from_definitions(builtin_definitions())
    }

    /// Builds a registry from a list of definitions. A later entry for the
    /// same kind replaces an earlier one.
    pub fn from_definitions(defs: impl IntoIterator<Item = ShapeDef>) -> Self {
        Self {
            defs: defs.into_iter().map(|def| (def.kind, def)).collect(),
        }
    }

    /// Looks up a kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` has no definition. Every kind is registered in the
    /// built-in catalog, so this only fires when a new kind was added without
    /// its shape data.
    pub fn definition_for(&self, kind: PieceKind) -> &ShapeDef {
        match self.defs.get(&kind) {
            Some(def) => def,
            None => panic!("piece kind `{}` has no shape definition registered", kind),
        }
    }

    pub fn try_definition_for(&self, kind: PieceKind) -> Option<&ShapeDef> {
        self.defs.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// Shape definition of `kind` from the built-in catalog.
///
/// # Panics
///
/// See [`ShapeRegistry::definition_for`].
pub fn definition_for(kind: PieceKind) -> &'static ShapeDef {
    ShapeRegistry::global().definition_for(kind)
}

/// Every built-in definition, footprints first.
pub fn builtin_definitions() -> Vec<ShapeDef> {
    footprint::definitions()
        .into_iter()
        .chain(attached::definitions())
        .collect()
}
