//! Socket compatibility table.
//!
//! Keyed by the socket on the already-placed piece: each entry lists which
//! pending socket kinds that target accepts and how their normals must relate.
//! Matchers only ever query in this direction.

use crate::kind::{NormalRelation, SocketKind};

/// One accepted pending socket kind and its normal relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Compatibility {
    pub kind: SocketKind,
    pub relation: NormalRelation,
}

impl Compatibility {
    const fn opposing(kind: SocketKind) -> Self {
        Self {
            kind,
            relation: NormalRelation::Opposing,
        }
    }

    const fn aligned(kind: SocketKind) -> Self {
        Self {
            kind,
            relation: NormalRelation::Aligned,
        }
    }
}

const FOOTPRINT_EDGE: &[Compatibility] = &[Compatibility::opposing(SocketKind::FootprintEdge)];

const FOOTPRINT_TOP: &[Compatibility] = &[
    Compatibility::aligned(SocketKind::WallBottom),
    Compatibility::opposing(SocketKind::InclineTop),
];

const WALL_TOP: &[Compatibility] = &[
    Compatibility::aligned(SocketKind::WallBottom),
    Compatibility::aligned(SocketKind::RoofEave),
    Compatibility::aligned(SocketKind::RoofEdge),
];

const WALL_END: &[Compatibility] = &[Compatibility::opposing(SocketKind::WallEnd)];

const ROOF_RIDGE: &[Compatibility] = &[Compatibility::opposing(SocketKind::RoofRidge)];

const ROOF_EDGE: &[Compatibility] = &[Compatibility::opposing(SocketKind::RoofEdge)];

const INCLINE_BOTTOM: &[Compatibility] = &[Compatibility::opposing(SocketKind::InclineTop)];

/// Pending socket kinds accepted by a placed socket of kind `target`.
pub fn accepted_by(target: SocketKind) -> &'static [Compatibility] {
    match target {
        SocketKind::FootprintEdge => FOOTPRINT_EDGE,
        SocketKind::FootprintTop => FOOTPRINT_TOP,
        SocketKind::WallTop => WALL_TOP,
        SocketKind::WallEnd => WALL_END,
        SocketKind::RoofRidge => ROOF_RIDGE,
        SocketKind::RoofEdge => ROOF_EDGE,
        SocketKind::InclineBottom => INCLINE_BOTTOM,
        SocketKind::WallBottom | SocketKind::RoofEave | SocketKind::InclineTop => &[],
    }
}

/// Relation required when a pending `pending` socket joins a placed `target`
/// socket, or `None` if the target does not accept it.
pub fn relation_between(target: SocketKind, pending: SocketKind) -> Option<NormalRelation> {
    accepted_by(target)
        .iter()
        .find(|entry| entry.kind == pending)
        .map(|entry| entry.relation)
}
