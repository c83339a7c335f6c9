//! Local-to-World Transform
//!
//! Applies a placed piece's yaw then translation to the sockets and edges its
//! shape declares. Results are recomputed on every call and carry the owning
//! piece's id; nothing here is cached.

use nalgebra::{Point3, Rotation3, Vector3};
use piecekit_core::{normalize_angle, yaw_rotation, PieceId};
use serde::{Deserialize, Serialize};

use crate::kind::{EdgeRole, SocketKind};
use crate::piece::PlacedPiece;
use crate::registry::{EdgeSocket, PointSocket, ShapeDef, ShapeRegistry};

/// Rigid yaw-plus-translation transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawTransform {
    pub yaw: f64,
    pub translation: Vector3<f64>,
    rotation: Rotation3<f64>,
}

impl YawTransform {
    pub fn new(yaw: f64, translation: Vector3<f64>) -> Self {
        Self {
            yaw: normalize_angle(yaw),
            translation,
            rotation: yaw_rotation(yaw),
        }
    }

    /// Transform that places a piece's origin at `position` with `yaw`.
    pub fn placing(position: &Point3<f64>, yaw: f64) -> Self {
        Self::new(yaw, position.coords)
    }

    /// Transform of a placed piece. Pitch and roll are ignored.
    pub fn of_piece(piece: &PlacedPiece) -> Self {
        Self::placing(&piece.position, piece.yaw())
    }

    pub fn rotation(&self) -> &Rotation3<f64> {
        &self.rotation
    }

    pub fn apply_point(&self, p: &Point3<f64>) -> Point3<f64> {
        self.rotation * p + self.translation
    }

    pub fn apply_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * v
    }

    pub fn invert_point(&self, p: &Point3<f64>) -> Point3<f64> {
        self.rotation.inverse_transform_point(&(p - self.translation))
    }

    pub fn invert_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation.inverse_transform_vector(v)
    }

    /// World position of the transformed origin.
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.translation)
    }
}

/// A point socket in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPointSocket {
    pub owner: PieceId,
    pub kind: SocketKind,
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

/// An edge socket in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldEdgeSocket {
    pub owner: PieceId,
    pub kind: SocketKind,
    pub role: EdgeRole,
    pub start: Point3<f64>,
    pub center: Point3<f64>,
    pub end: Point3<f64>,
    pub length: f64,
}

impl WorldEdgeSocket {
    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }
}

/// Transforms one local socket.
pub fn transform_socket(
    t: &YawTransform,
    owner: PieceId,
    socket: &PointSocket,
) -> WorldPointSocket {
    WorldPointSocket {
        owner,
        kind: socket.kind,
        position: t.apply_point(&socket.position),
        normal: t.apply_vector(&socket.normal),
    }
}

/// Transforms one local edge. The world center is the transformed local center,
/// which stays the exact midpoint up to rounding.
pub fn transform_edge(t: &YawTransform, owner: PieceId, edge: &EdgeSocket) -> WorldEdgeSocket {
    WorldEdgeSocket {
        owner,
        kind: edge.kind,
        role: edge.role,
        start: t.apply_point(&edge.start),
        center: t.apply_point(&edge.center),
        end: t.apply_point(&edge.end),
        length: edge.length,
    }
}

/// World point sockets of `piece` under an explicit shape definition.
pub fn world_sockets_with(def: &ShapeDef, piece: &PlacedPiece) -> Vec<WorldPointSocket> {
    let t = YawTransform::of_piece(piece);
    def.sockets
        .iter()
        .map(|s| transform_socket(&t, piece.id, s))
        .collect()
}

/// World edge sockets of `piece` under an explicit shape definition.
pub fn world_edges_with(def: &ShapeDef, piece: &PlacedPiece) -> Vec<WorldEdgeSocket> {
    let t = YawTransform::of_piece(piece);
    def.edges
        .iter()
        .map(|e| transform_edge(&t, piece.id, e))
        .collect()
}

/// World point sockets of `piece`, looked up in `registry`.
pub fn world_sockets_in(registry: &ShapeRegistry, piece: &PlacedPiece) -> Vec<WorldPointSocket> {
    world_sockets_with(registry.definition_for(piece.kind), piece)
}

/// World edge sockets of `piece`, looked up in `registry`.
pub fn world_edges_in(registry: &ShapeRegistry, piece: &PlacedPiece) -> Vec<WorldEdgeSocket> {
    world_edges_with(registry.definition_for(piece.kind), piece)
}

/// World point sockets of `piece` from the built-in catalog.
pub fn world_sockets(piece: &PlacedPiece) -> Vec<WorldPointSocket> {
    world_sockets_in(ShapeRegistry::global(), piece)
}

/// World edge sockets of `piece` from the built-in catalog.
pub fn world_edges(piece: &PlacedPiece) -> Vec<WorldEdgeSocket> {
    world_edges_in(ShapeRegistry::global(), piece)
}

/// Maps a world point back into `piece`'s local space.
pub fn world_to_local_point(piece: &PlacedPiece, p: &Point3<f64>) -> Point3<f64> {
    YawTransform::of_piece(piece).invert_point(p)
}

/// Maps a world edge back into `piece`'s local space.
pub fn world_to_local_edge(piece: &PlacedPiece, edge: &WorldEdgeSocket) -> EdgeSocket {
    let t = YawTransform::of_piece(piece);
    EdgeSocket::new(
        t.invert_point(&edge.start),
        t.invert_point(&edge.end),
        edge.kind,
        edge.role,
    )
}
