//! Attached shapes: walls, roofs and inclines.
//!
//! These pieces connect through single point sockets. Their origin is the
//! bottom centre (or the eave centre for sloped roofs), so a resolved socket
//! position is already the height the piece rests at.

use nalgebra::{Point3, Vector3};
use piecekit_core::constants::{
    HALF_WALL_HEIGHT, INCLINE_RISE, INCLINE_RUN, ROOF_RISE, ROOF_RUN, WALL_HEIGHT, WALL_LENGTH,
};

use super::{PointSocket, ShapeDef};
use crate::kind::{MatchingMode, PieceKind, ShapeCategory, SocketKind};

pub(super) fn definitions() -> Vec<ShapeDef> {
    vec![
        wall(PieceKind::Wall, WALL_HEIGHT),
        wall(PieceKind::HalfWall, HALF_WALL_HEIGHT),
        wall(PieceKind::Doorway, WALL_HEIGHT),
        wall(PieceKind::Window, WALL_HEIGHT),
        sloped_roof(),
        flat_roof(),
        incline(PieceKind::Ramp),
        incline(PieceKind::Stairs),
    ]
}

fn socket(x: f64, y: f64, z: f64, normal: Vector3<f64>, kind: SocketKind) -> PointSocket {
    PointSocket::new(Point3::new(x, y, z), normal, kind)
}

/// Wall panel lying along X, facing +Z.
fn wall(kind: PieceKind, height: f64) -> ShapeDef {
    let half = WALL_LENGTH / 2.0;
    ShapeDef::new(kind, ShapeCategory::Wall, MatchingMode::Point)
        .with_grid_unit(WALL_LENGTH)
        .with_sockets([
            socket(0.0, 0.0, 0.0, Vector3::z(), SocketKind::WallBottom),
            socket(0.0, height, 0.0, Vector3::z(), SocketKind::WallTop),
            socket(-half, height / 2.0, 0.0, -Vector3::x(), SocketKind::WallEnd),
            socket(half, height / 2.0, 0.0, Vector3::x(), SocketKind::WallEnd),
        ])
        .attaching_to([
            SocketKind::FootprintTop,
            SocketKind::WallTop,
            SocketKind::WallEnd,
        ])
}

/// Single-pitch panel rising from its eave toward -Z.
fn sloped_roof() -> ShapeDef {
    ShapeDef::new(PieceKind::SlopedRoof, ShapeCategory::Roof, MatchingMode::Point)
        .with_grid_unit(ROOF_RUN)
        .with_sockets([
            socket(0.0, 0.0, 0.0, Vector3::z(), SocketKind::RoofEave),
            socket(0.0, ROOF_RISE, -ROOF_RUN, -Vector3::z(), SocketKind::RoofRidge),
        ])
        .attaching_to([SocketKind::WallTop, SocketKind::RoofRidge])
}

fn flat_roof() -> ShapeDef {
    let half = ROOF_RUN / 2.0;
    ShapeDef::new(PieceKind::FlatRoof, ShapeCategory::Roof, MatchingMode::Point)
        .with_grid_unit(ROOF_RUN)
        .with_sockets([
            socket(0.0, 0.0, half, Vector3::z(), SocketKind::RoofEdge),
            socket(half, 0.0, 0.0, Vector3::x(), SocketKind::RoofEdge),
            socket(0.0, 0.0, -half, -Vector3::z(), SocketKind::RoofEdge),
            socket(-half, 0.0, 0.0, -Vector3::x(), SocketKind::RoofEdge),
        ])
        .attaching_to([SocketKind::WallTop, SocketKind::RoofEdge])
}

/// Ramp or stairs climbing toward -Z.
fn incline(kind: PieceKind) -> ShapeDef {
    let half = INCLINE_RUN / 2.0;
    ShapeDef::new(kind, ShapeCategory::Incline, MatchingMode::Point)
        .with_grid_unit(INCLINE_RUN)
        .with_sockets([
            socket(0.0, INCLINE_RISE, -half, -Vector3::z(), SocketKind::InclineTop),
            socket(0.0, 0.0, half, Vector3::z(), SocketKind::InclineBottom),
        ])
        .attaching_to([SocketKind::FootprintTop, SocketKind::InclineBottom])
}
