//! Footprint shapes: foundations and structures.
//!
//! Outlines are wound the same way for every footprint (left edge first when
//! seen from above with -Z ahead), so two neighbours traverse a shared edge in
//! opposite directions. Edges lie in the origin's horizontal plane; the
//! `FootprintTop` sockets sit on the top surface above each edge midpoint with
//! an outward horizontal normal.

use nalgebra::{Point3, Vector3};
use piecekit_core::constants::{
    FOUNDATION_THICKNESS, FOUNDATION_UNIT, QUARTER_TURN, SIXTH_TURN, STRUCTURE_HEIGHT,
    STRUCTURE_UNIT,
};

use super::{EdgeSocket, PointSocket, ShapeDef};
use crate::kind::{EdgeRole, MatchingMode, PieceKind, ShapeCategory, SocketKind};

pub(super) fn definitions() -> Vec<ShapeDef> {
    vec![
        square(PieceKind::SquareFoundation, FOUNDATION_UNIT, FOUNDATION_THICKNESS),
        triangle(PieceKind::TriangleFoundation, FOUNDATION_UNIT, FOUNDATION_THICKNESS),
        curved(PieceKind::CurvedFoundation, FOUNDATION_UNIT, FOUNDATION_THICKNESS),
        square(PieceKind::SquareStructure, STRUCTURE_UNIT, STRUCTURE_HEIGHT),
        triangle(PieceKind::TriangleStructure, STRUCTURE_UNIT, STRUCTURE_HEIGHT),
        curved(PieceKind::CurvedStructure, STRUCTURE_UNIT, STRUCTURE_HEIGHT),
    ]
}

fn square_corners(unit: f64) -> [(f64, f64); 4] {
    let h = unit / 2.0;
    [(-h, -h), (-h, h), (h, h), (h, -h)]
}

fn square(kind: PieceKind, unit: f64, height: f64) -> ShapeDef {
    let sides = [
        (0, 1, EdgeRole::Left),
        (1, 2, EdgeRole::Front),
        (2, 3, EdgeRole::Right),
        (3, 0, EdgeRole::Back),
    ];
    outline(kind, &square_corners(unit), &sides, height)
        .with_rotation_step(QUARTER_TURN)
        .with_grid_unit(unit)
        .with_footprint_radius(unit / 2.0)
}

/// Equilateral triangle with its centroid at the origin and base facing +Z.
fn triangle(kind: PieceKind, side: f64, height: f64) -> ShapeDef {
    let inradius = side * 3f64.sqrt() / 6.0;
    let corners = [
        (-side / 2.0, inradius),
        (side / 2.0, inradius),
        (0.0, -2.0 * inradius),
    ];
    let sides = [
        (0, 1, EdgeRole::Base),
        (1, 2, EdgeRole::Right),
        (2, 0, EdgeRole::Left),
    ];
    outline(kind, &corners, &sides, height)
        .with_rotation_step(SIXTH_TURN)
        .with_grid_unit(side)
        .with_footprint_radius(inradius)
}

/// Quarter disc pivoting on the (-X, -Z) corner of its bounding square.
/// Only the two straight sides connect; the arc does not.
fn curved(kind: PieceKind, unit: f64, height: f64) -> ShapeDef {
    let sides = [(0, 1, EdgeRole::Left), (3, 0, EdgeRole::Back)];
    outline(kind, &square_corners(unit), &sides, height)
        .with_rotation_step(QUARTER_TURN)
        .with_grid_unit(unit)
        .with_footprint_radius(unit / 2.0)
}

fn outline(
    kind: PieceKind,
    corners: &[(f64, f64)],
    sides: &[(usize, usize, EdgeRole)],
    height: f64,
) -> ShapeDef {
    let half = height / 2.0;
    let mut edges = Vec::with_capacity(sides.len());
    let mut tops = Vec::with_capacity(sides.len());

    for &(a, b, role) in sides {
        let start = Point3::new(corners[a].0, 0.0, corners[a].1);
        let end = Point3::new(corners[b].0, 0.0, corners[b].1);
        let edge = EdgeSocket::new(start, end, SocketKind::FootprintEdge, role);

        let dir = edge.direction();
        let outward = Vector3::new(-dir.z, 0.0, dir.x);
        let top = Point3::new(edge.center.x, half, edge.center.z);

        tops.push(PointSocket::new(top, outward, SocketKind::FootprintTop));
        edges.push(edge);
    }

    ShapeDef::new(kind, ShapeCategory::Footprint, MatchingMode::Edge)
        .with_vertical_offset(half)
        .with_edges(edges)
        .with_sockets(tops)
}
