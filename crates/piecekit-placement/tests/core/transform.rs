use approx::assert_relative_eq;
use nalgebra::Point3;
use piecekit_placement::{
    definition_for, world_edges, world_sockets, world_to_local_edge, world_to_local_point,
    PieceKind, PlacedPiece,
};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

proptest! {
    #[test]
    fn prop_world_edges_invert_to_local(
        kind in any_kind(),
        x in -50.0..50.0f64,
        y in -5.0..5.0f64,
        z in -50.0..50.0f64,
        yaw in -10.0..10.0f64,
    ) {
        let piece = PlacedPiece::new(kind, Point3::new(x, y, z), yaw);
        let def = definition_for(kind);
        let world = world_edges(&piece);
        prop_assert_eq!(world.len(), def.edges.len());

        for (local, edge) in def.edges.iter().zip(&world) {
            let back = world_to_local_edge(&piece, edge);
            prop_assert!((back.start - local.start).norm() < 1e-9);
            prop_assert!((back.center - local.center).norm() < 1e-9);
            prop_assert!((back.end - local.end).norm() < 1e-9);
            prop_assert!((back.length - local.length).abs() < 1e-9);
            prop_assert_eq!(back.role, local.role);
        }
    }

    #[test]
    fn prop_world_sockets_invert_to_local(
        kind in any_kind(),
        x in -50.0..50.0f64,
        z in -50.0..50.0f64,
        yaw in -10.0..10.0f64,
    ) {
        let piece = PlacedPiece::new(kind, Point3::new(x, 0.0, z), yaw);
        let def = definition_for(kind);
        for (local, socket) in def.sockets.iter().zip(world_sockets(&piece)) {
            let back = world_to_local_point(&piece, &socket.position);
            prop_assert!((back - local.position).norm() < 1e-9);
            prop_assert!((socket.normal.norm() - local.normal.norm()).abs() < 1e-9);
            prop_assert_eq!(socket.owner, piece.id);
        }
    }
}

#[test]
fn test_recomputed_after_move() {
    let mut piece = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), 0.0);
    let before = world_edges(&piece);
    piece.position = Point3::new(10.0, 0.0, 0.0);
    let after = world_edges(&piece);
    for (a, b) in before.iter().zip(&after) {
        assert_relative_eq!(b.center.x - a.center.x, 10.0, epsilon = 1e-12);
    }
}

#[test]
fn test_tilt_is_ignored() {
    let flat = PlacedPiece::new(PieceKind::Wall, Point3::origin(), 0.3);
    let mut tilted = flat.clone();
    tilted.rotation.x = 0.5;
    tilted.rotation.z = -0.2;
    assert_eq!(world_sockets(&flat), world_sockets(&tilted));
}
