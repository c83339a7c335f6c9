use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use piecekit_core::angle_difference;
use piecekit_placement::registry::builtin_definitions;
use piecekit_placement::{
    compute_placement, CandidateRecorder, MatchingMode, PieceKind, PlacedPiece,
    PlacementEngine, PlacementRequest, PointSocket, ShapeCategory, ShapeDef, ShapeRegistry,
    SnapSource, SocketKind,
};
use piecekit_settings::SnapSettings;
use std::f64::consts::{FRAC_PI_2, PI};

fn slab() -> PlacedPiece {
    PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(0.0, 0.2, 0.0), 0.0)
}

#[test]
fn test_wall_on_each_side_of_a_slab() {
    let pieces = [slab()];
    let sides = [
        (Point3::new(0.0, 0.4, 1.0), 0.0),
        (Point3::new(1.0, 0.4, 0.0), FRAC_PI_2),
        (Point3::new(0.0, 0.4, -1.0), PI),
        (Point3::new(-1.0, 0.4, 0.0), -FRAC_PI_2),
    ];
    for (cursor, yaw) in sides {
        let result = compute_placement(Some(cursor), &pieces, PieceKind::Wall, yaw);
        assert_eq!(result.source, SnapSource::Socket);
        assert!(result.is_valid);
        assert_relative_eq!(result.position, cursor, epsilon = 1e-9);
        assert_relative_eq!(angle_difference(result.yaw, yaw), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_sloped_roof_on_wall_top() {
    let wall = PlacedPiece::new(PieceKind::Wall, Point3::new(0.0, 0.4, 1.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(0.0, 2.4, 0.8)),
        &[slab(), wall],
        PieceKind::SlopedRoof,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Socket);
    assert!(result.is_valid);
    assert_relative_eq!(result.position, Point3::new(0.0, 2.4, 1.0), epsilon = 1e-9);
    assert_relative_eq!(result.reference_height.unwrap(), 2.4, epsilon = 1e-9);
}

#[test]
fn test_sloped_roofs_meet_at_ridge() {
    let roof = PlacedPiece::new(PieceKind::SlopedRoof, Point3::new(0.0, 2.4, 1.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(0.0, 3.0, -1.5)),
        &[roof],
        PieceKind::SlopedRoof,
        PI,
    );
    assert_eq!(result.source, SnapSource::Socket);
    // Mirrored across the ridge line at z = -1.
    assert_relative_eq!(result.position, Point3::new(0.0, 2.4, -3.0), epsilon = 1e-9);
    assert_relative_eq!(angle_difference(result.yaw, PI), 0.0, epsilon = 1e-9);
}

#[test]
fn test_ramp_climbs_to_slab_top() {
    let result = compute_placement(
        Some(Point3::new(0.0, 0.0, 2.0)),
        &[slab()],
        PieceKind::Ramp,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Socket);
    assert_relative_eq!(result.position, Point3::new(0.0, 0.0, 2.0), epsilon = 1e-9);
    assert_relative_eq!(result.yaw, 0.0, epsilon = 1e-9);
}

#[test]
fn test_raised_cursor_prefers_stacking() {
    // The side-by-side join lands nearer the cursor, but the cursor is
    // raised, so the top socket's bonus wins.
    let wall = PlacedPiece::new(PieceKind::Wall, Point3::origin(), 0.0);
    let result = compute_placement(
        Some(Point3::new(1.5, 1.3, 0.0)),
        &[wall],
        PieceKind::Wall,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Socket);
    assert_relative_eq!(result.position, Point3::new(0.0, 2.0, 0.0), epsilon = 1e-9);
}

#[test]
fn test_socket_candidates_are_reported() {
    let pieces = [slab()];
    let request = PlacementRequest::new(Some(Point3::new(0.0, 0.4, 1.0)), &pieces, PieceKind::Wall);
    let mut recorder = CandidateRecorder::new();
    let result = PlacementEngine::default().compute_placement_observed(&request, &mut recorder);

    assert!(recorder.edge_candidates.is_empty());
    assert_eq!(recorder.socket_candidates.len(), 4);
    let best = recorder
        .accepted_sockets()
        .min_by(|a, b| a.status.score().partial_cmp(&b.status.score()).unwrap())
        .unwrap();
    assert_eq!(best.position, Some(result.position));
}

#[test]
fn test_vertical_normals_take_manual_yaw() {
    // A hatch lying flat on a wall top, both normals vertical.
    let hatch = ShapeDef::new(PieceKind::FlatRoof, ShapeCategory::Roof, MatchingMode::Point)
        .with_sockets([PointSocket::new(
            Point3::origin(),
            -Vector3::y(),
            SocketKind::RoofEave,
        )])
        .attaching_to([SocketKind::WallTop]);
    let post = ShapeDef::new(PieceKind::Wall, ShapeCategory::Wall, MatchingMode::Point)
        .with_sockets([PointSocket::new(
            Point3::new(0.0, 2.0, 0.0),
            Vector3::y(),
            SocketKind::WallTop,
        )]);
    let defs = builtin_definitions()
        .into_iter()
        .chain([hatch, post]);
    let registry = ShapeRegistry::from_definitions(defs);
    let engine = PlacementEngine::with_registry(&registry, SnapSettings::default());

    let pieces = [PlacedPiece::new(PieceKind::Wall, Point3::origin(), 0.0)];
    let cursor = Some(Point3::new(0.0, 1.5, 0.0));
    let request = PlacementRequest::new(cursor, &pieces, PieceKind::FlatRoof).with_manual_yaw(1.3);
    let result = engine.compute_placement(&request);

    assert_eq!(result.source, SnapSource::Socket);
    assert_relative_eq!(result.position, Point3::new(0.0, 2.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(result.yaw, FRAC_PI_2, epsilon = 1e-9);
}
