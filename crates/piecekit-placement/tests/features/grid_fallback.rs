use approx::assert_relative_eq;
use nalgebra::Point3;
use piecekit_placement::{
    compute_placement, PieceKind, PlacedPiece, PlacementEngine, PlacementRequest, SnapSource,
};
use std::f64::consts::{FRAC_PI_3, PI};

#[test]
fn test_far_from_scene_falls_back_to_grid() {
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(1.0, 0.2, 1.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(10.3, 0.0, -6.9)),
        &[base],
        PieceKind::SquareFoundation,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Grid);
    assert!(result.reference_height.is_none());
    assert_relative_eq!(result.position, Point3::new(11.0, 0.2, -7.0), epsilon = 1e-12);
}

#[test]
fn test_grid_yaw_follows_manual_rotation() {
    let result = compute_placement(
        Some(Point3::new(0.5, 0.0, 0.5)),
        &[],
        PieceKind::TriangleFoundation,
        2.0 * PI + 1.1,
    );
    assert_relative_eq!(result.yaw, FRAC_PI_3, epsilon = 1e-9);
}

#[test]
fn test_structures_use_their_own_unit() {
    let result = compute_placement(
        Some(Point3::new(4.5, 0.0, 0.5)),
        &[],
        PieceKind::SquareStructure,
        0.0,
    );
    assert_relative_eq!(result.position, Point3::new(6.0, 0.5, 2.0), epsilon = 1e-12);
}

#[test]
fn test_manual_height_is_ignored_when_matched() {
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), 0.0);
    let pieces = [base];
    let request = PlacementRequest::new(
        Some(Point3::new(0.0, 0.0, 2.5)),
        &pieces,
        PieceKind::SquareFoundation,
    )
    .with_manual_height(5.0);
    let result = PlacementEngine::default().compute_placement(&request);
    assert_eq!(result.source, SnapSource::Edge);
    assert_relative_eq!(result.position.y, 0.0, epsilon = 1e-12);
}
