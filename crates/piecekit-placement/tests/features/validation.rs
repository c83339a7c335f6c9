use approx::assert_relative_eq;
use nalgebra::Point3;
use piecekit_placement::{
    compute_placement, PieceKind, PlacedPiece, PlacementValidator, ShapeRegistry, SnapSource,
};
use piecekit_settings::SnapSettings;

#[test]
fn test_exact_duplicate_is_invalid() {
    let settings = SnapSettings::default();
    let registry = ShapeRegistry::global();
    let validator = PlacementValidator::new(registry, &settings);
    let square = registry.definition_for(PieceKind::SquareFoundation);

    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(1.0, 0.2, 1.0), 0.0);
    let same = base.position;
    let scene = [base];
    assert!(!validator.is_valid(square, &same, true, &scene));
    assert!(!validator.is_valid(square, &same, false, &scene));
}

#[test]
fn test_foundation_inside_structure_overlaps() {
    let block = PlacedPiece::new(PieceKind::SquareStructure, Point3::new(2.0, 0.5, 2.0), 0.0);
    let pieces = [block];

    // Edge lengths differ, so this lands on the grid inside the block.
    let inside = compute_placement(
        Some(Point3::new(2.5, 0.0, 2.5)),
        &pieces,
        PieceKind::SquareFoundation,
        0.0,
    );
    assert_eq!(inside.source, SnapSource::Grid);
    assert!(!inside.is_valid);

    let clear = compute_placement(
        Some(Point3::new(1.5, 0.0, 7.5)),
        &pieces,
        PieceKind::SquareFoundation,
        0.0,
    );
    assert_eq!(clear.source, SnapSource::Grid);
    assert!(clear.is_valid);
}

#[test]
fn test_roof_without_support_is_invalid() {
    for kind in [PieceKind::SlopedRoof, PieceKind::FlatRoof] {
        let result = compute_placement(Some(Point3::new(3.0, 0.0, 3.0)), &[], kind, 0.0);
        assert_eq!(result.source, SnapSource::Grid);
        assert!(!result.is_valid);
    }
}

#[test]
fn test_roof_beside_a_slab_is_still_unsupported() {
    let slab = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(1.0, 0.2, 1.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(1.0, 0.0, 2.5)),
        &[slab],
        PieceKind::FlatRoof,
        0.0,
    );
    assert!(!result.is_valid);
}

#[test]
fn test_wall_on_occupied_spot_is_invalid() {
    let slab = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(0.0, 0.2, 0.0), 0.0);
    let wall = PlacedPiece::new(PieceKind::Wall, Point3::new(0.0, 0.4, 1.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(0.0, 0.4, 1.1)),
        &[slab, wall],
        PieceKind::Wall,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Socket);
    assert!(!result.is_valid);
}

#[test]
fn test_small_footprint_inside_structure_is_invalid() {
    let block = PlacedPiece::new(PieceKind::SquareStructure, Point3::new(2.0, 0.5, 2.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(1.2, 0.0, 1.2)),
        &[block],
        PieceKind::TriangleFoundation,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Grid);
    assert_relative_eq!(result.position, Point3::new(1.0, 0.2, 1.0), epsilon = 1e-12);
    assert!(!result.is_valid);
}

#[test]
fn test_structure_flush_beside_foundation_is_valid() {
    // The slab spans x 4..6; the block lands on x 0..4.
    let slab = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(5.0, 0.2, 1.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(1.0, 0.0, 1.0)),
        &[slab],
        PieceKind::SquareStructure,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Grid);
    assert_relative_eq!(result.position, Point3::new(2.0, 0.5, 2.0), epsilon = 1e-12);
    assert!(result.is_valid);
}
