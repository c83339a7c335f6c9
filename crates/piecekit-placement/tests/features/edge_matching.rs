use approx::assert_relative_eq;
use nalgebra::{distance, Point3};
use piecekit_placement::{
    compute_placement, world_edges, CandidateRecorder, CandidateStatus, PieceKind, PlacedPiece,
    PlacementEngine, PlacementRequest, SnapSource,
};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_square_chain_along_x() {
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(0.0, 0.2, 0.0), 0.0);
    let result = compute_placement(
        Some(Point3::new(2.4, 0.0, 0.1)),
        &[base],
        PieceKind::SquareFoundation,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Edge);
    assert!(result.is_valid);
    assert_relative_eq!(result.position, Point3::new(2.0, 0.2, 0.0), epsilon = 1e-9);
    assert_relative_eq!(result.reference_height.unwrap(), 0.2, epsilon = 1e-12);
}

#[test]
fn test_rotated_base_still_joins_edge_to_edge() {
    let base = PlacedPiece::new(PieceKind::SquareStructure, Point3::new(5.0, 0.5, 5.0), 0.4);
    let front = world_edges(&base)[1];
    let outward = (front.center - base.position).normalize();
    let cursor = front.center + outward * 1.0;

    let result = compute_placement(Some(cursor), &[base.clone()], PieceKind::SquareStructure, 0.4);
    assert_eq!(result.source, SnapSource::Edge);
    let expected = base.position + outward * 4.0;
    assert_relative_eq!(result.position, expected, epsilon = 1e-9);
    assert_relative_eq!(result.yaw, 0.4, epsilon = 1e-9);
}

#[test]
fn test_triangle_between_square_foundations() {
    // Same edge length: a triangle foundation can join a square foundation.
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), 0.0);
    let result = compute_placement(
        Some(Point3::new(0.0, 0.0, 1.5)),
        &[base],
        PieceKind::TriangleFoundation,
        0.0,
    );
    assert_eq!(result.source, SnapSource::Edge);
    let inradius = 2.0 * 3f64.sqrt() / 6.0;
    assert_relative_eq!(result.position, Point3::new(0.0, 0.0, 1.0 + inradius), epsilon = 1e-9);
}

#[test]
fn test_curved_foundation_joins_on_straight_sides() {
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), 0.0);
    let engine = PlacementEngine::default();
    let pieces = [base];
    let request = PlacementRequest::new(
        Some(Point3::new(0.0, 0.0, 2.5)),
        &pieces,
        PieceKind::CurvedFoundation,
    );
    let mut recorder = CandidateRecorder::new();
    let result = engine.compute_placement_observed(&request, &mut recorder);
    assert_eq!(result.source, SnapSource::Edge);
    assert_relative_eq!(result.position, Point3::new(0.0, 0.0, 2.0), epsilon = 1e-9);
    // Only two straight edges exist to try.
    assert_eq!(recorder.accepted_edges().count(), 2);
}

#[test]
fn test_filling_a_gap_skips_occupied_edges() {
    let left = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(-2.0, 0.0, 0.0), 0.0);
    let right = PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(0.0, 0.0, 0.0), 0.0);
    let pieces = [left, right];

    let request = PlacementRequest::new(
        Some(Point3::new(-1.0, 0.0, 0.0)),
        &pieces,
        PieceKind::SquareFoundation,
    );
    let mut recorder = CandidateRecorder::new();
    PlacementEngine::default().compute_placement_observed(&request, &mut recorder);

    let occupied = recorder
        .edge_candidates
        .iter()
        .filter(|c| matches!(c.status, CandidateStatus::Occupied { .. }))
        .count();
    assert_eq!(occupied, 2);
}

#[test]
fn test_result_varies_continuously_past_a_corner() {
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), 0.0);
    let pieces = [base];
    let mut last = None;
    for step in 0..=20 {
        let t = step as f64 / 20.0;
        let cursor = Point3::new(0.8 + t * 2.0, 0.0, 2.5 - t * 2.0);
        let result = compute_placement(Some(cursor), &pieces, PieceKind::SquareFoundation, 0.0);
        assert_eq!(result.source, SnapSource::Edge);
        // Only the two neighbouring cells are ever chosen.
        let front = distance(&result.position, &Point3::new(0.0, 0.0, 2.0)) < 1e-9;
        let side = distance(&result.position, &Point3::new(2.0, 0.0, 0.0)) < 1e-9;
        assert!(front || side, "unexpected {:?}", result.position);
        if let Some(prev) = last {
            // Once the side cell wins it keeps winning as the cursor moves on.
            if prev {
                assert!(side);
            }
        }
        last = Some(side);
    }
}

#[test]
fn test_quarter_turned_base() {
    let base = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), FRAC_PI_2);
    let result = compute_placement(
        Some(Point3::new(0.0, 0.0, -2.4)),
        &[base],
        PieceKind::SquareFoundation,
        FRAC_PI_2,
    );
    assert_relative_eq!(result.position, Point3::new(0.0, 0.0, -2.0), epsilon = 1e-9);
    assert_relative_eq!(result.yaw, FRAC_PI_2, epsilon = 1e-9);
}
