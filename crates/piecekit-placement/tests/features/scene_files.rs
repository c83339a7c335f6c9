use nalgebra::Point3;
use piecekit_core::{Error, ShapeError};
use piecekit_placement::{compute_placement, PieceKind, PieceSet, PlacedPiece, SnapSource};

fn small_scene() -> PieceSet {
    let mut scene = PieceSet::new();
    scene.insert(PlacedPiece::new(PieceKind::SquareFoundation, Point3::new(1.0, 0.2, 1.0), 0.0));
    scene.insert(PlacedPiece::new(PieceKind::Wall, Point3::new(1.0, 0.4, 2.0), 0.0));
    scene.insert(PlacedPiece::new(PieceKind::Ramp, Point3::new(1.0, 0.0, -1.0), 3.0));
    scene
}

#[test]
fn test_saved_scene_reloads_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let scene = small_scene();

    scene.save_to_file(&path).unwrap();
    let loaded = PieceSet::load_from_file(&path).unwrap();

    assert_eq!(loaded.as_slice(), scene.as_slice());
}

#[test]
fn test_reloaded_scene_snaps_like_the_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let scene = small_scene();
    scene.save_to_file(&path).unwrap();
    let loaded = PieceSet::load_from_file(&path).unwrap();

    let cursor = Some(Point3::new(1.0, 0.0, 3.5));
    let before = compute_placement(cursor, scene.as_slice(), PieceKind::SquareFoundation, 0.0);
    let after = compute_placement(cursor, loaded.as_slice(), PieceKind::SquareFoundation, 0.0);
    assert_eq!(before.source, SnapSource::Edge);
    assert_eq!(before, after);
}

#[test]
fn test_unknown_kind_in_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let json = r#"{
        "version": 1,
        "pieces": [{
            "id": "8c5d6f4e-1c1e-4a7c-9b8e-2f4a5b6c7d8e",
            "kind": "hexagon_foundation",
            "position": [0.0, 0.2, 0.0],
            "yaw": 0.0
        }]
    }"#;
    std::fs::write(&path, json).unwrap();

    let err = PieceSet::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Shape(ShapeError::UnknownPieceKind { .. })));
}

#[test]
fn test_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();

    let missing = PieceSet::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, Error::Io(_)));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let broken = PieceSet::load_from_file(&path).unwrap_err();
    assert!(matches!(broken, Error::Json(_)));
}
