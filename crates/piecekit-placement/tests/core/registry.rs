use piecekit_placement::registry::{accepted_by, builtin_definitions};
use piecekit_placement::{
    definition_for, MatchingMode, NormalRelation, PieceKind, ShapeCategory, ShapeRegistry,
    SocketKind,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

#[test]
fn test_every_kind_has_a_definition() {
    let registry = ShapeRegistry::global();
    for kind in PieceKind::ALL {
        let def = registry.definition_for(kind);
        assert_eq!(def.kind, kind);
    }
}

#[test]
fn test_footprint_is_the_only_edge_category() {
    for kind in PieceKind::ALL {
        let def = definition_for(kind);
        let is_footprint = def.category == ShapeCategory::Footprint;
        assert_eq!(def.matching == MatchingMode::Edge, is_footprint, "{}", kind);
        assert_eq!(def.is_footprint(), is_footprint);
    }
}

#[test]
fn test_rotation_steps() {
    assert_eq!(definition_for(PieceKind::SquareFoundation).rotation_step, FRAC_PI_2);
    assert_eq!(definition_for(PieceKind::CurvedStructure).rotation_step, FRAC_PI_2);
    assert_eq!(definition_for(PieceKind::TriangleFoundation).rotation_step, FRAC_PI_3);
    assert_eq!(definition_for(PieceKind::TriangleStructure).rotation_step, FRAC_PI_3);
    assert_eq!(definition_for(PieceKind::Wall).rotation_step, FRAC_PI_2);
}

#[test]
fn test_roofs_are_roofs() {
    assert!(definition_for(PieceKind::SlopedRoof).is_roof());
    assert!(definition_for(PieceKind::FlatRoof).is_roof());
    assert!(!definition_for(PieceKind::Wall).is_roof());
}

#[test]
fn test_wall_accepts_footprint_top() {
    let wall = definition_for(PieceKind::Wall);
    assert!(wall.can_attach_to(SocketKind::FootprintTop));
    assert!(!wall.can_attach_to(SocketKind::FootprintEdge));
}

#[test]
fn test_custom_registry_replaces_entries() {
    let mut defs = builtin_definitions();
    let wall = defs.iter().position(|d| d.kind == PieceKind::Wall).unwrap();
    let mut taller = defs[wall].clone();
    taller.vertical_offset = 1.0;
    defs.push(taller);

    let registry = ShapeRegistry::from_definitions(defs);
    assert_eq!(registry.len(), PieceKind::ALL.len());
    assert_eq!(registry.definition_for(PieceKind::Wall).vertical_offset, 1.0);
}

#[test]
fn test_stacking_pairs_are_aligned() {
    let aligned: Vec<_> = accepted_by(SocketKind::WallTop)
        .iter()
        .filter(|entry| entry.relation == NormalRelation::Aligned)
        .map(|entry| entry.kind)
        .collect();
    assert!(aligned.contains(&SocketKind::WallBottom));
}
