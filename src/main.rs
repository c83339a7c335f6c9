use std::path::PathBuf;

use nalgebra::Point3;
use piecekit::{
    init_logging, load_config, PieceKind, PieceSet, PlacementEngine, PlacementRequest, BUILD_DATE,
    VERSION,
};
use tracing::{info, warn};

/// One scripted click: the piece to place, where the cursor is, and the
/// accumulated manual rotation.
struct Step {
    kind: PieceKind,
    cursor: Point3<f64>,
    manual_yaw: f64,
}

impl Step {
    fn new(kind: PieceKind, x: f64, y: f64, z: f64) -> Self {
        Self {
            kind,
            cursor: Point3::new(x, y, z),
            manual_yaw: 0.0,
        }
    }

    fn turned(mut self, yaw: f64) -> Self {
        self.manual_yaw = yaw;
        self
    }
}

/// A two-slab floor, a wall, a roof on the wall, a ramp up to the floor, and
/// a few placements that should be refused.
fn script() -> Vec<Step> {
    vec![
        Step::new(PieceKind::SquareFoundation, 0.5, 0.0, 0.5),
        Step::new(PieceKind::SquareFoundation, 3.3, 0.0, 1.0),
        Step::new(PieceKind::SquareFoundation, 1.0, 0.0, 1.0),
        Step::new(PieceKind::TriangleFoundation, 1.0, 0.0, 2.6),
        Step::new(PieceKind::Wall, 3.0, 0.4, 2.1),
        Step::new(PieceKind::SlopedRoof, 3.0, 2.4, 1.9),
        Step::new(PieceKind::FlatRoof, 12.0, 0.0, 12.0),
        Step::new(PieceKind::Ramp, 1.0, 0.0, -1.2).turned(std::f64::consts::PI),
        Step::new(PieceKind::TriangleStructure, 2.0, 0.0, 2.5),
    ]
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let scene_path = args.next().map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    init_logging(&config.logging)?;
    info!(version = VERSION, build_date = BUILD_DATE, "PieceKit placement demo");

    let engine = PlacementEngine::new(config.snapping.clone());
    let mut scene = PieceSet::new();

    for step in script() {
        let request = PlacementRequest::new(Some(step.cursor), scene.as_slice(), step.kind)
            .with_manual_yaw(step.manual_yaw);
        let result = engine.compute_placement(&request);

        match result.to_piece(step.kind) {
            Some(piece) => {
                info!(
                    kind = %step.kind,
                    source = ?result.source,
                    position = ?result.position,
                    yaw = result.yaw,
                    reference_height = ?result.reference_height,
                    "placed"
                );
                scene.insert(piece);
            }
            None => warn!(
                kind = %step.kind,
                source = ?result.source,
                position = ?result.position,
                "placement refused"
            ),
        }
    }

    info!(pieces = scene.len(), "scene complete");

    if let Some(path) = scene_path {
        scene.save_to_file(&path)?;
        info!(path = %path.display(), "scene written");
    }
    Ok(())
}
