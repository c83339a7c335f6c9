//! # PieceKit Placement
//!
//! Works out where a pending construction piece goes and whether it may be
//! placed there, given the cursor's ground point and the pieces already in
//! the scene.
//!
//! ## Tiers
//!
//! 1. **Edge matching** for footprint shapes (foundations, structures):
//!    edges are segments checked at start, center and end after one yaw solve.
//! 2. **Socket matching** for walls, roofs and inclines: a point and outward
//!    normal per socket, with opposing or aligned normals per socket pair.
//! 3. **Grid fallback** when nothing is in range.
//!
//! The [`PlacementValidator`] then rules on overlaps and unsupported roofs.
//!
//! ## Example
//!
//! ```
//! use piecekit_placement::{compute_placement, PieceKind, PlacedPiece, SnapSource};
//! use nalgebra::Point3;
//!
//! let slab = PlacedPiece::new(PieceKind::SquareFoundation, Point3::origin(), 0.0);
//! let result = compute_placement(
//!     Some(Point3::new(0.0, 0.0, 2.5)),
//!     &[slab],
//!     PieceKind::SquareFoundation,
//!     0.0,
//! );
//! assert_eq!(result.source, SnapSource::Edge);
//! assert!(result.is_valid);
//! ```

pub mod edge_matcher;
pub mod engine;
pub mod grid;
pub mod kind;
pub mod observer;
pub mod piece;
pub mod registry;
pub mod scene;
pub mod socket_matcher;
pub mod transform;
pub mod validator;

pub use edge_matcher::{EdgeMatch, EdgeMatcher};
pub use engine::{compute_placement, PlacementEngine, PlacementRequest, SnapResult, SnapSource};
pub use grid::{snap_to_grid, GridPlacement};
pub use kind::{EdgeRole, MatchingMode, NormalRelation, PieceKind, ShapeCategory, SocketKind};
pub use observer::{
    CandidateRecorder, CandidateStatus, EdgeCandidate, NoopObserver, PlacementObserver,
    SocketCandidate,
};
pub use piece::{PieceSet, PlacedPiece};
pub use registry::{definition_for, EdgeSocket, PointSocket, ShapeDef, ShapeRegistry};
pub use scene::{PieceRecord, SceneFile, SCENE_FORMAT_VERSION};
pub use socket_matcher::{SocketMatch, SocketMatcher};
pub use transform::{
    world_edges, world_sockets, world_to_local_edge, world_to_local_point, WorldEdgeSocket,
    WorldPointSocket, YawTransform,
};
pub use validator::{PlacementValidator, CLEARANCE};
