//! Tags identifying shape families, socket types, and their relationships.

use piecekit_core::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape family of a piece. Used only as a registry lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    SquareFoundation,
    TriangleFoundation,
    CurvedFoundation,
    SquareStructure,
    TriangleStructure,
    CurvedStructure,
    Wall,
    HalfWall,
    Doorway,
    Window,
    SlopedRoof,
    FlatRoof,
    Ramp,
    Stairs,
}

impl PieceKind {
    /// Every kind, in declaration order.
    pub const ALL: [PieceKind; 14] = [
        PieceKind::SquareFoundation,
        PieceKind::TriangleFoundation,
        PieceKind::CurvedFoundation,
        PieceKind::SquareStructure,
        PieceKind::TriangleStructure,
        PieceKind::CurvedStructure,
        PieceKind::Wall,
        PieceKind::HalfWall,
        PieceKind::Doorway,
        PieceKind::Window,
        PieceKind::SlopedRoof,
        PieceKind::FlatRoof,
        PieceKind::Ramp,
        PieceKind::Stairs,
    ];

    /// Stable snake_case tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SquareFoundation => "square_foundation",
            Self::TriangleFoundation => "triangle_foundation",
            Self::CurvedFoundation => "curved_foundation",
            Self::SquareStructure => "square_structure",
            Self::TriangleStructure => "triangle_structure",
            Self::CurvedStructure => "curved_structure",
            Self::Wall => "wall",
            Self::HalfWall => "half_wall",
            Self::Doorway => "doorway",
            Self::Window => "window",
            Self::SlopedRoof => "sloped_roof",
            Self::FlatRoof => "flat_roof",
            Self::Ramp => "ramp",
            Self::Stairs => "stairs",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ShapeError::UnknownPieceKind { name: s.to_string() })
    }
}

/// Broad category of a shape; drives matching tier, overlap rules and roof support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCategory {
    /// Ground-plane pieces joined edge to edge
    Footprint,
    /// Walls and wall variants
    Wall,
    /// Roof panels; never valid without a structural attachment
    Roof,
    /// Ramps and stairs
    Incline,
}

impl ShapeCategory {
    pub const ALL: [ShapeCategory; 4] = [
        ShapeCategory::Footprint,
        ShapeCategory::Wall,
        ShapeCategory::Roof,
        ShapeCategory::Incline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Footprint => "footprint",
            Self::Wall => "wall",
            Self::Roof => "roof",
            Self::Incline => "incline",
        }
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeCategory {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or_else(|| ShapeError::UnknownCategory { name: s.to_string() })
    }
}

/// Type tag of a connection point or segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketKind {
    /// Outline segment of a footprint piece
    FootprintEdge,
    /// Top-surface midpoint of a footprint edge, normal pointing outward
    FootprintTop,
    /// Bottom centre of a wall
    WallBottom,
    /// Top centre of a wall
    WallTop,
    /// Vertical mid-height point at either end of a wall
    WallEnd,
    /// Low edge of a sloped roof
    RoofEave,
    /// High edge of a sloped roof
    RoofRidge,
    /// Edge midpoint of a flat roof panel
    RoofEdge,
    /// Upper end of a ramp or stairs
    InclineTop,
    /// Lower end of a ramp or stairs
    InclineBottom,
}

impl SocketKind {
    pub const ALL: [SocketKind; 10] = [
        SocketKind::FootprintEdge,
        SocketKind::FootprintTop,
        SocketKind::WallBottom,
        SocketKind::WallTop,
        SocketKind::WallEnd,
        SocketKind::RoofEave,
        SocketKind::RoofRidge,
        SocketKind::RoofEdge,
        SocketKind::InclineTop,
        SocketKind::InclineBottom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FootprintEdge => "footprint_edge",
            Self::FootprintTop => "footprint_top",
            Self::WallBottom => "wall_bottom",
            Self::WallTop => "wall_top",
            Self::WallEnd => "wall_end",
            Self::RoofEave => "roof_eave",
            Self::RoofRidge => "roof_ridge",
            Self::RoofEdge => "roof_edge",
            Self::InclineTop => "incline_top",
            Self::InclineBottom => "incline_bottom",
        }
    }

    /// Sockets on an upward-facing surface, favoured when the cursor is raised.
    pub fn is_top(&self) -> bool {
        matches!(self, Self::FootprintTop | Self::WallTop)
    }
}

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SocketKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ShapeError::UnknownSocketKind { name: s.to_string() })
    }
}

/// How a pending socket's normal relates to its target's after the yaw solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalRelation {
    /// Normals point at each other (face-to-face joins)
    Opposing,
    /// Normals point the same way (stacking)
    Aligned,
}

/// Which attachment model a shape uses when it is the pending piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    /// Three-point edge segments
    Edge,
    /// Single point plus normal
    Point,
}

/// Position of an edge within its outline, for debug visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRole {
    Front,
    Back,
    Left,
    Right,
    Base,
}
