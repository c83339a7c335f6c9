//! Error handling for PieceKit
//!
//! The geometric algorithms are total over their input domains, so the only
//! recoverable failures come from the edges of the system:
//! - Shape errors (string tags from a collaborator that name no known kind)
//! - I/O and JSON errors from reading or writing scene files
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape error type
///
/// Raised when a string tag coming from outside the engine (a store record,
/// a config file, a debug console) does not name a registered kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The piece kind tag is not known
    #[error("Unknown piece kind: {name}")]
    UnknownPieceKind {
        /// The unrecognized tag.
        name: String,
    },

    /// The socket kind tag is not known
    #[error("Unknown socket kind: {name}")]
    UnknownSocketKind {
        /// The unrecognized tag.
        name: String,
    },

    /// The shape category tag is not known
    #[error("Unknown shape category: {name}")]
    UnknownCategory {
        /// The unrecognized tag.
        name: String,
    },
}

/// Main error type for PieceKit
///
/// A unified error type for the fallible edges of the system: reading scene
/// files and parsing the tags inside them.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A scene file written by an incompatible format version
    #[error("Unsupported scene format version: {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
