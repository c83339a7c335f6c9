//! # PieceKit
//!
//! Placement assist for grid-based 3D construction. Given the cursor's ground
//! point, the pending piece kind and the pieces already placed, PieceKit
//! works out where the new piece snaps, how it is turned, and whether it may
//! be placed there.
//!
//! ## Architecture
//!
//! PieceKit is organized as a workspace with multiple crates:
//!
//! 1. **piecekit-core** - Errors, piece ids, unit constants, yaw math
//! 2. **piecekit-settings** - Snapping tolerances, logging options, config files
//! 3. **piecekit-placement** - Shape registry, edge and socket matchers, grid
//!    fallback, validator and the engine entry point
//! 4. **piecekit** - Re-exports, logging setup and a demo binary
//!
//! ## Features
//!
//! - **Edge snapping**: foundations and structures join edge to edge, checked
//!   at three points per edge
//! - **Socket snapping**: walls, roofs and inclines attach by point and normal
//! - **Grid fallback**: cell-centred placement with quantized rotation
//! - **Validation**: duplicate, overlap and unsupported-roof rejection

use std::path::Path;

pub use piecekit_core::{Error, PieceId, Result, ShapeError};
pub use piecekit_placement::{
    compute_placement, definition_for, world_edges, world_sockets, CandidateRecorder,
    PieceKind, PieceSet, PlacedPiece, PlacementEngine, PlacementObserver, PlacementRequest,
    SceneFile, ShapeRegistry, SnapResult, SnapSource,
};
pub use piecekit_settings::{Config, LogFormat, LoggingSettings, SettingsPersistence, SnapSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Loads the configuration from `path`, or from the platform config
/// directory when no path is given.
///
/// A missing file yields the defaults. A platform without a config directory
/// also yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match SettingsPersistence::default_path() {
            Ok(path) => path,
            Err(_) => return Ok(Config::default()),
        },
    };

    let persistence = SettingsPersistence::load_or_default(path)?;
    persistence.validate()?;
    Ok(persistence.config().clone())
}

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Pretty, compact or JSON console output
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(settings.with_target)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(settings.with_line_number);

    let registry = tracing_subscriber::registry().with(env_filter);
    match settings.format {
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).try_init()?,
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init()?,
        LogFormat::Json => registry.with(fmt_layer.json()).try_init()?,
    }

    Ok(())
}
