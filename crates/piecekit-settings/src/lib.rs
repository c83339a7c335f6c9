//! PieceKit Settings Crate
//!
//! Handles the tunable snapping tolerances, logging options, and their
//! persistence as JSON or TOML files.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, LogFormat, LoggingSettings, SnapSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
