//! Configuration for PieceKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, selected by file extension.
//!
//! Configuration is organized into logical sections:
//! - Snapping (matcher radii, tolerances, and scoring weights)
//! - Logging (level and output format)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Snapping tolerances and scoring weights used by the placement engine.
///
/// Lengths are in world units, angles in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Maximum cursor distance to a candidate edge midpoint or socket
    pub snap_radius: f64,
    /// A target edge is occupied when another piece has an edge midpoint this close
    pub edge_occupied_distance: f64,
    /// Per-point tolerance of the three-point edge validation
    pub edge_point_tolerance: f64,
    /// Allowed difference between pending and target edge lengths
    pub edge_length_tolerance: f64,
    /// Placements closer than this to an existing piece are duplicates
    pub duplicate_epsilon: f64,
    /// Score penalty when a socket candidate's yaw disagrees with the manual yaw
    pub yaw_mismatch_penalty: f64,
    /// Angular difference above which the yaw penalty applies
    pub yaw_mismatch_threshold: f64,
    /// Cursor height above which the cursor counts as aimed upward
    pub elevated_cursor_height: f64,
    /// Score bonus for top sockets when the cursor is elevated
    pub top_socket_bonus: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            snap_radius: 2.0,
            edge_occupied_distance: 0.1,
            edge_point_tolerance: 0.05,
            edge_length_tolerance: 0.01,
            duplicate_epsilon: 0.05,
            yaw_mismatch_penalty: 0.25,
            yaw_mismatch_threshold: 0.1,
            elevated_cursor_height: 0.5,
            top_socket_bonus: 0.5,
        }
    }
}

impl SnapSettings {
    /// Validate snapping settings
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("snapping.snap_radius", self.snap_radius),
            ("snapping.edge_occupied_distance", self.edge_occupied_distance),
            ("snapping.edge_point_tolerance", self.edge_point_tolerance),
            ("snapping.edge_length_tolerance", self.edge_length_tolerance),
            ("snapping.duplicate_epsilon", self.duplicate_epsilon),
        ];
        for (key, value) in positive {
            in_range(key, value, value > 0.0)?;
        }

        let non_negative = [
            ("snapping.yaw_mismatch_penalty", self.yaw_mismatch_penalty),
            ("snapping.yaw_mismatch_threshold", self.yaw_mismatch_threshold),
            ("snapping.top_socket_bonus", self.top_socket_bonus),
        ];
        for (key, value) in non_negative {
            in_range(key, value, value >= 0.0)?;
        }

        if !self.elevated_cursor_height.is_finite() {
            return Err(SettingsError::invalid(
                "snapping.elevated_cursor_height",
                "must be finite",
            ));
        }

        if self.edge_occupied_distance >= self.snap_radius {
            return Err(SettingsError::invalid(
                "snapping.edge_occupied_distance",
                "must be smaller than snap_radius",
            ));
        }

        Ok(())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when RUST_LOG is unset (e.g. "info", "piecekit_placement=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include the event target (module path)
    pub with_target: bool,
    /// Include source line numbers
    pub with_line_number: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_target: true,
            with_line_number: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Snapping tolerances
    pub snapping: SnapSettings,
    /// Logging preferences
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.snapping.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }

    /// Merge another config into this one (preserves existing values for default sections)
    pub fn merge(&mut self, other: &Config) {
        if other.snapping != SnapSettings::default() {
            self.snapping = other.snapping.clone();
        }
        if other.logging != LoggingSettings::default() {
            self.logging = other.logging.clone();
        }
    }
}

fn in_range(key: &str, value: f64, ok: bool) -> ConfigResult<()> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
