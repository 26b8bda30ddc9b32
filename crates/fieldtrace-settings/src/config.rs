//! Configuration for the field editor
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Engine settings (coordinate precision, tolerances, circle resolution)
//! - Session settings (undo depth, marker limits, simplify gesture)
//! - Preview settings (which reference layers are included in snapshots)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Polygon algebra settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Decimal places kept when normalizing coordinates before and after
    /// boolean operations (6 places is roughly 0.1 m).
    pub coordinate_precision: u32,
    /// Simplification tolerance, in degrees, applied to clip results.
    pub clip_simplify_tolerance: f64,
    /// Net/gross ratio under which an existing field falls back to gross area.
    pub collapse_ratio: f64,
    /// Area ratio under which a subtraction result counts as collapsed.
    pub degenerate_ratio: f64,
    /// Report gross area when net area collapses while editing an existing field.
    pub self_overlap_fallback: bool,
    /// Number of sides of a discretized pivot circle.
    pub circle_segments: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            coordinate_precision: 6,
            clip_simplify_tolerance: 1e-6,
            collapse_ratio: 0.01,
            degenerate_ratio: 1e-6,
            self_overlap_fallback: true,
            circle_segments: 64,
        }
    }
}

/// Edit-session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Maximum number of undo snapshots kept.
    pub undo_depth: usize,
    /// Vertex markers are suppressed when the session holds more vertices.
    pub marker_vertex_limit: usize,
    /// A single ring must exceed this many vertices for the simplify gesture to run.
    pub simplify_min_vertices: usize,
    /// Tolerance, in degrees, used by the simplify gesture.
    pub simplify_tolerance: f64,
    /// Smallest pivot radius accepted by the circle tool, in metres.
    pub min_circle_radius_m: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            undo_depth: 100,
            marker_vertex_limit: 400,
            simplify_min_vertices: 10,
            simplify_tolerance: 1e-5,
            min_circle_radius_m: 1.0,
        }
    }
}

/// Preview snapshot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Include sibling fields in preview snapshots.
    pub show_siblings: bool,
    /// Include the property boundary in preview snapshots.
    pub show_boundary: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            show_siblings: true,
            show_boundary: true,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub engine: EngineSettings,
    pub session: SessionSettings,
    pub preview: PreviewSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/fieldtrace/editor.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("fieldtrace").join("editor.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: EditorConfig = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded editor config");
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default editor config");
                Self::default()
            }
        }
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        if engine.coordinate_precision == 0 || engine.coordinate_precision > 12 {
            return Err(ConfigError::out_of_range(
                "engine.coordinate_precision",
                engine.coordinate_precision,
            ));
        }

        if !(engine.clip_simplify_tolerance >= 0.0 && engine.clip_simplify_tolerance.is_finite()) {
            return Err(ConfigError::out_of_range(
                "engine.clip_simplify_tolerance",
                engine.clip_simplify_tolerance,
            ));
        }

        if !(0.0..1.0).contains(&engine.collapse_ratio) {
            return Err(ConfigError::out_of_range(
                "engine.collapse_ratio",
                engine.collapse_ratio,
            ));
        }

        if !(0.0..1.0).contains(&engine.degenerate_ratio) {
            return Err(ConfigError::out_of_range(
                "engine.degenerate_ratio",
                engine.degenerate_ratio,
            ));
        }

        if engine.circle_segments < 8 {
            return Err(ConfigError::out_of_range(
                "engine.circle_segments",
                engine.circle_segments,
            ));
        }

        let session = &self.session;
        if session.undo_depth == 0 {
            return Err(ConfigError::out_of_range("session.undo_depth", 0));
        }

        if !(session.simplify_tolerance > 0.0 && session.simplify_tolerance.is_finite()) {
            return Err(ConfigError::out_of_range(
                "session.simplify_tolerance",
                session.simplify_tolerance,
            ));
        }

        if !(session.min_circle_radius_m > 0.0 && session.min_circle_radius_m.is_finite()) {
            return Err(ConfigError::out_of_range(
                "session.min_circle_radius_m",
                session.min_circle_radius_m,
            ));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
