//! # FieldTrace
//!
//! A field boundary tracing engine for farm-management applications:
//! - Draw one or more rings of vertices on a map, or drop a pivot circle
//! - Keep the shape inside the parent property boundary
//! - Remove overlap with the property's other registered fields
//! - Report the resulting area in hectares
//!
//! ## Architecture
//!
//! FieldTrace is organized as a workspace with multiple crates:
//!
//! 1. **fieldtrace-core** - Vertices, rings, GeoJSON-like geometries, units
//! 2. **fieldtrace-settings** - Editor configuration, JSON/TOML persistence
//! 3. **fieldtrace-editor** - Polygon algebra, edit sessions, gesture controller
//! 4. **fieldtrace** - This facade: re-exports and logging setup
//!
//! Map rendering, persistence and the application shell belong to the host;
//! the host feeds gestures into a [`FieldEditor`] and receives
//! [`PreviewSnapshot`]s and, on save, a [`SavedField`].

pub use fieldtrace_core::{
    shared, FieldContext, FieldError, FieldGeometry, Position, Ring, SavedField, Shared,
    SiblingField, Vertex,
};

pub use fieldtrace_settings::{
    ConfigError, EditorConfig, EngineSettings, PreviewSettings, SessionSettings, SettingsError,
};

pub use fieldtrace_editor::{
    AreaSource, CircleStep, DerivedGeometry, DrawMode, EditError, EditSession, EditorListener,
    EditorListenerHandle, EngineError, FieldEditor, FieldEngine, Gesture, GestureOutcome,
    PreviewSnapshot, SessionState, ValidationError, VertexMarker, VertexRef,
};

pub use fieldtrace_core::units::format_hectares;
pub use fieldtrace_editor::{
    circle_to_polygon, clip_to_boundary, merge_rings_to_multipolygon, ring_area, simplify,
    subtract_siblings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with target and level
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true).with_level(true))
        .try_init()?;

    tracing::info!("FieldTrace {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

/// Initialize logging with one JSON object per event
///
/// Intended for hosts that ship logs to a collector.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_current_span(true))
        .try_init()?;
    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}
