//! FieldTrace Settings Crate
//!
//! Handles editor configuration: engine tolerances, session limits and
//! preview options, with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{EditorConfig, EngineSettings, PreviewSettings, SessionSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
