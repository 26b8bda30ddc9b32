//! Error handling for FieldTrace core types
//!
//! Covers failures while reading host-supplied geometry:
//! - GeoJSON text that does not parse
//! - Geometries with missing or degenerate rings
//! - Coordinates that are not finite or out of range
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry input error type
///
/// Raised when a geometry supplied by the host (seed, boundary or sibling)
/// cannot be turned into rings.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The GeoJSON text could not be parsed.
    #[error("Invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The geometry contains no ring with enough vertices.
    #[error("Geometry has no usable ring")]
    NoUsableRing,

    /// A coordinate is NaN, infinite, or outside the valid degree range.
    #[error("Invalid coordinate [{lng}, {lat}]")]
    InvalidCoordinate {
        /// Longitude in degrees.
        lng: f64,
        /// Latitude in degrees.
        lat: f64,
    },

    /// Generic geometry error
    #[error("Geometry error: {0}")]
    Other(String),
}

/// Crate-level alias, mirrors the common `Error` naming used by dependents.
pub type Error = FieldError;

/// Result type alias for FieldTrace core operations.
pub type Result<T> = std::result::Result<T, FieldError>;

impl FieldError {
    /// Create a generic error from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
