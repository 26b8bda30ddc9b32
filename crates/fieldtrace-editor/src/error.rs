//! Error types for the field editor crate.
//!
//! Validation failures are user-recoverable and leave the session intact.
//! Engine failures never leave this crate as errors from a gesture: the
//! session absorbs them and degrades the derived geometry instead.

use thiserror::Error;

/// User-recoverable validation failures reported back to the gesture caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Save needs at least one ring with three vertices.
    #[error("A field needs at least 3 vertices (found {found})")]
    NotEnoughVertices { found: usize },

    /// A new part can only be started once the active ring encloses an area.
    #[error("Close the current part first: it has {vertices} of 3 vertices")]
    RingNotClosed { vertices: usize },

    /// Boundary clipping and sibling subtraction left nothing.
    #[error("The property boundary or neighbouring fields make the shape disappear")]
    ShapeVanished,

    /// The circle tool radius is below the configured minimum.
    #[error("Circle radius {radius_m:.1} m is below the minimum of {min_m:.1} m")]
    CircleTooSmall { radius_m: f64, min_m: f64 },
}

/// Failures of a single polygon-algebra call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A boolean operation panicked or produced unusable output.
    #[error("Numerical failure during {operation}")]
    NumericalFailure { operation: &'static str },
}

/// Errors that can occur during edit-session operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// The gesture failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The gesture referenced a vertex that no longer exists.
    #[error("Vertex {index} of part {part} does not exist")]
    VertexNotFound { part: usize, index: usize },

    /// The gesture referenced a part that does not exist.
    #[error("Part {part} does not exist (parts: {count})")]
    PartNotFound { part: usize, count: usize },

    /// The session was saved and accepts no further gestures.
    #[error("The edit session is closed")]
    SessionClosed,
}

impl EditError {
    /// True for failures that should be shown to the user as guidance.
    pub fn is_validation(&self) -> bool {
        matches!(self, EditError::Validation(_))
    }
}

/// Result type alias for edit operations.
pub type EditResult<T> = Result<T, EditError>;
