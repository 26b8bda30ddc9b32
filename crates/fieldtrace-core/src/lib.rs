//! # FieldTrace Core
//!
//! Core types and utilities shared by the FieldTrace crates.
//! Provides the geographic data model (vertices, rings, GeoJSON-like
//! geometries), the session context handed in by the host application,
//! area unit helpers, and the common error type.

pub mod constants;
pub mod data;
pub mod error;
pub mod types;
pub mod units;

pub use data::{
    FieldContext, FieldGeometry, Position, Ring, SavedField, SiblingField, Vertex,
};

pub use error::{Error, FieldError, Result};

pub use types::{shared, Shared};
