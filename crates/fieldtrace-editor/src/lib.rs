//! # FieldTrace Editor
//!
//! This crate provides the field boundary editor: the polygon algebra that
//! keeps a drawn field inside its property and clear of neighbouring
//! fields, and the edit session that drives it under constant user input.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Model**: spherical area, ring/polygon conversion, multi-ring merge
//! - **Ops**: boundary clip, sibling subtraction, pivot circles, simplification
//! - **Engine**: gross/net geometry and reported area for one session
//!
//! ### Editing
//! - **Session**: rings, active part, undo/redo, dirty tracking, circle tool
//! - **Controller**: gesture dispatch and listener notification
//! - **Preview**: render snapshots for the map layer
//!
//! ## Architecture
//!
//! ```text
//! FieldEditor (gestures)
//!   └── EditSession (authoritative rings + history)
//!         └── FieldEngine (clip, subtract, area)
//!               └── ops / model (geo polygon algebra)
//!
//! PreviewSnapshot ──> EditorListener
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fieldtrace_editor::{FieldEditor, Gesture};
//!
//! let mut editor = FieldEditor::new(context, None, &EditorConfig::default());
//! editor.handle(Gesture::Tap(Vertex::new(-15.60, -47.80)))?;
//! editor.handle(Gesture::Tap(Vertex::new(-15.60, -47.79)))?;
//! editor.handle(Gesture::Tap(Vertex::new(-15.59, -47.79)))?;
//! let saved = editor.handle(Gesture::Save)?;
//! ```

pub mod controller;
pub mod engine;
pub mod error;
pub mod history;
pub mod listener;
pub mod model;
pub mod ops;
pub mod preview;
pub mod session;

pub use controller::{FieldEditor, Gesture, GestureOutcome};
pub use engine::{AreaSource, DerivedGeometry, FieldEngine};
pub use error::{EditError, EditResult, EngineError, ValidationError};
pub use history::{Snapshot, SnapshotHistory};
pub use listener::{EditorListener, EditorListenerHandle};
pub use model::{merge_rings_to_multipolygon, ring_area, ring_to_polygon};
pub use ops::{circle_to_polygon, clip_to_boundary, simplify, subtract_siblings, SiblingShape};
pub use preview::{PreviewSnapshot, VertexMarker};
pub use session::{CircleStep, DrawMode, EditSession, SessionState, VertexRef};
