//! Edit-session state store.
//!
//! [`EditSession`] is the single authoritative model of the rings being
//! drawn. Every mutation is a read-modify-write on a working copy of the
//! ring list: a failed gesture leaves the session untouched, a successful
//! one swaps the copy in, records the previous rings for undo and rebuilds
//! the derived geometry before returning.

mod circle;
mod history;
mod parts;
mod vertices;

use fieldtrace_core::{FieldContext, FieldGeometry, Ring, SavedField, Vertex};
use fieldtrace_settings::{EditorConfig, SessionSettings};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{DerivedGeometry, FieldEngine};
use crate::error::{EditError, EditResult, ValidationError};
use crate::history::{Snapshot, SnapshotHistory};
use crate::model::geometry_area_hectares;

pub use circle::CircleStep;

/// Address of one vertex: ring index and vertex index within the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VertexRef {
    pub part: usize,
    pub index: usize,
}

impl VertexRef {
    pub fn new(part: usize, index: usize) -> Self {
        Self { part, index }
    }
}

/// Drawing state of the active ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// No vertices anywhere.
    Empty,
    /// The active ring does not enclose an area yet.
    Drawing,
    /// The active ring has at least three vertices.
    Valid,
}

/// What a tap on the map does.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum DrawMode {
    /// Taps append vertices to the active ring.
    #[default]
    Polygon,
    /// Taps place and then fix a pivot circle.
    Circle(CircleStep),
}

/// One editor invocation over a single field.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: Uuid,
    context: FieldContext,
    engine: FieldEngine,
    settings: SessionSettings,
    parts: Vec<Ring>,
    active: usize,
    history: SnapshotHistory,
    derived: DerivedGeometry,
    markers_visible: bool,
    mode: DrawMode,
    dirty: bool,
    closed: bool,
}

impl EditSession {
    /// Opens a session, optionally seeded with a saved geometry.
    pub fn new(context: FieldContext, seed: Option<&FieldGeometry>, config: &EditorConfig) -> Self {
        let id = Uuid::new_v4();
        let engine = FieldEngine::new(&context, seed, config.engine.clone());
        let parts = match seed.map(FieldGeometry::editable_rings) {
            Some(Ok(parts)) => parts,
            Some(Err(err)) => {
                warn!(session = %id, "Ignoring seed geometry, starting empty: {}", err);
                Vec::new()
            }
            None => Vec::new(),
        };

        let mut session = Self {
            id,
            context,
            engine,
            settings: config.session.clone(),
            active: parts.len().saturating_sub(1),
            parts,
            history: SnapshotHistory::with_depth(config.session.undo_depth),
            derived: DerivedGeometry::default(),
            markers_visible: true,
            mode: DrawMode::Polygon,
            dirty: false,
            closed: false,
        };
        session.refresh();
        debug!(
            session = %session.id,
            parts = session.parts.len(),
            field = ?session.context.field_id,
            "Edit session opened"
        );
        session
    }

    /// Opens a session seeded from GeoJSON text.
    ///
    /// Text that does not parse as a polygon geometry starts the session empty.
    pub fn from_geojson_seed(
        context: FieldContext,
        seed: Option<&str>,
        config: &EditorConfig,
    ) -> Self {
        let geometry = seed.and_then(|text| match FieldGeometry::from_geojson_str(text) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                warn!("Ignoring unreadable seed geometry: {}", err);
                None
            }
        });
        Self::new(context, geometry.as_ref(), config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn context(&self) -> &FieldContext {
        &self.context
    }

    pub fn engine(&self) -> &FieldEngine {
        &self.engine
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn parts(&self) -> &[Ring] {
        &self.parts
    }

    /// Index of the ring receiving new vertices.
    pub fn active_part(&self) -> usize {
        self.active
    }

    pub fn active_ring(&self) -> Option<&Ring> {
        self.parts.get(self.active)
    }

    pub fn derived(&self) -> &DerivedGeometry {
        &self.derived
    }

    /// Area currently reported to the user.
    pub fn area_hectares(&self) -> f64 {
        self.derived.area_hectares
    }

    pub fn markers_visible(&self) -> bool {
        self.markers_visible
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Name of the edit the next undo reverts.
    pub fn undo_label(&self) -> Option<&'static str> {
        self.history.undo_label()
    }

    pub fn total_vertices(&self) -> usize {
        self.parts.iter().map(Ring::len).sum()
    }

    pub fn state(&self) -> SessionState {
        if self.total_vertices() == 0 {
            SessionState::Empty
        } else if self.active_ring().is_some_and(Ring::is_valid) {
            SessionState::Valid
        } else {
            SessionState::Drawing
        }
    }

    /// Finalizes the field.
    ///
    /// Needs one ring with at least three vertices and a non-empty result
    /// after clipping and sibling subtraction. On success the session is
    /// closed and accepts no further gestures.
    pub fn save(&mut self) -> EditResult<SavedField> {
        self.ensure_open()?;
        if !self.parts.iter().any(Ring::is_valid) {
            let found = self.parts.iter().map(Ring::len).max().unwrap_or(0);
            return Err(ValidationError::NotEnoughVertices { found }.into());
        }

        let geometry = self
            .derived
            .to_field_geometry()
            .ok_or(ValidationError::ShapeVanished)?;
        let area_hectares = geometry_area_hectares(&geometry);

        self.closed = true;
        self.dirty = false;
        info!(
            session = %self.id,
            parts = geometry.part_count(),
            area_hectares,
            "Field saved"
        );
        Ok(SavedField {
            geometry,
            area_hectares,
        })
    }

    pub(crate) fn ensure_open(&self) -> EditResult<()> {
        if self.closed {
            Err(EditError::SessionClosed)
        } else {
            Ok(())
        }
    }

    /// Applies `mutate` to a working copy of the rings and the active index.
    ///
    /// Returns `Ok(false)` when the rings did not change; no history is
    /// recorded in that case.
    pub(crate) fn commit<F>(&mut self, label: &'static str, mutate: F) -> EditResult<bool>
    where
        F: FnOnce(&mut Vec<Ring>, &mut usize) -> EditResult<()>,
    {
        self.ensure_open()?;
        let mut parts = self.parts.clone();
        let mut active = self.active;
        mutate(&mut parts, &mut active)?;

        if parts == self.parts {
            self.active = active;
            self.clamp_active();
            return Ok(false);
        }

        let previous = std::mem::replace(&mut self.parts, parts);
        self.history.record(Snapshot::new(previous, label));
        self.active = active;
        self.clamp_active();
        self.dirty = true;
        self.refresh();
        debug!(session = %self.id, label, "Committed edit");
        Ok(true)
    }

    /// Rebuilds derived geometry and marker visibility from the rings.
    pub(crate) fn refresh(&mut self) {
        self.derived = self.engine.compute(&self.parts);
        self.markers_visible = self.total_vertices() <= self.settings.marker_vertex_limit;
    }

    pub(crate) fn clamp_active(&mut self) {
        self.active = self.active.min(self.parts.len().saturating_sub(1));
    }

    pub(crate) fn vertex_in(parts: &[Ring], at: VertexRef) -> EditResult<Vertex> {
        parts
            .get(at.part)
            .and_then(|ring| ring.get(at.index))
            .copied()
            .ok_or(EditError::VertexNotFound {
                part: at.part,
                index: at.index,
            })
    }
}
