//! Gesture handling.
//!
//! [`FieldEditor`] turns user gestures into session mutations and reports
//! every result to the registered listeners.

use std::rc::Rc;

use fieldtrace_core::{FieldContext, FieldGeometry, SavedField, Vertex};
use fieldtrace_settings::{EditorConfig, PreviewSettings};
use tracing::{debug, debug_span};
use uuid::Uuid;

use crate::error::{EditError, EditResult};
use crate::listener::{EditorListener, EditorListenerHandle};
use crate::preview::PreviewSnapshot;
use crate::session::{DrawMode, EditSession, VertexRef};

/// A user gesture on the map or the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Tap on the map away from any vertex.
    Tap(Vertex),
    /// Pointer moved over the map.
    PointerMove(Vertex),
    /// Tap on a vertex marker; a second tap on the same vertex deletes it.
    VertexTap(VertexRef),
    /// A vertex marker was dragged to a new position.
    DragVertex { at: VertexRef, to: Vertex },
    /// Secondary click or long press on a vertex marker.
    SecondaryClick(VertexRef),
    NewPart,
    /// Pick the ring that receives new vertices.
    SelectPart(usize),
    ToggleDrawMode,
    Simplify,
    Undo,
    Redo,
    Clear,
    Save,
}

/// What a handled gesture did.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// The rings changed.
    Updated,
    /// Only transient preview state changed (mode, circle radius).
    PreviewUpdated,
    /// Nothing changed.
    NoOp,
    /// The field was saved and the session closed.
    Saved(SavedField),
}

impl GestureOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            GestureOutcome::Updated
        } else {
            GestureOutcome::NoOp
        }
    }
}

/// Interaction controller owning one edit session.
pub struct FieldEditor {
    session: EditSession,
    preview: PreviewSettings,
    listeners: Vec<(EditorListenerHandle, Rc<dyn EditorListener>)>,
    last_vertex_tap: Option<VertexRef>,
}

impl FieldEditor {
    pub fn new(context: FieldContext, seed: Option<&FieldGeometry>, config: &EditorConfig) -> Self {
        Self::with_session(EditSession::new(context, seed, config), config.preview.clone())
    }

    pub fn with_session(session: EditSession, preview: PreviewSettings) -> Self {
        Self {
            session,
            preview,
            listeners: Vec::new(),
            last_vertex_tap: None,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn into_session(self) -> EditSession {
        self.session
    }

    /// Builds a fresh snapshot of the current session.
    pub fn snapshot(&self) -> PreviewSnapshot {
        PreviewSnapshot::capture(&self.session, &self.preview)
    }

    pub fn register_listener(&mut self, listener: Rc<dyn EditorListener>) -> EditorListenerHandle {
        let handle = EditorListenerHandle(Uuid::new_v4().to_string());
        self.listeners.push((handle.clone(), listener));
        handle
    }

    pub fn unregister_listener(&mut self, handle: &EditorListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| h != handle);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Applies one gesture and notifies listeners of the result.
    ///
    /// Validation failures are reported to listeners and returned; the
    /// session is left as it was.
    pub fn handle(&mut self, gesture: Gesture) -> EditResult<GestureOutcome> {
        let _span = debug_span!("gesture", session = %self.session.id()).entered();
        debug!(?gesture, "Handling gesture");

        let result = self.apply(gesture);
        match &result {
            Ok(GestureOutcome::Updated) | Ok(GestureOutcome::PreviewUpdated) => {
                let snapshot = self.snapshot();
                for (_, listener) in &self.listeners {
                    listener.on_preview(&snapshot);
                }
            }
            Ok(GestureOutcome::Saved(field)) => {
                for (_, listener) in &self.listeners {
                    listener.on_saved(field);
                }
            }
            Ok(GestureOutcome::NoOp) => {}
            Err(EditError::Validation(error)) => {
                for (_, listener) in &self.listeners {
                    listener.on_validation_failed(error);
                }
            }
            Err(err) => debug!("Gesture rejected: {}", err),
        }
        result
    }

    fn apply(&mut self, gesture: Gesture) -> EditResult<GestureOutcome> {
        let last_tap = match gesture {
            Gesture::VertexTap(at) => self.last_vertex_tap.replace(at),
            _ => self.last_vertex_tap.take(),
        };

        let session = &mut self.session;
        let changed = match gesture {
            Gesture::Tap(at) => match session.mode() {
                DrawMode::Polygon => session.add_vertex(at)?,
                DrawMode::Circle(_) => {
                    let before = session.mode();
                    let committed = session.circle_tap(at)?;
                    if !committed && session.mode() != before {
                        return Ok(GestureOutcome::PreviewUpdated);
                    }
                    committed
                }
            },
            Gesture::PointerMove(at) => {
                return Ok(if session.circle_pointer_move(at) {
                    GestureOutcome::PreviewUpdated
                } else {
                    GestureOutcome::NoOp
                });
            }
            Gesture::VertexTap(at) => {
                if last_tap == Some(at) {
                    self.last_vertex_tap = None;
                    session.delete_vertex(at)?
                } else {
                    session.ensure_open()?;
                    false
                }
            }
            Gesture::DragVertex { at, to } => session.move_vertex(at, to)?,
            Gesture::SecondaryClick(at) => session.delete_vertex(at)?,
            Gesture::NewPart => session.start_new_part()?,
            Gesture::SelectPart(index) => session.set_active_part(index)?,
            Gesture::ToggleDrawMode => {
                session.toggle_draw_mode()?;
                return Ok(GestureOutcome::PreviewUpdated);
            }
            Gesture::Simplify => session.simplify()?,
            Gesture::Undo => session.undo()?,
            Gesture::Redo => session.redo()?,
            Gesture::Clear => session.clear()?,
            Gesture::Save => return Ok(GestureOutcome::Saved(session.save()?)),
        };
        Ok(GestureOutcome::from_changed(changed))
    }
}
