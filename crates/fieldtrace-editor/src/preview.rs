//! Render snapshots of an edit session.
//!
//! A [`PreviewSnapshot`] is rebuilt from the session after each change and
//! handed to listeners; nothing in it feeds back into the session.

use fieldtrace_core::units::format_hectares;
use fieldtrace_core::{FieldGeometry, Ring, Vertex};
use fieldtrace_settings::PreviewSettings;
use serde::Serialize;

use crate::engine::AreaSource;
use crate::model::multi_polygon_to_field_geometry;
use crate::session::{EditSession, SessionState, VertexRef};

/// A draggable vertex handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VertexMarker {
    pub at: VertexRef,
    pub position: Vertex,
    /// True for vertices of the active ring.
    pub active: bool,
}

/// Everything a renderer needs to draw the current session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSnapshot {
    pub state: SessionState,
    /// Net geometry, or gross geometry when clipping failed.
    ///
    /// Stays `None` under the gross area fallback even though the area label
    /// shows the gross figure: there is nothing a save would accept.
    pub net: Option<FieldGeometry>,
    pub parts: Vec<Ring>,
    pub active_part: usize,
    /// Open outline of the active ring while it has one or two vertices.
    pub auxiliary_outline: Option<Vec<Vertex>>,
    /// Empty when markers are suppressed.
    pub markers: Vec<VertexMarker>,
    pub markers_suppressed: bool,
    pub circle_preview: Option<Ring>,
    /// Other fields of the property, for reference.
    pub siblings: Vec<FieldGeometry>,
    pub boundary: Option<FieldGeometry>,
    pub area_hectares: f64,
    pub area_label: String,
    pub area_is_fallback: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Name of the edit the next undo reverts, for the toolbar tooltip.
    pub undo_label: Option<&'static str>,
}

impl PreviewSnapshot {
    pub fn capture(session: &EditSession, settings: &PreviewSettings) -> Self {
        let derived = session.derived();
        let context = session.context();
        let active = session.active_part();

        let auxiliary_outline = session
            .active_ring()
            .filter(|ring| !ring.is_empty() && !ring.is_valid())
            .map(|ring| ring.vertices().to_vec());

        let markers = if session.markers_visible() {
            session
                .parts()
                .iter()
                .enumerate()
                .flat_map(|(part, ring)| {
                    ring.iter().enumerate().map(move |(index, v)| VertexMarker {
                        at: VertexRef::new(part, index),
                        position: *v,
                        active: part == active,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        let siblings = if settings.show_siblings {
            context
                .siblings
                .iter()
                .filter(|s| context.field_id.as_deref() != Some(s.id.as_str()))
                .map(|s| s.geometry.clone())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            state: session.state(),
            net: derived.net.as_ref().and_then(multi_polygon_to_field_geometry),
            parts: session.parts().to_vec(),
            active_part: active,
            auxiliary_outline,
            markers,
            markers_suppressed: !session.markers_visible(),
            circle_preview: session.circle_preview(),
            siblings,
            boundary: settings.show_boundary.then(|| context.boundary.clone()),
            area_hectares: derived.area_hectares,
            area_label: format_hectares(derived.area_hectares),
            area_is_fallback: derived.area_source == AreaSource::GrossFallback,
            can_undo: session.can_undo(),
            can_redo: session.can_redo(),
            undo_label: session.undo_label(),
        }
    }
}
