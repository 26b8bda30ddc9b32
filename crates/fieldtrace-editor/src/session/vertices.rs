use fieldtrace_core::{Ring, Vertex};
use tracing::debug;

use super::{EditSession, VertexRef};
use crate::error::{EditError, EditResult};

impl EditSession {
    /// Appends a vertex to the active ring, creating the first ring if needed.
    ///
    /// Invalid coordinates are ignored.
    pub fn add_vertex(&mut self, vertex: Vertex) -> EditResult<bool> {
        self.ensure_open()?;
        if !vertex.is_valid() {
            debug!(session = %self.id, ?vertex, "Ignoring invalid vertex");
            return Ok(false);
        }
        self.commit("add vertex", |parts, active| {
            if parts.is_empty() {
                parts.push(Ring::new());
                *active = 0;
            }
            let count = parts.len();
            parts
                .get_mut(*active)
                .ok_or(EditError::PartNotFound {
                    part: *active,
                    count,
                })?
                .push(vertex);
            Ok(())
        })
    }

    /// Replaces a vertex in place (drag).
    pub fn move_vertex(&mut self, at: VertexRef, to: Vertex) -> EditResult<bool> {
        self.ensure_open()?;
        if !to.is_valid() {
            return Ok(false);
        }
        self.commit("move vertex", |parts, _| {
            parts
                .get_mut(at.part)
                .and_then(|ring| ring.replace(at.index, to))
                .map(|_| ())
                .ok_or(EditError::VertexNotFound {
                    part: at.part,
                    index: at.index,
                })
        })
    }

    /// Removes a vertex; a ring left empty is removed as well.
    pub fn delete_vertex(&mut self, at: VertexRef) -> EditResult<bool> {
        self.commit("delete vertex", |parts, active| {
            let ring = parts.get_mut(at.part).ok_or(EditError::VertexNotFound {
                part: at.part,
                index: at.index,
            })?;
            ring.remove(at.index).ok_or(EditError::VertexNotFound {
                part: at.part,
                index: at.index,
            })?;

            if ring.is_empty() {
                parts.remove(at.part);
                if at.part <= *active {
                    *active = active.saturating_sub(1);
                }
            }
            Ok(())
        })
    }

    /// Returns the vertex at `at`.
    pub fn vertex(&self, at: VertexRef) -> Option<Vertex> {
        Self::vertex_in(&self.parts, at).ok()
    }
}
