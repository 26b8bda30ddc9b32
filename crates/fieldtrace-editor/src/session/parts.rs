use fieldtrace_core::constants::MIN_RING_VERTICES;
use fieldtrace_core::Ring;
use tracing::{debug, info};

use super::{DrawMode, EditSession};
use crate::error::{EditError, EditResult, ValidationError};
use crate::ops;

impl EditSession {
    /// Starts a new, empty ring after the active one is closed.
    pub fn start_new_part(&mut self) -> EditResult<bool> {
        self.ensure_open()?;
        let vertices = self.active_ring().map_or(0, Ring::len);
        if vertices < MIN_RING_VERTICES {
            return Err(ValidationError::RingNotClosed { vertices }.into());
        }
        self.commit("new part", |parts, active| {
            parts.push(Ring::new());
            *active = parts.len() - 1;
            Ok(())
        })
    }

    /// Chooses which ring receives new vertices.
    ///
    /// An empty ring that loses the focus is discarded; that removal is an
    /// undoable edit. A pure focus change records no history.
    pub fn set_active_part(&mut self, index: usize) -> EditResult<bool> {
        let previous = self.active;
        let changed = self.commit("select part", |parts, active| {
            let count = parts.len();
            if index >= count {
                return Err(EditError::PartNotFound { part: index, count });
            }
            let mut target = index;
            if target != *active && parts.get(*active).is_some_and(Ring::is_empty) {
                parts.remove(*active);
                if *active < target {
                    target -= 1;
                }
            }
            *active = target;
            Ok(())
        })?;

        let refocused = self.active != previous;
        if refocused {
            debug!(session = %self.id, active = self.active, "Active part changed");
        }
        Ok(changed || refocused)
    }

    /// Simplifies every ring with the configured tolerance.
    ///
    /// Only runs when there is more than one ring or a ring exceeds the
    /// configured vertex count; otherwise returns `Ok(false)`.
    pub fn simplify(&mut self) -> EditResult<bool> {
        self.ensure_open()?;
        let min_vertices = self.settings.simplify_min_vertices;
        let eligible =
            self.parts.len() > 1 || self.parts.iter().any(|ring| ring.len() > min_vertices);
        if !eligible {
            debug!(session = %self.id, "Nothing to simplify");
            return Ok(false);
        }

        let before = self.total_vertices();
        let tolerance = self.settings.simplify_tolerance;
        let changed = self.commit("simplify", |parts, _| {
            *parts = ops::simplify(parts, tolerance);
            Ok(())
        })?;
        info!(
            session = %self.id,
            before,
            after = self.total_vertices(),
            "Simplified field outline"
        );
        Ok(changed)
    }

    /// Resets to an empty session, discarding rings and history.
    pub fn clear(&mut self) -> EditResult<bool> {
        self.ensure_open()?;
        let had_parts = !self.parts.is_empty();
        self.parts.clear();
        self.active = 0;
        self.history.clear();
        self.mode = DrawMode::Polygon;
        if had_parts {
            self.dirty = true;
        }
        self.refresh();
        Ok(had_parts)
    }
}
