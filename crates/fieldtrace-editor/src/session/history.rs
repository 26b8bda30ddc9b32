use fieldtrace_core::Ring;
use tracing::debug;

use super::EditSession;
use crate::error::EditResult;
use crate::history::Snapshot;

impl EditSession {
    /// Restores the rings as they were before the latest mutation.
    pub fn undo(&mut self) -> EditResult<bool> {
        self.ensure_open()?;
        let current = Snapshot::new(self.parts.clone(), "current");
        let Some(previous) = self.history.undo(current) else {
            return Ok(false);
        };
        debug!(session = %self.id, label = previous.label, "Undo");
        self.restore(previous.parts);
        Ok(true)
    }

    /// Re-applies the latest undone mutation.
    pub fn redo(&mut self) -> EditResult<bool> {
        self.ensure_open()?;
        let current = Snapshot::new(self.parts.clone(), "current");
        let Some(next) = self.history.redo(current) else {
            return Ok(false);
        };
        debug!(session = %self.id, label = next.label, "Redo");
        self.restore(next.parts);
        Ok(true)
    }

    /// Swaps in restored rings and settles the active index.
    ///
    /// When the active ring comes back empty the previous ring becomes
    /// active; empty rings other than the active one are pruned.
    fn restore(&mut self, parts: Vec<Ring>) {
        self.parts = parts;
        self.clamp_active();
        if self.active > 0 && self.parts.get(self.active).is_some_and(Ring::is_empty) {
            self.active -= 1;
        }

        let active = self.active;
        let mut kept = Vec::with_capacity(self.parts.len());
        for (index, ring) in std::mem::take(&mut self.parts).into_iter().enumerate() {
            if index == active {
                self.active = kept.len();
                kept.push(ring);
            } else if !ring.is_empty() {
                kept.push(ring);
            }
        }
        self.parts = kept;

        self.dirty = true;
        self.refresh();
    }
}
