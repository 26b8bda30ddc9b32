//! Undo/redo history of ring-list snapshots

use fieldtrace_core::Ring;

/// A deep copy of the ring list taken before a mutation
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Rings as they were
    pub parts: Vec<Ring>,
    /// Name of the mutation that replaced them
    pub label: &'static str,
}

impl Snapshot {
    pub fn new(parts: Vec<Ring>, label: &'static str) -> Self {
        Self { parts, label }
    }
}

/// Bounded undo/redo stacks of snapshots
#[derive(Clone, Debug)]
pub struct SnapshotHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl SnapshotHistory {
    /// Create a history with default depth (100)
    pub fn new() -> Self {
        Self::with_depth(100)
    }

    /// Create with custom maximum undo depth
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record the state before a mutation
    pub fn record(&mut self, snapshot: Snapshot) {
        // a new mutation invalidates anything undone
        self.redo_stack.clear();

        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Step back: returns the state to restore, keeping `current` for redo
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(Snapshot::new(current.parts, previous.label));
        Some(previous)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(Snapshot::new(current.parts, next.label));
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the mutation the next undo reverts
    pub fn undo_label(&self) -> Option<&'static str> {
        self.undo_stack.last().map(|s| s.label)
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}
