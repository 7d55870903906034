//! # Undo/Redo History
//!
//! Tracks document snapshots and enables undo/redo.
//!
//! ## Design
//!
//! - Every recordable mutation pushes the pre-mutation snapshot
//! - Undo exchanges the current snapshot with the most recent past one
//! - Redo exchanges it back
//! - New recordings clear the redo stack
//! - Depth is bounded: past the limit, the oldest snapshot is dropped
//!   silently (undo depth truncates, it never errors)

use proposal_document::DocumentSnapshot;

/// Undo/redo stack pair over document snapshots.
#[derive(Debug)]
pub struct History {
    /// Prior snapshots, most recent last.
    past: Vec<DocumentSnapshot>,

    /// Undone snapshots, most recently undone last.
    future: Vec<DocumentSnapshot>,

    /// Maximum number of undo levels (0 = unlimited).
    max_size: usize,
}

impl History {
    /// Create a history with the default depth (100).
    pub fn new() -> Self {
        Self::with_max_size(100)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_size,
        }
    }

    /// Record the pre-mutation snapshot. Clears the redo stack.
    pub fn record(&mut self, snapshot: DocumentSnapshot) {
        self.past.push(snapshot);

        if self.max_size > 0 && self.past.len() > self.max_size {
            self.past.remove(0);
        }

        self.future.clear();
    }

    /// Step back: returns the snapshot to restore, taking ownership of the
    /// current one. `None` (and no state change) if there is no past.
    pub fn undo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward again. `None` (and no state change) if there is no
    /// undone snapshot to return to.
    pub fn redo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Drop both stacks. Used by template load and editor reset, which are
    /// not undoable.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_document::EditorState;

    fn snapshot(marker: f64) -> DocumentSnapshot {
        let mut state = EditorState::new();
        state.canvas_size.width = marker;
        state.snapshot()
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(snapshot(0.0)), None);
        assert_eq!(history.redo(snapshot(0.0)), None);
        // Failed undo must not disturb the redo stack.
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_redo_exchange() {
        let mut history = History::new();
        history.record(snapshot(1.0));

        let restored = history.undo(snapshot(2.0)).unwrap();
        assert_eq!(restored, snapshot(1.0));
        assert_eq!(history.redo_depth(), 1);

        let forward = history.redo(restored).unwrap();
        assert_eq!(forward, snapshot(2.0));
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_record_clears_future() {
        let mut history = History::new();
        history.record(snapshot(1.0));
        history.undo(snapshot(2.0)).unwrap();
        assert_eq!(history.redo_depth(), 1);

        history.record(snapshot(3.0));
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_depth_is_bounded() {
        let mut history = History::with_max_size(3);
        for i in 0..5 {
            history.record(snapshot(i as f64));
        }

        assert_eq!(history.undo_depth(), 3);
        // The oldest snapshots were evicted; the newest survive.
        let restored = history.undo(snapshot(99.0)).unwrap();
        assert_eq!(restored, snapshot(4.0));
    }

    #[test]
    fn test_zero_means_unbounded() {
        let mut history = History::with_max_size(0);
        for i in 0..250 {
            history.record(snapshot(i as f64));
        }
        assert_eq!(history.undo_depth(), 250);
    }
}
