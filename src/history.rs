//! Branching undo/redo history over immutable configuration snapshots.
//!
//! The history is an append-only log with a cursor. Committing while the cursor sits
//! behind the last snapshot truncates the undone future before appending, so redo is
//! only ever available directly after an undo.

use crate::types::CampaignConfig;

/// History store for the campaign configuration edited in one session.
pub type ConfigStore = ConfigHistory<CampaignConfig>;

#[derive(Debug, Clone)]
pub struct ConfigHistory<T> {
    snapshots: Vec<T>,
    cursor: usize,
    initial: T,
}

impl<T: Clone> ConfigHistory<T> {
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial.clone()],
            cursor: 0,
            initial,
        }
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    /// Replace the present with `next`, discarding any redo future.
    pub fn commit(&mut self, next: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Compute the next snapshot from the present one and commit it.
    pub fn commit_with<F>(&mut self, update: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = update(self.current());
        self.commit(next);
    }

    /// Step back one snapshot. Returns false when already at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one snapshot. Returns false when already at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Drop every snapshot and start over from the value the history was created with.
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(self.initial.clone());
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }
}
