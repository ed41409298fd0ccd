//! # Undo/Redo History
//!
//! Snapshot-based linear history.
//!
//! ## Design
//!
//! - Every mutation records the state it replaced onto `past`
//! - Undo swaps the newest `past` entry in and moves the live state to `future`
//! - Redo is the mirror image
//! - Recording a new entry clears `future` (no redo branches)
//! - Both stacks are bounded; the oldest entry is evicted first
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(50);
//! let mut state = EditorState::default();
//!
//! history.record(state.clone());
//! state.selected_id = Some("root".into());
//!
//! history.undo(&mut state);
//! history.redo(&mut state);
//! ```

use crate::EditorState;
use std::collections::VecDeque;

/// Default number of undo levels kept
pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded past/future stacks of editor snapshots
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots before the live state (most recent last)
    past: VecDeque<EditorState>,

    /// Snapshots undone from the live state (most recent last)
    future: VecDeque<EditorState>,

    /// Maximum entries per stack (0 = unlimited)
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            capacity,
        }
    }

    /// Rebuild a history from persisted stacks, keeping the newest entries
    /// when they exceed `capacity`
    pub fn from_parts(past: Vec<EditorState>, future: Vec<EditorState>, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        for snapshot in past {
            Self::push_bounded(&mut history.past, snapshot, capacity);
        }
        for snapshot in future {
            Self::push_bounded(&mut history.future, snapshot, capacity);
        }
        history
    }

    /// Record the state a mutation is about to replace
    pub fn record(&mut self, snapshot: EditorState) {
        Self::push_bounded(&mut self.past, snapshot, self.capacity);

        // New action invalidates future
        self.future.clear();
    }

    /// Step back one entry. Returns false when there is nothing to undo.
    pub fn undo(&mut self, state: &mut EditorState) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(state, previous);
                Self::push_bounded(&mut self.future, current, self.capacity);
                true
            }
            None => false,
        }
    }

    /// Step forward one entry. Returns false when there is nothing to redo.
    pub fn redo(&mut self, state: &mut EditorState) -> bool {
        match self.future.pop_back() {
            Some(next) => {
                let current = std::mem::replace(state, next);
                Self::push_bounded(&mut self.past, current, self.capacity);
                true
            }
            None => false,
        }
    }

    fn push_bounded(stack: &mut VecDeque<EditorState>, snapshot: EditorState, capacity: usize) {
        stack.push_back(snapshot);
        while capacity > 0 && stack.len() > capacity {
            stack.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Past snapshots, oldest first
    pub fn past(&self) -> impl Iterator<Item = &EditorState> {
        self.past.iter()
    }

    /// Future snapshots, oldest first (the next redo is last)
    pub fn future(&self) -> impl Iterator<Item = &EditorState> {
        self.future.iter()
    }

    /// Forget all undo/redo history without touching the live state
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
