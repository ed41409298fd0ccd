use crate::history::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Editor tuning knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Undo levels kept (0 = unlimited)
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Whether undo/redo stacks are written along with the document
    #[serde(default = "default_persist_history")]
    pub persist_history: bool,
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_persist_history() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            persist_history: default_persist_history(),
        }
    }
}
