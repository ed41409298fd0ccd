//! # Persistence
//!
//! Where the editor writes its state after every command.
//!
//! ```text
//! { "root": {...}, "selectedId": "n1", "history": [...], "future": [...] }
//! ```
//!
//! Only `root` is required. Missing `history`/`future` means a fresh history.
//! Stores are best-effort from the editor's point of view: a failed save is
//! logged and the in-memory edit stands.

use crate::{EditorState, StorageError};
use pagesmith_model::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// On-disk layout of an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub root: Node,

    #[serde(default)]
    pub selected_id: Option<NodeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<EditorState>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future: Option<Vec<EditorState>>,
}

impl PersistedState {
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Backend the editor persists into
pub trait DocumentStore: std::fmt::Debug {
    /// Previously saved state, or `None` when nothing was saved yet
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        PersistedState::from_json(&json).map(Some)
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, state.to_json()?)?;
        Ok(())
    }
}

/// In-memory store. Clones share one slot, so a test (or a host page) can
/// keep a handle and read back what the editor wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON last written
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        match self.slot.borrow().as_deref() {
            Some(json) => PersistedState::from_json(json).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), StorageError> {
        let json = state.to_json()?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_model::NodeType;

    fn persisted() -> PersistedState {
        PersistedState {
            root: Node::root().child(Node::with_id("t", NodeType::Text).content("hi")),
            selected_id: Some("t".into()),
            history: None,
            future: None,
        }
    }

    #[test]
    fn test_minimal_layout_loads() {
        let state = PersistedState::from_json(r#"{"root":{"id":"root","type":"root"}}"#).unwrap();
        assert!(state.root.children.is_empty());
        assert_eq!(state.selected_id, None);
        assert!(state.history.is_none());
    }

    #[test]
    fn test_history_keys_are_omitted_when_absent() {
        let json = persisted().to_json().unwrap();
        assert!(json.contains("\"selectedId\": \"t\""));
        assert!(!json.contains("history"));
        assert!(!json.contains("future"));
    }

    #[test]
    fn test_memory_store_shares_slot_between_clones() {
        let store = MemoryStore::new();
        let mut writer = store.clone();

        assert_eq!(store.load().unwrap(), None);
        writer.save(&persisted()).unwrap();
        assert_eq!(store.load().unwrap(), Some(persisted()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/page.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&persisted()).unwrap();
        assert_eq!(store.load().unwrap(), Some(persisted()));
    }

    #[test]
    fn test_file_store_reports_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileStore::new(path).load();
        assert!(matches!(result, Err(StorageError::Json(_))));
    }
}
