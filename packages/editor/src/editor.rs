//! # Command Processor
//!
//! [`Editor`] owns the one live [`EditorState`] and is the only thing that
//! changes it. Every tree mutation goes through [`Editor::apply`], which
//! snapshots the current state, applies the mutation, and either commits
//! (history entry + version bump + persist) or restores the snapshot.
//!
//! ## Lifecycle
//!
//! ```text
//! Command → validate → mutate → record history → persist
//!               ↓
//!           rejected: state untouched, typed error returned
//! ```

use crate::resolver::{resolve_drop, LayoutSource};
use crate::{
    Command, Control, DocumentStore, EditorConfig, EditorError, EditorResult, EditorState,
    History, Mutation, MutationError, MutationResult, PersistedState,
};
use pagesmith_model::{validate, Node, NodeId, StyleValue};
use tracing::{debug, info, warn};

/// Single-document editing session
#[derive(Debug)]
pub struct Editor {
    state: EditorState,
    history: History,

    /// Bumped on every observable state change
    version: u64,

    config: EditorConfig,
    store: Option<Box<dyn DocumentStore>>,
}

impl Editor {
    /// Empty document with default settings
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            state: EditorState::default(),
            history: History::new(config.history_capacity),
            version: 0,
            config,
            store: None,
        }
    }

    /// Start editing an existing tree
    pub fn from_root(root: Node, config: EditorConfig) -> EditorResult<Self> {
        validate(&root).map_err(MutationError::from)?;

        let mut editor = Self::with_config(config);
        editor.state = EditorState::new(root);
        Ok(editor)
    }

    /// Resume a saved session. A missing history starts fresh; a selection
    /// that no longer resolves is dropped.
    pub fn from_persisted(persisted: PersistedState, config: EditorConfig) -> EditorResult<Self> {
        let PersistedState {
            root,
            selected_id,
            history,
            future,
        } = persisted;

        let mut editor = Self::from_root(root, config)?;
        editor.state.selected_id = selected_id.filter(|id| editor.state.root.contains(id.as_str()));

        let past = history.unwrap_or_default();
        let future = future.unwrap_or_default();
        let (past, future) = match past.iter().chain(&future).try_for_each(|s| validate(&s.root)) {
            Ok(()) => (sanitize(past), sanitize(future)),
            Err(error) => {
                warn!(%error, "Discarding saved history with a malformed snapshot");
                (Vec::new(), Vec::new())
            }
        };
        editor.history = History::from_parts(past, future, editor.config.history_capacity);
        Ok(editor)
    }

    /// Load from `store` (or start empty when it holds nothing) and keep
    /// persisting into it after every command
    pub fn open(store: impl DocumentStore + 'static, config: EditorConfig) -> EditorResult<Self> {
        let editor = match store.load()? {
            Some(persisted) => {
                info!(undo_levels = persisted.history.as_ref().map_or(0, Vec::len), "Restored saved session");
                Self::from_persisted(persisted, config)?
            }
            None => Self::with_config(config),
        };
        Ok(editor.with_store(store))
    }

    pub fn with_store(mut self, store: impl DocumentStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn root(&self) -> &Node {
        &self.state.root
    }

    pub fn selected_id(&self) -> Option<&NodeId> {
        self.state.selected_id.as_ref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.state.selected_node()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply one tree mutation atomically
    pub fn apply(&mut self, mutation: Mutation) -> EditorResult<MutationResult> {
        let snapshot = self.state.clone();

        match mutation.apply(&mut self.state) {
            Ok(created) => {
                self.history.record(snapshot);
                self.version += 1;
                debug!(
                    command = mutation.name(),
                    version = self.version,
                    created = ?created,
                    "Applied mutation"
                );
                self.persist();
                Ok(MutationResult {
                    version: self.version,
                    created,
                })
            }
            Err(e) => {
                self.state = snapshot;
                debug!(command = mutation.name(), error = %e, "Rejected mutation");
                Err(e.into())
            }
        }
    }

    /// Run any command from the wire
    pub fn dispatch(&mut self, command: Command) -> EditorResult<MutationResult> {
        match command {
            Command::Mutate(mutation) => self.apply(mutation),
            Command::Control(control) => {
                match control {
                    Control::SelectComponent { node_id } => self.select(node_id),
                    Control::Undo => self.undo()?,
                    Control::Redo => self.redo()?,
                    Control::ClearHistory => self.clear_history(),
                }
                Ok(MutationResult {
                    version: self.version,
                    created: None,
                })
            }
        }
    }

    /// Change the selection. Never touches history; ids that are not in the
    /// tree clear the selection.
    pub fn select(&mut self, node_id: Option<NodeId>) {
        let resolved = node_id.filter(|id| {
            let exists = self.state.root.contains(id.as_str());
            if !exists {
                debug!(node_id = %id, "Ignoring selection of missing node");
            }
            exists
        });

        if resolved != self.state.selected_id {
            self.state.selected_id = resolved;
            self.version += 1;
            self.persist();
        }
    }

    pub fn undo(&mut self) -> EditorResult<()> {
        if !self.history.undo(&mut self.state) {
            return Err(EditorError::NothingToUndo);
        }
        self.version += 1;
        debug!(version = self.version, undo_levels = self.history.undo_levels(), "Undo");
        self.persist();
        Ok(())
    }

    pub fn redo(&mut self) -> EditorResult<()> {
        if !self.history.redo(&mut self.state) {
            return Err(EditorError::NothingToRedo);
        }
        self.version += 1;
        debug!(version = self.version, redo_levels = self.history.redo_levels(), "Redo");
        self.persist();
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist();
    }

    pub fn add_component(
        &mut self,
        kind: &str,
        target_id: impl Into<NodeId>,
        index: Option<usize>,
    ) -> EditorResult<MutationResult> {
        self.apply(Mutation::AddComponent {
            kind: kind.to_string(),
            target_id: target_id.into(),
            index,
        })
    }

    /// Drop a new component where the pointer is, see [`resolve_drop`]
    pub fn drop_component(
        &mut self,
        kind: &str,
        target_id: &str,
        pointer_y: f64,
        layout: &impl LayoutSource,
    ) -> EditorResult<MutationResult> {
        let drop = resolve_drop(&self.state.root, target_id, pointer_y, layout)
            .ok_or_else(|| MutationError::TargetNotFound(target_id.to_string()))?;
        self.add_component(kind, drop.parent_id, Some(drop.index))
    }

    pub fn move_component(
        &mut self,
        node_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
        index: Option<usize>,
    ) -> EditorResult<MutationResult> {
        self.apply(Mutation::MoveComponent {
            node_id: node_id.into(),
            target_id: target_id.into(),
            index,
        })
    }

    pub fn update_style(
        &mut self,
        node_id: impl Into<NodeId>,
        property: &str,
        value: impl Into<StyleValue>,
    ) -> EditorResult<MutationResult> {
        self.apply(Mutation::UpdateStyle {
            node_id: node_id.into(),
            property: property.to_string(),
            value: value.into(),
        })
    }

    pub fn update_content(
        &mut self,
        node_id: impl Into<NodeId>,
        content: impl Into<String>,
    ) -> EditorResult<MutationResult> {
        self.apply(Mutation::UpdateContent {
            node_id: node_id.into(),
            content: content.into(),
        })
    }

    pub fn update_props(
        &mut self,
        node_id: impl Into<NodeId>,
        name: &str,
        value: impl Into<String>,
    ) -> EditorResult<MutationResult> {
        self.apply(Mutation::UpdateProps {
            node_id: node_id.into(),
            name: name.to_string(),
            value: value.into(),
        })
    }

    pub fn delete_component(&mut self, node_id: impl Into<NodeId>) -> EditorResult<MutationResult> {
        self.apply(Mutation::DeleteComponent {
            node_id: node_id.into(),
        })
    }

    pub fn duplicate_component(&mut self, node_id: impl Into<NodeId>) -> EditorResult<MutationResult> {
        self.apply(Mutation::DuplicateComponent {
            node_id: node_id.into(),
        })
    }

    pub fn reset_component(&mut self, node_id: impl Into<NodeId>) -> EditorResult<MutationResult> {
        self.apply(Mutation::ResetComponent {
            node_id: node_id.into(),
        })
    }

    pub fn import_document(&mut self, root: Node) -> EditorResult<MutationResult> {
        let nodes = root.subtree_size();
        let result = self.apply(Mutation::ImportDocument { root })?;
        info!(nodes, version = result.version, "Imported document");
        Ok(result)
    }

    /// Saveable form of the session
    pub fn to_persisted(&self) -> PersistedState {
        let (history, future) = if self.config.persist_history {
            (
                Some(self.history.past().cloned().collect()),
                Some(self.history.future().cloned().collect()),
            )
        } else {
            (None, None)
        };

        PersistedState {
            root: self.state.root.clone(),
            selected_id: self.state.selected_id.clone(),
            history,
            future,
        }
    }

    /// Write to the attached store. Failures are logged, never returned.
    fn persist(&mut self) {
        if self.store.is_none() {
            return;
        }

        let persisted = self.to_persisted();
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.save(&persisted) {
                warn!(error = %e, version = self.version, "Failed to persist editor state");
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop selections that point outside their own snapshot
fn sanitize(snapshots: Vec<EditorState>) -> Vec<EditorState> {
    snapshots
        .into_iter()
        .map(|mut snapshot| {
            if let Some(id) = &snapshot.selected_id {
                if !snapshot.root.contains(id.as_str()) {
                    snapshot.selected_id = None;
                }
            }
            snapshot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StorageError};
    use pagesmith_model::NodeType;

    #[test]
    fn test_add_card_scenario() {
        let mut editor = Editor::new();
        let card = editor.add_component("card", "root", None).unwrap().created.unwrap();

        let root = editor.root();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].node_type, NodeType::Card);

        let types: Vec<&str> = root.children[0]
            .children
            .iter()
            .map(|c| c.node_type.as_str())
            .collect();
        assert_eq!(types, vec!["heading", "text", "button"]);
        assert_eq!(editor.selected_id(), Some(&card));
        assert_eq!(editor.version(), 1);
        assert_eq!(editor.history().undo_levels(), 1);
    }

    #[test]
    fn test_rejected_mutation_leaves_everything_untouched() {
        let mut editor = Editor::new();
        let card = editor.add_component("card", "root", None).unwrap().created.unwrap();
        let child = editor.root().children[0].children[0].id.clone();

        let state = editor.state().clone();
        let version = editor.version();

        let err = editor.move_component(card.clone(), child, None).unwrap_err();
        assert!(matches!(err, EditorError::Mutation(MutationError::CycleDetected { .. })));

        assert_eq!(editor.state(), &state);
        assert_eq!(editor.version(), version);
        assert_eq!(editor.history().undo_levels(), 1);
    }

    #[test]
    fn test_undo_redo_through_dispatch() {
        let mut editor = Editor::new();
        editor.add_component("text", "root", None).unwrap();

        editor.dispatch(Command::Control(Control::Undo)).unwrap();
        assert!(editor.root().children.is_empty());
        assert_eq!(editor.selected_id(), None);

        editor.dispatch(Command::Control(Control::Redo)).unwrap();
        assert_eq!(editor.root().children.len(), 1);

        let err = editor.dispatch(Command::Control(Control::Redo)).unwrap_err();
        assert!(matches!(err, EditorError::NothingToRedo));
    }

    #[test]
    fn test_select_skips_history() {
        let mut editor = Editor::new();
        let id = editor.add_component("text", "root", None).unwrap().created.unwrap();

        editor.select(None);
        assert_eq!(editor.selected_id(), None);
        editor.select(Some(id.clone()));
        assert_eq!(editor.selected_id(), Some(&id));
        assert_eq!(editor.history().undo_levels(), 1);

        editor.select(Some("ghost".into()));
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_clear_history_keeps_tree() {
        let mut editor = Editor::new();
        editor.add_component("text", "root", None).unwrap();
        editor.clear_history();

        assert_eq!(editor.root().children.len(), 1);
        assert!(matches!(editor.undo(), Err(EditorError::NothingToUndo)));
    }

    #[test]
    fn test_persists_after_every_command() {
        let store = MemoryStore::new();
        let mut editor = Editor::open(store.clone(), EditorConfig::default()).unwrap();

        let id = editor.add_component("heading", "root", None).unwrap().created.unwrap();
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.selected_id, Some(id));
        assert_eq!(saved.history.map(|h| h.len()), Some(1));

        let reopened = Editor::open(store, EditorConfig::default()).unwrap();
        assert_eq!(reopened.root(), editor.root());
        assert!(reopened.history().can_undo());
    }

    #[test]
    fn test_history_not_persisted_when_disabled() {
        let store = MemoryStore::new();
        let config = EditorConfig {
            persist_history: false,
            ..EditorConfig::default()
        };
        let mut editor = Editor::open(store.clone(), config).unwrap();
        editor.add_component("text", "root", None).unwrap();

        let saved = store.load().unwrap().unwrap();
        assert!(saved.history.is_none());
        assert!(!store.contents().unwrap().contains("future"));
    }

    #[derive(Debug)]
    struct BrokenStore;

    impl DocumentStore for BrokenStore {
        fn load(&self) -> Result<Option<PersistedState>, StorageError> {
            Ok(None)
        }

        fn save(&mut self, _state: &PersistedState) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn test_persistence_failure_does_not_fail_command() {
        let mut editor = Editor::open(BrokenStore, EditorConfig::default()).unwrap();
        let result = editor.add_component("text", "root", None);

        assert!(result.is_ok());
        assert_eq!(editor.root().children.len(), 1);
    }

    #[test]
    fn test_from_persisted_drops_stale_selection() {
        let persisted = PersistedState {
            root: Node::root(),
            selected_id: Some("gone".into()),
            history: None,
            future: None,
        };
        let editor = Editor::from_persisted(persisted, EditorConfig::default()).unwrap();
        assert_eq!(editor.selected_id(), None);
        assert!(!editor.history().can_undo());
    }

    #[test]
    fn test_from_persisted_discards_malformed_history() {
        let broken = Node::root()
            .child(Node::with_id("dup", NodeType::Text))
            .child(Node::with_id("dup", NodeType::Text));
        let persisted = PersistedState {
            root: Node::root(),
            selected_id: None,
            history: Some(vec![EditorState::new(broken)]),
            future: Some(vec![EditorState::new(Node::root())]),
        };

        let mut editor = Editor::from_persisted(persisted, EditorConfig::default()).unwrap();
        assert!(!editor.history().can_undo());
        assert!(!editor.history().can_redo());
        assert!(matches!(editor.undo(), Err(EditorError::NothingToUndo)));
        assert!(validate(editor.root()).is_ok());
    }

    #[test]
    fn test_from_persisted_keeps_valid_history() {
        let earlier = Node::root().child(Node::with_id("hero", NodeType::Section));
        let mut snapshot = EditorState::new(earlier.clone());
        snapshot.selected_id = Some("missing".into());
        let persisted = PersistedState {
            root: Node::root(),
            selected_id: None,
            history: Some(vec![snapshot]),
            future: None,
        };

        let mut editor = Editor::from_persisted(persisted, EditorConfig::default()).unwrap();
        editor.undo().unwrap();
        assert_eq!(editor.root(), &earlier);
        assert_eq!(editor.selected_id(), None);
    }

    #[test]
    fn test_from_root_rejects_bad_root() {
        let result = Editor::from_root(Node::with_id("main", NodeType::Div), EditorConfig::default());
        assert!(matches!(
            result,
            Err(EditorError::Mutation(MutationError::MalformedDocument(_)))
        ));
    }
}
