use pagesmith_model::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// Everything undo/redo travels through: the tree and the selection.
///
/// History entries are plain owned copies of this value, so nothing done to
/// the live tree can reach back into a stored snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub root: Node,

    #[serde(default)]
    pub selected_id: Option<NodeId>,
}

impl EditorState {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            selected_id: None,
        }
    }

    pub fn selected_node(&self) -> Option<&Node> {
        let id = self.selected_id.as_ref()?;
        self.root.find_node(id.as_str())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Node::root())
    }
}
