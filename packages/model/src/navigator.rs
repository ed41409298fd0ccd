//! # Tree Navigator
//!
//! Read-only lookups over the node tree. Parents are never stored; they are
//! recovered by walking down from the root, so every lookup is O(tree size).

use crate::{ModelError, ModelResult, Node, NodeId, NodeType, ROOT_ID};
use std::collections::HashSet;

/// A node together with the node that owns it
#[derive(Debug, Clone, Copy)]
pub struct Found<'a> {
    pub node: &'a Node,
    /// `None` when the node is the tree root
    pub parent: Option<&'a Node>,
}

impl Found<'_> {
    /// Position of the node within its parent's children
    pub fn index(&self) -> Option<usize> {
        let parent = self.parent?;
        parent.children.iter().position(|c| c.id == self.node.id)
    }
}

/// One row of a depth-first outline
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub depth: usize,
    pub id: NodeId,
    pub node_type: NodeType,
}

impl Node {
    /// Pre-order search for `id`, returning the node and its parent
    pub fn find(&self, id: &str) -> Option<Found<'_>> {
        fn search<'a>(node: &'a Node, parent: Option<&'a Node>, id: &str) -> Option<Found<'a>> {
            if node.id.as_str() == id {
                return Some(Found { node, parent });
            }
            node.children
                .iter()
                .find_map(|child| search(child, Some(node), id))
        }

        search(self, None, id)
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.find(id).map(|found| found.node)
    }

    pub fn find_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_node_mut(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// True when `id` is strictly below this node
    pub fn is_descendant(&self, id: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.id.as_str() == id || child.is_descendant(id))
    }

    /// Visit every node in pre-order with its depth (root is depth 0)
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node, usize)) {
        fn go<'a>(node: &'a Node, depth: usize, visit: &mut impl FnMut(&'a Node, usize)) {
            visit(node, depth);
            for child in &node.children {
                go(child, depth + 1, visit);
            }
        }

        go(self, 0, visit);
    }

    /// All ids in pre-order
    pub fn collect_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.walk(&mut |node, _| ids.push(node.id.clone()));
        ids
    }

    /// Number of nodes in this subtree, including itself
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_size).sum::<usize>()
    }

    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut entries = Vec::new();
        self.walk(&mut |node, depth| {
            entries.push(OutlineEntry {
                depth,
                id: node.id.clone(),
                node_type: node.node_type.clone(),
            })
        });
        entries
    }
}

/// Check the document-level invariants: a `root` node of type root at the top
/// and no id used twice
pub fn validate(root: &Node) -> ModelResult<()> {
    if root.id.as_str() != ROOT_ID || root.node_type != NodeType::Root {
        return Err(ModelError::invalid_root(root.id.as_str(), root.node_type.as_str()));
    }

    let mut seen = HashSet::new();
    let mut duplicate = None;
    root.walk(&mut |node, _| {
        if duplicate.is_none() && !seen.insert(node.id.as_str()) {
            duplicate = Some(node.id.clone());
        }
    });

    match duplicate {
        Some(id) => Err(ModelError::duplicate_id(id.as_str())),
        None => Ok(()),
    }
}
