//! # Document Mutations
//!
//! Every tree-changing command the editor accepts.
//!
//! ## Design Principles
//!
//! 1. **Validated first**: `apply` runs `validate` before touching anything,
//!    so a rejected mutation leaves the state exactly as it was
//! 2. **Intent-preserving**: each variant is one user-level operation
//! 3. **Selection-aware**: mutations that create or relocate a node select it
//!
//! ## Mutation Semantics
//!
//! ### Add / Move
//! - Target must exist and be container-capable
//! - `index` past the end (or absent) appends
//! - Move detaches first, so `index` addresses the target's children as they
//!   are without the moved node
//! - Moving a node into itself or its own subtree is a cycle and fails
//!
//! ### Delete / Duplicate
//! - The root is immutable
//! - Deleting clears the selection when it pointed into the removed subtree
//! - Duplicates get fresh ids throughout and land right after the original
//!
//! ### Import
//! - The incoming tree is validated (root identity, unique ids) before it
//!   replaces the document; selection is cleared

use crate::factory::{self, Template};
use crate::{EditorState, MutationError};
use pagesmith_model::{validate, Node, NodeId, StyleValue};
use serde::{Deserialize, Serialize};

/// Tree-changing operations. Each one is undoable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Create a component from the palette and insert it into a container
    AddComponent {
        kind: String,
        target_id: NodeId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    /// Relocate an existing node under a new container
    MoveComponent {
        node_id: NodeId,
        target_id: NodeId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    UpdateStyle {
        node_id: NodeId,
        property: String,
        value: StyleValue,
    },

    UpdateContent {
        node_id: NodeId,
        content: String,
    },

    UpdateProps {
        node_id: NodeId,
        name: String,
        value: String,
    },

    /// Remove a node and all of its descendants
    DeleteComponent { node_id: NodeId },

    DuplicateComponent { node_id: NodeId },

    /// Restore factory defaults for the node's type, keeping its id
    ResetComponent { node_id: NodeId },

    /// Replace the whole document
    ImportDocument { root: Node },
}

impl Mutation {
    /// Command name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddComponent { .. } => "addComponent",
            Mutation::MoveComponent { .. } => "moveComponent",
            Mutation::UpdateStyle { .. } => "updateStyle",
            Mutation::UpdateContent { .. } => "updateContent",
            Mutation::UpdateProps { .. } => "updateProps",
            Mutation::DeleteComponent { .. } => "deleteComponent",
            Mutation::DuplicateComponent { .. } => "duplicateComponent",
            Mutation::ResetComponent { .. } => "resetComponent",
            Mutation::ImportDocument { .. } => "importDocument",
        }
    }

    /// Apply to `state` with validation.
    ///
    /// Returns the id of the node the mutation created, if any.
    pub fn apply(&self, state: &mut EditorState) -> Result<Option<NodeId>, MutationError> {
        // Validate first
        self.validate(&state.root)?;

        match self {
            Mutation::AddComponent { kind, target_id, index } => {
                let node = factory::create(kind);
                let id = node.id.clone();
                Self::insert(&mut state.root, target_id, *index, node)?;
                state.selected_id = Some(id.clone());
                Ok(Some(id))
            }

            Mutation::MoveComponent { node_id, target_id, index } => {
                let node = Self::detach(&mut state.root, node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
                Self::insert(&mut state.root, target_id, *index, node)?;
                state.selected_id = Some(node_id.clone());
                Ok(None)
            }

            Mutation::UpdateStyle { node_id, property, value } => {
                Self::node_mut(&mut state.root, node_id)?
                    .styles
                    .insert(property.clone(), value.clone());
                Ok(None)
            }

            Mutation::UpdateContent { node_id, content } => {
                Self::node_mut(&mut state.root, node_id)?.content = Some(content.clone());
                Ok(None)
            }

            Mutation::UpdateProps { node_id, name, value } => {
                Self::node_mut(&mut state.root, node_id)?
                    .props
                    .insert(name.clone(), value.clone());
                Ok(None)
            }

            Mutation::DeleteComponent { node_id } => {
                let removed = Self::detach(&mut state.root, node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

                let selection_removed = state
                    .selected_id
                    .as_ref()
                    .is_some_and(|selected| removed.contains(selected.as_str()));
                if selection_removed {
                    state.selected_id = None;
                }
                Ok(None)
            }

            Mutation::DuplicateComponent { node_id } => {
                let (parent_id, position, mut copy) = {
                    let found = state
                        .root
                        .find(node_id.as_str())
                        .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;
                    let parent = found.parent.ok_or(MutationError::RootImmutable)?;
                    let position = found.index().ok_or(MutationError::RootImmutable)?;
                    (parent.id.clone(), position, found.node.clone())
                };

                copy.remap_ids();
                let copy_id = copy.id.clone();
                Self::insert(&mut state.root, &parent_id, Some(position + 1), copy)?;
                state.selected_id = Some(copy_id.clone());
                Ok(Some(copy_id))
            }

            Mutation::ResetComponent { node_id } => {
                let node = Self::node_mut(&mut state.root, node_id)?;
                let defaults = Template::for_node_type(&node.node_type).build();
                node.styles = defaults.styles;
                node.props = defaults.props;
                node.content = defaults.content;
                node.children = defaults.children;

                // The old subtree is gone; a selection inside it would dangle
                let dangling = state
                    .selected_id
                    .as_ref()
                    .is_some_and(|selected| !state.root.contains(selected.as_str()));
                if dangling {
                    state.selected_id = None;
                }
                Ok(None)
            }

            Mutation::ImportDocument { root } => {
                state.root = root.clone();
                state.selected_id = None;
                Ok(None)
            }
        }
    }

    /// Check the mutation against `root` without applying it
    pub fn validate(&self, root: &Node) -> Result<(), MutationError> {
        match self {
            Mutation::AddComponent { target_id, .. } => Self::check_container(root, target_id),

            Mutation::MoveComponent { node_id, target_id, .. } => {
                let node = root
                    .find_node(node_id.as_str())
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))?;

                if node.is_root() {
                    return Err(MutationError::RootImmutable);
                }

                if !root.contains(target_id.as_str()) {
                    return Err(MutationError::TargetNotFound(target_id.to_string()));
                }

                // Check wouldn't create cycle
                if node.id == *target_id || node.is_descendant(target_id.as_str()) {
                    return Err(MutationError::CycleDetected {
                        node_id: node_id.to_string(),
                        target_id: target_id.to_string(),
                    });
                }

                Self::check_container(root, target_id)
            }

            Mutation::UpdateStyle { node_id, .. }
            | Mutation::UpdateContent { node_id, .. }
            | Mutation::UpdateProps { node_id, .. } => {
                Self::check_exists(root, node_id)
            }

            Mutation::DeleteComponent { node_id }
            | Mutation::DuplicateComponent { node_id }
            | Mutation::ResetComponent { node_id } => {
                Self::check_exists(root, node_id)?;
                if node_id.is_root() {
                    return Err(MutationError::RootImmutable);
                }
                Ok(())
            }

            Mutation::ImportDocument { root: incoming } => {
                validate(incoming)?;
                Ok(())
            }
        }
    }

    fn check_exists(root: &Node, node_id: &NodeId) -> Result<(), MutationError> {
        if root.contains(node_id.as_str()) {
            Ok(())
        } else {
            Err(MutationError::NodeNotFound(node_id.to_string()))
        }
    }

    fn check_container(root: &Node, target_id: &NodeId) -> Result<(), MutationError> {
        let target = root
            .find_node(target_id.as_str())
            .ok_or_else(|| MutationError::TargetNotFound(target_id.to_string()))?;

        if target.is_container() {
            Ok(())
        } else {
            Err(MutationError::NotAContainer(target_id.to_string()))
        }
    }

    fn node_mut<'a>(root: &'a mut Node, node_id: &NodeId) -> Result<&'a mut Node, MutationError> {
        root.find_node_mut(node_id.as_str())
            .ok_or_else(|| MutationError::NodeNotFound(node_id.to_string()))
    }

    fn insert(
        root: &mut Node,
        target_id: &NodeId,
        index: Option<usize>,
        node: Node,
    ) -> Result<(), MutationError> {
        let target = root
            .find_node_mut(target_id.as_str())
            .ok_or_else(|| MutationError::TargetNotFound(target_id.to_string()))?;

        match index {
            Some(i) if i < target.children.len() => target.children.insert(i, node),
            _ => target.children.push(node),
        }
        Ok(())
    }

    /// Remove a node from wherever it sits and return it
    fn detach(node: &mut Node, target_id: &NodeId) -> Option<Node> {
        if let Some(pos) = node.children.iter().position(|c| c.id == *target_id) {
            return Some(node.children.remove(pos));
        }

        node.children
            .iter_mut()
            .find_map(|child| Self::detach(child, target_id))
    }
}

/// Result of applying a mutation through the editor
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    /// Node the mutation created (add, duplicate)
    pub created: Option<NodeId>,
}
