//! # Insertion Resolver
//!
//! Turns a pointer position into a child index. The rule is "insert above the
//! nearest child whose vertical midpoint is below the pointer", which is the
//! only ordering decision drag operations make.
//!
//! Geometry comes from a [`LayoutSource`], so the same rule works against the
//! browser DOM, a test fixture, or any other measurement backend.

use pagesmith_model::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Layout bounds of a rendered node, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Anything that can report where a node was laid out
pub trait LayoutSource {
    fn bounds(&self, id: &str) -> Option<Rect>;
}

impl LayoutSource for HashMap<NodeId, Rect> {
    fn bounds(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

/// Where a dropped item should be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub parent_id: NodeId,
    pub index: usize,
}

/// Index of the first child whose midpoint lies below `pointer_y`, or the
/// child count when the pointer is below every child
pub fn resolve_index(pointer_y: f64, children: &[Rect]) -> usize {
    children
        .iter()
        .position(|rect| pointer_y < rect.mid_y())
        .unwrap_or(children.len())
}

/// Resolve a drop onto `target_id`.
///
/// Containers receive the item among their own children. Dropping onto a leaf
/// inserts next to it in its parent: before it when the pointer is above its
/// midpoint, after it otherwise. Children without measured bounds are treated
/// as not rendered and never attract the drop.
pub fn resolve_drop(
    root: &Node,
    target_id: &str,
    pointer_y: f64,
    layout: &impl LayoutSource,
) -> Option<DropTarget> {
    let found = root.find(target_id)?;

    if found.node.is_container() {
        let (positions, rects): (Vec<usize>, Vec<Rect>) = found
            .node
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| layout.bounds(child.id.as_str()).map(|rect| (i, rect)))
            .unzip();

        let index = positions
            .get(resolve_index(pointer_y, &rects))
            .copied()
            .unwrap_or(found.node.children.len());

        return Some(DropTarget {
            parent_id: found.node.id.clone(),
            index,
        });
    }

    let parent = found.parent?;
    let position = found.index()?;
    let offset = match layout.bounds(target_id) {
        Some(rect) => resolve_index(pointer_y, &[rect]),
        None => 1,
    };

    Some(DropTarget {
        parent_id: parent.id.clone(),
        index: position + offset,
    })
}
