use std::ops::{Index, IndexMut};

use pathgrid_core::{Point, PosId};

/// Index of a node inside a [`NodeRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

// ---------------------------------------------------------------------------
// Search node
// ---------------------------------------------------------------------------

/// One explored or frontier cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    pub(crate) id: PosId,
    /// Steps taken from the start.
    pub(crate) g: i32,
    /// Estimate of the remaining steps. Fixed for the node's lifetime.
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<NodeId>,
}

impl SearchNode {
    pub(crate) fn new(pos: Point, id: PosId, g: i32, h: i32, parent: Option<NodeId>) -> Self {
        Self {
            pos,
            id,
            g,
            h,
            f: g + h,
            parent,
        }
    }

    /// Record a cheaper route reaching this node through `parent`.
    pub(crate) fn relax(&mut self, g: i32, parent: NodeId) {
        self.g = g;
        self.f = g + self.h;
        self.parent = Some(parent);
    }
}

// ---------------------------------------------------------------------------
// NodeRegistry
// ---------------------------------------------------------------------------

/// Arena owning every node created by one search.
///
/// Parent links are [`NodeId`]s into the same arena. A parent is always
/// expanded before its children are created, so following parents always
/// terminates at the start node.
#[derive(Debug, Default)]
pub(crate) struct NodeRegistry {
    nodes: Vec<SearchNode>,
}

impl NodeRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk from `id` back to the root, yielding `id` first.
    pub(crate) fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(id), move |&n| self.nodes[n.0].parent)
            .map(move |n| &self.nodes[n.0])
    }
}

impl Index<NodeId> for NodeRegistry {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeRegistry {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }
}
