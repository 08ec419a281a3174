//! Lazy depth-first and breadth-first traversals.
//!
//! Every iterator borrows the tree, keeps its own explicit stack or queue and yields
//! [`NodeRef`]s. Creating a fresh iterator restarts the traversal from the root.

use std::collections::VecDeque;

use crate::arena::{Arena, NodeId, NodeRef};

/// In-order (left, node, right) traversal. Yields values in ascending order.
pub struct InOrder<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<NodeId>) {
        while let Some(id) = node {
            self.stack.push(id);
            node = self.arena[id].left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left(self.arena[id].right);
        Some(NodeRef::new(self.arena, id))
    }
}

/// Pre-order (node, left, right) traversal.
pub struct PreOrder<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.arena[id];
        // Right goes first so that left pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(NodeRef::new(self.arena, id))
    }
}

/// Post-order (left, right, node) traversal.
pub struct PostOrder<'a, T> {
    arena: &'a Arena<T>,
    /// Nodes paired with whether their children have already been pushed.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: root.map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            if expanded {
                return Some(NodeRef::new(self.arena, id));
            }
            let node = &self.arena[id];
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
    }
}

/// Level-order (breadth-first) traversal, left before right within a level.
pub struct LevelOrder<'a, T> {
    arena: &'a Arena<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = &self.arena[id];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(NodeRef::new(self.arena, id))
    }
}
