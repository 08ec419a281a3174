//! The capability both engines share.

use crate::arena::{Arena, EMPTY_HEIGHT, NodeId, NodeRef};
use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// An ordered set of unique values stored in a binary search tree.
///
/// Implementors only provide mutation and access to their node storage. Structural queries and
/// traversals are provided on top of that and never mutate.
///
/// Values are compared with [`Ord`]. Inserting a value that compares equal to a stored one is a
/// no-op.
pub trait OrderedTree<T: Ord> {
    /// Inserts `value`. Returns `true` if a new node was created and `false` if an equal value was
    /// already present (in which case the tree is left untouched).
    fn insert(&mut self, value: T) -> bool;

    /// Removes the value comparing equal to `value` and returns it, or returns `None` if there is
    /// no such value.
    fn remove(&mut self, value: &T) -> Option<T>;

    #[doc(hidden)]
    fn arena(&self) -> &Arena<T>;

    /// Number of nodes in the tree.
    fn len(&self) -> usize {
        self.arena().len()
    }

    /// Whether the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The root node, `None` when the tree is empty.
    fn root(&self) -> Option<NodeRef<'_, T>> {
        let arena = self.arena();
        arena.root().map(|id| NodeRef::new(arena, id))
    }

    /// Looks up a node by handle. Returns `None` for a handle whose node has been removed.
    fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        let arena = self.arena();
        arena.get(id).map(|_| NodeRef::new(arena, id))
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    fn height(&self) -> isize {
        self.root().map_or(EMPTY_HEIGHT, |root| root.height())
    }

    /// Finds the node comparing equal to `value`. On a miss this returns the node under which
    /// `value` would be inserted rather than `None`, so callers that need to tell the two apart
    /// must compare the returned node's value. Only an empty tree yields `None`.
    fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.search(value))
    }

    /// Whether a value comparing equal to `value` is stored.
    fn contains(&self, value: &T) -> bool {
        self.search(value).is_some_and(|node| node.value() == value)
    }

    /// The node holding the smallest value.
    fn min(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.min())
    }

    /// The node holding the largest value.
    fn max(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.max())
    }

    /// Visits nodes in ascending order.
    fn in_order(&self) -> InOrder<'_, T> {
        let arena = self.arena();
        InOrder::new(arena, arena.root())
    }

    /// Visits each node before its subtrees, left subtree first.
    fn pre_order(&self) -> PreOrder<'_, T> {
        let arena = self.arena();
        PreOrder::new(arena, arena.root())
    }

    /// Visits each node after both of its subtrees.
    fn post_order(&self) -> PostOrder<'_, T> {
        let arena = self.arena();
        PostOrder::new(arena, arena.root())
    }

    /// Visits nodes level by level from the root, left to right.
    fn level_order(&self) -> LevelOrder<'_, T> {
        let arena = self.arena();
        LevelOrder::new(arena, arena.root())
    }
}
