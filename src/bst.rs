//! A plain Binary Search Tree that never rebalances. Inserting sorted input degrades it into a
//! linked list of height `n - 1`, which is exactly what it is here for: a baseline to hold the
//! [`AvlTree`][crate::AvlTree] against.
//!
//! Because the height is unbounded, nothing in here recurses. Descents are loops and the height
//! bookkeeping after a mutation walks parent links back to the root.
//!
//! # Examples
//!
//! ```
//! use avl_nn::{BinarySearchTree, OrderedTree};
//!
//! let mut tree = BinarySearchTree::new();
//! for x in 0..5 {
//!     tree.insert(x);
//! }
//!
//! // Sorted input gives a degenerate tree.
//! assert_eq!(tree.height(), 4);
//!
//! // A miss returns the node the value would hang under.
//! assert_eq!(tree.search(&10).map(|n| *n.value()), Some(4));
//!
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.len(), 4);
//! ```

use std::fmt;

use crate::arena::{Arena, Descent, NodeId};
use crate::tree::OrderedTree;

/// An unbalanced Binary Search Tree of unique values.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    arena: Arena<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    /// Recomputes cached heights from `from` up to the root.
    fn fix_heights(&mut self, from: Option<NodeId>) {
        let mut cursor = from;
        while let Some(id) = cursor {
            self.arena.fix_height(id);
            cursor = self.arena[id].parent;
        }
    }
}

impl<T: Ord> OrderedTree<T> for BinarySearchTree<T> {
    fn insert(&mut self, value: T) -> bool {
        match self.arena.locate(&value) {
            Descent::Found(_) => false,
            Descent::Vacant { parent, side } => {
                self.arena.attach(value, parent, side);
                self.fix_heights(parent);
                true
            }
        }
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let Descent::Found(id) = self.arena.locate(value) else {
            return None;
        };
        let (removed, fixup) = self.arena.splice_out(id);
        self.fix_heights(fixup);
        Some(removed)
    }

    fn arena(&self) -> &Arena<T> {
        &self.arena
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = crate::NodeRef<'a, T>;
    type IntoIter = crate::traverse::InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug + Ord,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.in_order().map(|n| n.value()))
            .finish()
    }
}
