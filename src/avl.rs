//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! After every insert or remove, each ancestor of the changed node has its cached height
//! recomputed and its balance factor (left height minus right height) checked. Any ancestor
//! whose balance factor leaves `[-1, 1]` is fixed with one or two rotations, which keeps the
//! height within `1.45 * lg(n + 2)`.
//!
//! # Examples
//!
//! ```
//! use avl_nn::{AvlTree, OrderedTree};
//!
//! let mut tree = AvlTree::new();
//! for x in 1..=7 {
//!     tree.insert(x);
//! }
//!
//! // Sorted input still gives a perfectly balanced tree.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//!
//! assert_eq!(tree.remove(&4), Some(4));
//! assert_eq!(tree.min().map(|n| *n.value()), Some(1));
//! assert_eq!(tree.max().map(|n| *n.value()), Some(7));
//! ```

use std::fmt;

use tracing::trace;

use crate::arena::{Arena, Descent, NodeId};
use crate::tree::OrderedTree;

/// A self-balancing Binary Search Tree of unique values.
#[derive(Clone)]
pub struct AvlTree<T> {
    arena: Arena<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    /// Generate a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.arena.clear();
    }

    /// Cached height of an optional node, `-1` for `None`. Also `-1` for a handle whose node has
    /// been removed.
    pub fn height_of(&self, id: Option<NodeId>) -> isize {
        self.arena.height(id.filter(|id| self.arena.get(*id).is_some()))
    }

    /// Left height minus right height of the node at `id`, `0` for a removed node.
    pub fn balance_factor(&self, id: NodeId) -> isize {
        match self.arena.get(id) {
            Some(_) => self.arena.balance_factor(id),
            None => 0,
        }
    }

    /// Mutable access to a stored value. The value's ordering must not change through this
    /// reference.
    pub(crate) fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Rotate the node at `id` to the left. This moves its right child up vertically and the node
    /// itself down vertically. Returns the new root of the rotated subtree, which is `id` itself
    /// when there is no right child to rotate up.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>              Option<parent>
    ///      /                           /
    ///   old_root                    new_root
    ///    /     \                    /     \
    ///   x    new_root  rotate ->  old_root  z
    ///         /  \                 /  \
    ///        y    z               x    y
    /// ```
    pub fn left_rotate(&mut self, id: NodeId) -> NodeId {
        let Some(new_root) = self.arena.get(id).and_then(|node| node.right) else {
            return id;
        };
        trace!(pivot = id.index(), new_root = new_root.index(), "left rotation");

        let inner = self.arena[new_root].left;
        let parent = self.arena[id].parent;

        self.arena[id].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(id);
        }
        self.arena.replace_child(parent, id, Some(new_root));
        self.arena[new_root].left = Some(id);
        self.arena[id].parent = Some(new_root);

        self.arena.fix_height(id);
        self.arena.fix_height(new_root);
        new_root
    }

    /// Rotate the node at `id` to the right. This moves its left child up vertically and the node
    /// itself down vertically. Returns the new root of the rotated subtree, which is `id` itself
    /// when there is no left child to rotate up.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///   old_root                  new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    pub fn right_rotate(&mut self, id: NodeId) -> NodeId {
        let Some(new_root) = self.arena.get(id).and_then(|node| node.left) else {
            return id;
        };
        trace!(pivot = id.index(), new_root = new_root.index(), "right rotation");

        let inner = self.arena[new_root].right;
        let parent = self.arena[id].parent;

        self.arena[id].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(id);
        }
        self.arena.replace_child(parent, id, Some(new_root));
        self.arena[new_root].right = Some(id);
        self.arena[id].parent = Some(new_root);

        self.arena.fix_height(id);
        self.arena.fix_height(new_root);
        new_root
    }

    /// Fixes the height of `id` and rotates if it is out of balance. Returns the root of the
    /// subtree `id` used to root.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.arena.fix_height(id);
        let balance = self.arena.balance_factor(id);

        let top = if balance > 1 {
            let left = self.arena[id]
                .left
                .expect("left-heavy node has a left child");
            if self.arena.balance_factor(left) < 0 {
                trace!(node = id.index(), balance, "left-right case");
                self.left_rotate(left);
            }
            self.right_rotate(id)
        } else if balance < -1 {
            let right = self.arena[id]
                .right
                .expect("right-heavy node has a right child");
            if self.arena.balance_factor(right) > 0 {
                trace!(node = id.index(), balance, "right-left case");
                self.right_rotate(right);
            }
            self.left_rotate(id)
        } else {
            id
        };

        if cfg!(debug_assertions) {
            let node = &self.arena[top];
            let left_height = self.arena.height(node.left);
            let right_height = self.arena.height(node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        top
    }

    /// Rebalances every node from `from` up to the root.
    fn rebalance_from(&mut self, from: Option<NodeId>) {
        let mut cursor = from;
        while let Some(id) = cursor {
            let top = self.rebalance(id);
            cursor = self.arena[top].parent;
        }
    }
}

impl<T: Ord> OrderedTree<T> for AvlTree<T> {
    fn insert(&mut self, value: T) -> bool {
        match self.arena.locate(&value) {
            Descent::Found(_) => false,
            Descent::Vacant { parent, side } => {
                self.arena.attach(value, parent, side);
                self.rebalance_from(parent);
                true
            }
        }
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let Descent::Found(id) = self.arena.locate(value) else {
            return None;
        };
        let (removed, fixup) = self.arena.splice_out(id);
        self.rebalance_from(fixup);
        Some(removed)
    }

    fn arena(&self) -> &Arena<T> {
        &self.arena
    }
}

impl<'a, T: Ord> IntoIterator for &'a AvlTree<T> {
    type Item = crate::NodeRef<'a, T>;
    type IntoIter = crate::traverse::InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug + Ord,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.in_order().map(|n| n.value()))
            .finish()
    }
}
