//! Node storage shared by both tree engines.
//!
//! Nodes live in slots of a `Vec` and refer to each other through [`NodeId`]s instead of
//! pointers. A node owns its children in the sense that removing it from the tree is the only way
//! their slots get released, while the parent link is a plain back-reference that only the
//! rotation and unwind code follows.
//!
//! Removed slots are recycled through a free list, so a [`NodeId`] is only meaningful for the tree
//! that handed it out and only until that node is removed.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Height reported for an absent subtree. A leaf has height `0`.
pub const EMPTY_HEIGHT: isize = -1;

/// A stable handle to a node inside a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The slot index backing this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which child slot of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// One tree node. Only reachable from inside the crate.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) height: isize,
}

impl<T> Node<T> {
    fn leaf(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Where a descent by comparison ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Descent {
    /// A node comparing equal to the target.
    Found(NodeId),
    /// The target belongs in the empty `side` slot of `parent`. `parent` is `None` only for an
    /// empty tree.
    Vacant {
        parent: Option<NodeId>,
        side: Side,
    },
}

/// Slot storage plus the root link of one tree. Only reachable from inside the crate.
#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0]
            .as_ref()
            .expect("NodeId refers to a removed node")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0]
            .as_mut()
            .expect("NodeId refers to a removed node")
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let node = Some(Node::leaf(value, parent));
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                NodeId(slot)
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let node = self.slots[id.0]
            .take()
            .expect("released a node that was already removed");
        self.free.push(id.0);
        self.len -= 1;
        node.value
    }

    /// Cached height of an optional subtree.
    pub(crate) fn height(&self, id: Option<NodeId>) -> isize {
        id.map_or(EMPTY_HEIGHT, |id| self[id].height)
    }

    /// Recomputes the cached height of `id` from its children and reports whether it changed.
    pub(crate) fn fix_height(&mut self, id: NodeId) -> bool {
        let node = &self[id];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        let node = &mut self[id];
        let changed = node.height != height;
        node.height = height;
        changed
    }

    /// Left height minus right height.
    pub(crate) fn balance_factor(&self, id: NodeId) -> isize {
        let node = &self[id];
        self.height(node.left) - self.height(node.right)
    }

    /// Puts `new` wherever `old` hung from `parent` (or at the root when `parent` is `None`) and
    /// points `new` back at `parent`.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old), "parent does not own the child");
                    parent.right = new;
                }
            }
        }
        if let Some(new) = new {
            self[new].parent = parent;
        }
    }

    /// Walks from `from` toward the extreme node on `side`.
    pub(crate) fn extreme(&self, from: NodeId, side: Side) -> NodeId {
        let mut current = from;
        while let Some(next) = self[current].child(side) {
            current = next;
        }
        current
    }

    /// Descends by comparison from `from` until a match or an empty slot.
    pub(crate) fn locate_from(&self, from: NodeId, value: &T) -> Descent
    where
        T: Ord,
    {
        let mut current = from;
        loop {
            let node = &self[current];
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Descent::Found(current),
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    return Descent::Vacant {
                        parent: Some(current),
                        side,
                    }
                }
            }
        }
    }

    pub(crate) fn locate(&self, value: &T) -> Descent
    where
        T: Ord,
    {
        match self.root {
            Some(root) => self.locate_from(root, value),
            None => Descent::Vacant {
                parent: None,
                side: Side::Left,
            },
        }
    }

    /// Hangs a new leaf in an empty slot found by [`Arena::locate`].
    pub(crate) fn attach(&mut self, value: T, parent: Option<NodeId>, side: Side) -> NodeId {
        let id = self.alloc(value, parent);
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                let slot = self[parent].child_mut(side);
                debug_assert!(slot.is_none(), "attaching over an existing child");
                *slot = Some(id);
            }
        }
        id
    }

    /// Removes the value stored at `id` from the tree structure.
    ///
    /// A node with at most one child is spliced out and its child takes its place. A node with
    /// two children keeps its slot and takes over the value of its in-order predecessor, whose
    /// node is spliced out instead.
    ///
    /// Returns the removed value and the lowest node whose subtree changed shape, which is where
    /// height bookkeeping has to resume.
    pub(crate) fn splice_out(&mut self, id: NodeId) -> (T, Option<NodeId>) {
        let node = &self[id];
        match (node.left, node.right) {
            (Some(left), Some(_)) => {
                let predecessor = self.extreme(left, Side::Right);
                let (value, fixup) = self.splice_out(predecessor);
                let removed = std::mem::replace(&mut self[id].value, value);
                (removed, fixup)
            }
            (child, None) | (None, child) => {
                let parent = node.parent;
                self.replace_child(parent, id, child);
                (self.release(id), parent)
            }
        }
    }
}

/// A read-only handle to a node, carrying a borrow of the tree it belongs to so that links can
/// be followed.
pub struct NodeRef<'a, T> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.arena[self.id]
    }

    fn link(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef::new(self.arena, id))
    }

    /// The handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The stored value.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// Cached height. A leaf has height `0`.
    pub fn height(&self) -> isize {
        self.node().height
    }

    /// Left subtree height minus right subtree height.
    pub fn balance_factor(&self) -> isize {
        self.arena.balance_factor(self.id)
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.node().parent)
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.node().left)
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.node().right)
    }

    /// Searches the subtree rooted here. If no node compares equal to `value`, the last node
    /// visited is returned instead: the node under which `value` would be inserted.
    pub fn search(&self, value: &T) -> NodeRef<'a, T>
    where
        T: Ord,
    {
        match self.arena.locate_from(self.id, value) {
            Descent::Found(id) => NodeRef::new(self.arena, id),
            Descent::Vacant { parent, .. } => {
                NodeRef::new(self.arena, parent.expect("descent from a node has a parent"))
            }
        }
    }

    /// The minimum of the subtree rooted here.
    pub fn min(&self) -> NodeRef<'a, T> {
        NodeRef::new(self.arena, self.arena.extreme(self.id, Side::Left))
    }

    /// The maximum of the subtree rooted here.
    pub fn max(&self) -> NodeRef<'a, T> {
        NodeRef::new(self.arena, self.arena.extreme(self.id, Side::Right))
    }
}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}
