//! This crate exposes a self-balancing Binary Search Tree (an AVL tree), a plain BST to compare
//! it against, and a one-dimensional nearest-neighbor classifier built on the AVL tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root to a leaf. A
//! plain BST fed sorted input has height `n - 1`. An AVL tree additionally keeps the heights of
//! every node's two subtrees within one of each other, which bounds its height by `O(lg N)`.
//!
//! ## Layout
//!
//! Both trees store nodes in an arena and hand out [`NodeId`]s and read-only [`NodeRef`]s.
//! Their shared behavior (search, extremes, the four traversals) comes from [`OrderedTree`].
//!
//! ```
//! use avl_nn::{AvlTree, BinarySearchTree, OrderedTree};
//!
//! let mut bst = BinarySearchTree::new();
//! let mut avl = AvlTree::new();
//! for x in 0..100 {
//!     bst.insert(x);
//!     avl.insert(x);
//! }
//!
//! assert_eq!(bst.height(), 99);
//! assert_eq!(avl.height(), 6);
//! assert!(avl.in_order().map(|n| *n.value()).eq(0..100));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod avl;
pub mod bst;
pub mod classifier;
pub mod config;
pub mod error;
pub mod traverse;
mod tree;
mod util;
pub mod wrapped;


pub use arena::{NodeId, NodeRef, EMPTY_HEIGHT};
pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use classifier::NearestNeighborClassifier;
pub use config::{ClassifierConfig, MAX_RESOLUTION};
pub use error::{ClassifierError, Result};
pub use tree::OrderedTree;
pub use wrapped::{LabelCounts, WrappedDictionary, KEY_TOLERANCE};
