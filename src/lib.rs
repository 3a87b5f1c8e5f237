//! This crate exposes a plain binary tree, mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is built out of `Node`s. Every `Node` stores a value and has at most two
//! children, a left one and a right one. A `Node` without children is called a "leaf node". The
//! height of a tree is the number of `Node`s on the longest path from the root down to a leaf, so a
//! tree with a single `Node` has a height of 1 and an empty tree has a height of 0.
//!
//! Unlike a Binary Search Tree there is no ordering between the values. The [`Tree`] here is
//! filled one level at a time, left to right, which keeps it a *complete* binary tree: every
//! level is full except possibly the last, and the last level has no gaps on its left. That
//! keeps the height at `O(lg N)` where `N` is the number of nodes in the tree, without any
//! rebalancing.
//!
//! Trees can be walked in four orders:
//!
//! - level order, visiting each level left to right before moving down
//! - in order, visiting the left subtree, then the node, then the right subtree
//! - pre-order, visiting the node before its subtrees
//! - post-order, visiting the node after its subtrees
//!
//! and two trees can be compared structurally with [`Tree::is_mirror`], [`Tree::is_symmetric`]
//! and [`Tree::invert`].
//!
//! ```
//! use binary_tree::Tree;
//!
//! let tree: Tree<_> = (1..=7).collect();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.traverse_pre_order(), [&1, &2, &4, &5, &3, &6, &7]);
//! assert_eq!(tree.traverse_post_order(), [&4, &5, &2, &6, &7, &3, &1]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod queue;
pub mod tree;

#[cfg(test)]
mod test;

pub use node::{LevelOrder, Node};
pub use queue::Queue;
pub use tree::Tree;
