//! A binary tree that is filled level by level.
//!
//! Values are not ordered in any way. [`Tree::insert_in_level_order`] always puts the new value in
//! the first free slot found by a breadth-first scan, so a tree built only through insertion is
//! always a complete binary tree.
//!
//! # Examples
//!
//! ```
//! use binary_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.size(), 0);
//! assert_eq!(tree.height(), 0);
//! assert!(!tree.contains(&10));
//!
//! //     10
//! //    /  \
//! //  20    30
//! tree.insert_in_level_order(10)
//!     .insert_in_level_order(20)
//!     .insert_in_level_order(30);
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.traverse_in_level_order(), [&10, &20, &30]);
//! assert_eq!(tree.traverse_in_order(), [&20, &10, &30]);
//!
//! // Trees can be compared with each other through their roots.
//! let mirror = Tree::invert(tree.root());
//! assert!(Tree::is_mirror(mirror.as_ref(), tree.root()));
//! ```

use std::collections::VecDeque;

use crate::node::Node;
use crate::queue::Queue;

/// A binary tree owning an optional root [`Node`]. Inserting into a `Tree` never compares
/// values; it only ever fills the next free position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<V> {
    root: Option<Node<V>>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a hand-built root. The result may not be complete.
impl<V> From<Node<V>> for Tree<V> {
    fn from(root: Node<V>) -> Self {
        Self { root: Some(root) }
    }
}

impl<V> FromIterator<V> for Tree<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<V> Extend<V> for Tree<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert_in_level_order(value);
        }
    }
}

impl<V> Tree<V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root of the tree, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_ref()
    }

    /// Mutable access to the root of the tree, if the tree isn't empty.
    pub fn root_mut(&mut self) -> Option<&mut Node<V>> {
        self.root.as_mut()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        Self::subtree_size(self.root())
    }

    /// The number of nodes in the subtree rooted at `node`, which is 0 if there is no `node`.
    pub fn subtree_size(node: Option<&Node<V>>) -> usize {
        match node {
            None => 0,
            Some(n) => Self::subtree_size(n.left()) + 1 + Self::subtree_size(n.right()),
        }
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Returns `true` if any node in the tree holds a value equal to `value`.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.root().is_some_and(|root| root.contains(value))
    }

    /// Inserts `value` at the first position available in level order: the shallowest node with
    /// a free child slot, leftmost among those, with its left slot taken before its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert_in_level_order(10)
    ///     .insert_in_level_order(20)
    ///     .insert_in_level_order(30)
    ///     .insert_in_level_order(40);
    ///
    /// //       10
    /// //      /  \
    /// //    20    30
    /// //   /
    /// // 40
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.traverse_pre_order(), [&10, &20, &40, &30]);
    /// ```
    pub fn insert_in_level_order(&mut self, value: V) -> &mut Self {
        let was_complete = cfg!(debug_assertions) && self.is_complete();

        let leaf = Node::new(value);
        match self.root.as_mut() {
            Some(root) => {
                root.attach_in_level_order::<VecDeque<_>>(leaf);
            }
            None => {
                log::trace!("inserted node as the root of an empty tree");
                self.root = Some(leaf);
            }
        }

        // Filling the first gap in level order can't open a new one. A hand-built tree that
        // already had gaps is allowed to keep some.
        if cfg!(debug_assertions) {
            debug_assert!(
                !was_complete || self.is_complete(),
                "insertion broke a complete tree"
            );
        }
        self
    }

    /// The values of the tree in level order. Empty if the tree is.
    pub fn traverse_in_level_order(&self) -> Vec<&V> {
        self.root()
            .map(Node::traverse_level_order)
            .unwrap_or_default()
    }

    /// The values of the tree in order: left subtree, node, right subtree.
    pub fn traverse_in_order(&self) -> Vec<&V> {
        self.root().map(Node::traverse_in_order).unwrap_or_default()
    }

    /// The values of the tree in pre-order: node, left subtree, right subtree.
    pub fn traverse_pre_order(&self) -> Vec<&V> {
        self.root().map(Node::traverse_pre_order).unwrap_or_default()
    }

    /// The values of the tree in post-order: left subtree, right subtree, node.
    pub fn traverse_post_order(&self) -> Vec<&V> {
        self.root()
            .map(Node::traverse_post_order)
            .unwrap_or_default()
    }

    /// Returns `true` if every level of the tree is full except possibly the last, and the last
    /// level has no gaps to the left of its rightmost node.
    pub fn is_complete(&self) -> bool {
        self.is_complete_with::<VecDeque<_>>()
    }

    /// [`Tree::is_complete`] using `Q` as the work-list.
    fn is_complete_with<'a, Q>(&'a self) -> bool
    where
        Q: Queue<Option<&'a Node<V>>> + Default,
    {
        let mut queue = Q::default();
        queue.enqueue(self.root());
        let mut seen_gap = false;

        while let Some(slot) = queue.dequeue() {
            match slot {
                Some(_) if seen_gap => {
                    log::trace!("found a node after a gap in level order");
                    return false;
                }
                Some(node) => {
                    queue.enqueue(node.left());
                    queue.enqueue(node.right());
                }
                None => seen_gap = true,
            }
        }

        true
    }

    /// Returns `true` if `node` exists and has no children.
    pub fn is_leaf(node: Option<&Node<V>>) -> bool {
        node.is_some_and(Node::is_leaf)
    }

    /// Same as [`Tree::is_leaf`].
    pub fn is_leaf_node(node: Option<&Node<V>>) -> bool {
        Self::is_leaf(node)
    }

    /// Checks whether two subtrees mirror each other.
    ///
    /// Two missing nodes mirror each other and a missing node never mirrors a present one.
    ///
    /// **Note** When two nodes hold equal values they are reported as mirrors straight away
    /// without looking at their children. Only nodes with different values have their subtrees
    /// compared, left against right. So this is not a full structural mirror check.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Node, Tree};
    ///
    /// let mut a = Node::new(10);
    /// a.set_left(Node::new(20));
    ///
    /// let mut b = Node::new(10);
    /// b.set_left(Node::new(30));
    ///
    /// // The roots are equal so the children are never compared.
    /// assert!(Tree::is_mirror(Some(&a), Some(&b)));
    /// assert!(!Tree::is_mirror(Some(&a), None));
    /// ```
    pub fn is_mirror(a: Option<&Node<V>>, b: Option<&Node<V>>) -> bool
    where
        V: PartialEq,
    {
        match (a, b) {
            (None, None) => true,
            (None, Some(_)) | (Some(_), None) => false,
            (Some(a), Some(b)) if a.value() == b.value() => true,
            (Some(a), Some(b)) => {
                Self::is_mirror(a.left(), b.right()) && Self::is_mirror(a.right(), b.left())
            }
        }
    }

    /// Checks whether the tree rooted at `root` is a mirror of itself. Empty trees and single
    /// nodes always are.
    pub fn is_symmetric(root: Option<&Node<V>>) -> bool
    where
        V: PartialEq,
    {
        match root {
            None => true,
            Some(r) if r.is_leaf() => true,
            Some(_) => Self::is_mirror(root, root),
        }
    }

    /// Returns a copy of the subtree rooted at `node` with left and right swapped at every level.
    /// `node` itself is left untouched. The result always satisfies
    /// `Tree::is_mirror(Tree::invert(node).as_ref(), node)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let tree: Tree<_> = (1..=5).collect();
    /// let inverted = Tree::invert(tree.root());
    ///
    /// assert_eq!(
    ///     inverted.as_ref().map(|n| n.traverse_level_order()),
    ///     Some(vec![&1, &3, &2, &5, &4])
    /// );
    /// assert_eq!(Tree::invert(Tree::<i32>::new().root()), None);
    /// ```
    pub fn invert(node: Option<&Node<V>>) -> Option<Node<V>>
    where
        V: Clone,
    {
        let inverted = node.map(Node::mirrored);
        if let Some(inverted) = &inverted {
            log::trace!("inverted a subtree of {} nodes", inverted.size());
        }
        inverted
    }
}
