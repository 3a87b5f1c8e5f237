//! A single vertex of a binary tree.
//!
//! A [`Node`] owns its value and up to two children. There is no pointer back to the parent; a
//! node only knows about the subtree hanging below it, and every structural question it can
//! answer (height, containment, the various traversals) is about that subtree.
//!
//! # Examples
//!
//! ```
//! use binary_tree::Node;
//!
//! //     10
//! //    /  \
//! //  11    9
//! let mut root = Node::new(10);
//! root.set_left(Node::new(11)).set_right(Node::new(9));
//!
//! assert_eq!(root.height(), 2);
//! assert!(root.contains(&9));
//! assert_eq!(root.traverse_in_order(), [&11, &10, &9]);
//! assert_eq!(root.traverse_level_order(), [&10, &11, &9]);
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::queue::Queue;

/// A `Node` has a value and two child slots, either of which may be empty. Children are owned
/// exclusively by their parent so dropping a `Node` drops its whole subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<V> {
    value: V,
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,
}

impl<V> From<V> for Node<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V> Node<V> {
    /// Construct a new `Node` with the given `value` and no children.
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Mutable access to the left child, if there is one.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, if there is one.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Makes `node` the left child of this node, dropping whatever subtree was there before.
    /// Returns `self` so calls can be chained.
    pub fn set_left(&mut self, node: Self) -> &mut Self {
        self.left = Some(Box::new(node));
        self
    }

    /// Makes `node` the right child of this node, dropping whatever subtree was there before.
    /// Returns `self` so calls can be chained.
    pub fn set_right(&mut self, node: Self) -> &mut Self {
        self.right = Some(Box::new(node));
        self
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1. This walks the whole subtree on every call.
    pub fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// The number of nodes on the shortest path from this node down to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Node;
    ///
    /// // 1
    /// //  \
    /// //   2
    /// let mut root = Node::new(1);
    /// root.set_right(Node::new(2));
    ///
    /// // The missing left child isn't a leaf so it doesn't count.
    /// assert_eq!(root.min_height(), 2);
    /// ```
    pub fn min_height(&self) -> usize {
        match (self.left(), self.right()) {
            (None, None) => 1,
            (Some(only), None) | (None, Some(only)) => only.min_height() + 1,
            (Some(left), Some(right)) => left.min_height().min(right.min_height()) + 1,
        }
    }

    /// Checks whether the heights of this node's children differ by at most one.
    ///
    /// **Note** This only looks at this node's children. It does not check that the children are
    /// themselves balanced, so a `true` here says nothing about the rest of the subtree.
    pub fn is_balanced(&self) -> bool {
        match (self.left(), self.right()) {
            (None, None) => true,
            (Some(only), None) | (None, Some(only)) => only.height() <= 1,
            (Some(left), Some(right)) => left.height().abs_diff(right.height()) <= 1,
        }
    }

    /// The number of nodes in the subtree rooted at this node, including itself.
    pub fn size(&self) -> usize {
        self.left().map_or(0, Self::size) + 1 + self.right().map_or(0, Self::size)
    }

    /// Returns `true` if any node in this subtree holds a value equal to `value`. Nodes are
    /// visited in level order and the search stops at the first match.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.level_order().any(|node| node.value == *value)
    }

    /// A lazy breadth-first walk over the nodes of this subtree, starting with this node. Each
    /// level is visited left to right.
    pub fn level_order(&self) -> LevelOrder<'_, V> {
        LevelOrder::new(self)
    }

    /// The values of this subtree in level order.
    pub fn traverse_level_order(&self) -> Vec<&V> {
        self.level_order().map(Self::value).collect()
    }

    /// The values of this subtree visiting the left subtree, then this node, then the right
    /// subtree.
    pub fn traverse_in_order(&self) -> Vec<&V> {
        let mut values = Vec::new();
        self.collect_in_order(&mut values);
        values
    }

    /// The values of this subtree visiting this node, then the left subtree, then the right
    /// subtree.
    pub fn traverse_pre_order(&self) -> Vec<&V> {
        let mut values = Vec::new();
        self.collect_pre_order(&mut values);
        values
    }

    /// The values of this subtree visiting the left subtree, then the right subtree, then this
    /// node.
    pub fn traverse_post_order(&self) -> Vec<&V> {
        let mut values = Vec::new();
        self.collect_post_order(&mut values);
        values
    }

    /// Returns a copy of this subtree with the left and right children swapped at every level.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Node;
    ///
    /// let mut root = Node::new(1);
    /// root.set_left(Node::new(2));
    ///
    /// let mirrored = root.mirrored();
    /// assert!(mirrored.left().is_none());
    /// assert_eq!(mirrored.right().map(Node::value), Some(&2));
    /// ```
    pub fn mirrored(&self) -> Self
    where
        V: Clone,
    {
        Self {
            value: self.value.clone(),
            left: self.right().map(|n| Box::new(n.mirrored())),
            right: self.left().map(|n| Box::new(n.mirrored())),
        }
    }

    /// Attaches `leaf` in the first free child slot found in level order, preferring a node's
    /// left slot over its right. `Q` is the work-list for the scan. Returns how many nodes were
    /// dequeued before a slot was found.
    pub(crate) fn attach_in_level_order<'a, Q>(&'a mut self, leaf: Self) -> usize
    where
        Q: Queue<&'a mut Self> + Default,
    {
        let mut queue = Q::default();
        queue.enqueue(self);
        let mut scanned = 0;

        while !queue.is_empty() {
            let Some(node) = queue.dequeue() else { break };
            scanned += 1;
            let Node { left, right, .. } = node;

            if left.is_none() {
                *left = Some(Box::new(leaf));
                log::trace!("attached node as left child after scanning {} nodes", scanned);
                return scanned;
            }
            if let Some(left) = left.as_deref_mut() {
                queue.enqueue(left);
            }

            if right.is_none() {
                *right = Some(Box::new(leaf));
                log::trace!("attached node as right child after scanning {} nodes", scanned);
                return scanned;
            }
            if let Some(right) = right.as_deref_mut() {
                queue.enqueue(right);
            }
        }

        // Every dequeued node either has a free slot or enqueues both children, and a finite
        // tree has nodes with free slots.
        unreachable!("a finite subtree always has a free child slot")
    }

    fn collect_in_order<'a>(&'a self, values: &mut Vec<&'a V>) {
        if let Some(left) = self.left() {
            left.collect_in_order(values);
        }
        values.push(&self.value);
        if let Some(right) = self.right() {
            right.collect_in_order(values);
        }
    }

    fn collect_pre_order<'a>(&'a self, values: &mut Vec<&'a V>) {
        values.push(&self.value);
        if let Some(left) = self.left() {
            left.collect_pre_order(values);
        }
        if let Some(right) = self.right() {
            right.collect_pre_order(values);
        }
    }

    fn collect_post_order<'a>(&'a self, values: &mut Vec<&'a V>) {
        if let Some(left) = self.left() {
            left.collect_post_order(values);
        }
        if let Some(right) = self.right() {
            right.collect_post_order(values);
        }
        values.push(&self.value);
    }
}

/// Breadth-first iterator over the nodes of a subtree, created by [`Node::level_order`].
///
/// The work-list is any [`Queue`]; [`VecDeque`] unless another is asked for with
/// [`LevelOrder::new`].
pub struct LevelOrder<'a, V, Q = VecDeque<&'a Node<V>>> {
    queue: Q,
    _nodes: PhantomData<&'a Node<V>>,
}

impl<'a, V, Q> LevelOrder<'a, V, Q>
where
    Q: Queue<&'a Node<V>> + Default,
{
    /// Starts a level order walk at `root`.
    pub fn new(root: &'a Node<V>) -> Self {
        let mut queue = Q::default();
        queue.enqueue(root);
        Self {
            queue,
            _nodes: PhantomData,
        }
    }
}

impl<'a, V, Q> Iterator for LevelOrder<'a, V, Q>
where
    Q: Queue<&'a Node<V>>,
{
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.dequeue()?;
        if let Some(left) = node.left() {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right() {
            self.queue.enqueue(right);
        }
        Some(node)
    }
}
