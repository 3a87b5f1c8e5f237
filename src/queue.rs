//! The FIFO work-list used by the breadth-first algorithms of this crate.
//!
//! The tree code only ever talks to the [`Queue`] trait, so any container that can hand items
//! back in the order they went in will do. [`VecDeque`] is the one used by default.

use std::collections::VecDeque;

/// A first-in, first-out container.
pub trait Queue<T> {
    /// Adds an item to the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes the item at the front of the queue, if there is one.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns `true` if there is nothing left to dequeue.
    fn is_empty(&self) -> bool;
}

impl<T> Queue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}
