use crate::queue::Queue;


/// A queue backed by a `Vec` that shifts on every dequeue. Slow, but nothing like a `VecDeque`,
/// which is the point when checking that the tree code only relies on [`Queue`].
pub(crate) struct VecQueue<T>(Vec<T>);

impl<T> Default for VecQueue<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Queue<T> for VecQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.0.push(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
