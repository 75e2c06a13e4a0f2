// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! FIFO queue capability consumed by level-order traversal.

use std::collections::VecDeque;

use crate::error::TreeError;

/// A first-in first-out queue.
///
/// Level-order traversal only needs amortized O(1) `enqueue`/`dequeue`;
/// anything satisfying that can stand in for the default `VecDeque`.
pub trait Queue<T> {
    /// Add an item at the back.
    fn enqueue(&mut self, item: T);

    /// Remove the item at the front, or `TreeError::Empty`.
    fn dequeue(&mut self) -> Result<T, TreeError>;

    /// Look at the item at the front without removing it.
    fn peek(&self) -> Result<&T, TreeError>;

    /// Number of queued items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl<T> Queue<T> for VecDeque<T> {
    #[inline]
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T, TreeError> {
        return self.pop_front().ok_or(TreeError::Empty);
    }

    #[inline]
    fn peek(&self) -> Result<&T, TreeError> {
        return self.front().ok_or(TreeError::Empty);
    }

    #[inline]
    fn len(&self) -> usize {
        return VecDeque::len(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = VecDeque::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(Queue::len(&queue), 3);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.dequeue(), Ok(3));
        assert!(Queue::is_empty(&queue));
    }

    #[test]
    fn empty_queue_reports_empty() {
        let mut queue: VecDeque<u32> = VecDeque::new();
        assert_eq!(queue.dequeue(), Err(TreeError::Empty));
        assert_eq!(queue.peek(), Err(TreeError::Empty));
    }
}
