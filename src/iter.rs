//! Iteration over a [`PriorityQueue`]
//!
//! Two very different walks are offered, and they are deliberately named
//! apart:
//!
//! - **Priority order** ([`PriorityQueue::drain_sorted`], `into_iter()` on an
//!   owned queue): every step is one `pop`, so the walk empties the queue.
//! - **Storage order** ([`PriorityQueue::iter`], `for x in &queue`): a
//!   read-only walk of the heap array. Only the first element is guaranteed to
//!   be the highest priority; the rest are in no useful order.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::PriorityQueue;
//!
//! let mut queue: PriorityQueue<i32> = PriorityQueue::from_vec(vec![2, 5, 1]);
//! assert_eq!(queue.iter().count(), 3);
//!
//! let drained: Vec<i32> = queue.drain_sorted().collect();
//! assert_eq!(drained, vec![5, 2, 1]);
//! assert!(queue.is_empty());
//! assert_eq!(queue.drain_sorted().next(), None);
//! ```

use std::iter::FusedIterator;
use std::slice;

use log::debug;

use crate::order::Order;
use crate::priority_queue::PriorityQueue;

/// Borrowing iterator over the storage in heap-array order
pub type Iter<'a, T> = slice::Iter<'a, T>;

impl<T, O> PriorityQueue<T, O> {
    /// Returns an iterator over the storage in heap-array order
    ///
    /// This does not modify the queue and does not yield sorted output.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Ord, O: Order> PriorityQueue<T, O> {
    /// Removes elements in priority order, one `pop` per step
    ///
    /// The iterator borrows the queue mutably, so the queue cannot be touched
    /// while draining. If the iterator is dropped before it is exhausted, the
    /// remaining elements are discarded and the queue is left empty.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { queue: self }
    }
}

/// Draining iterator returned by [`PriorityQueue::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T: Ord, O: Order> {
    queue: &'a mut PriorityQueue<T, O>,
}

impl<T: Ord, O: Order> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T: Ord, O: Order> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T: Ord, O: Order> FusedIterator for DrainSorted<'_, T, O> {}

impl<T: Ord, O: Order> Drop for DrainSorted<'_, T, O> {
    fn drop(&mut self) {
        if !self.queue.is_empty() {
            debug!(
                "sorted drain dropped with {} elements left; discarding them",
                self.queue.len()
            );
            self.queue.clear();
        }
    }
}

/// Owning iterator in priority order, returned by `into_iter()` on a queue
#[derive(Debug, Clone)]
pub struct IntoSorted<T, O> {
    queue: PriorityQueue<T, O>,
}

impl<T: Ord, O: Order> Iterator for IntoSorted<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T: Ord, O: Order> ExactSizeIterator for IntoSorted<T, O> {}

impl<T: Ord, O: Order> FusedIterator for IntoSorted<T, O> {}

impl<T: Ord, O: Order> IntoIterator for PriorityQueue<T, O> {
    type Item = T;
    type IntoIter = IntoSorted<T, O>;

    fn into_iter(self) -> IntoSorted<T, O> {
        IntoSorted { queue: self }
    }
}

impl<'a, T, O> IntoIterator for &'a PriorityQueue<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
