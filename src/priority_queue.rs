//! Binary heap priority queue
//!
//! An array-backed implicit binary tree: the children of position `i` live at
//! `2i + 1` and `2i + 2`. The element at index 0 always has the highest
//! priority under the queue's [`Order`].
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `push`         | O(log n) amortized  |
//! | `pop`          | O(log n)            |
//! | `peek`         | O(1)                |
//! | `clear`        | O(n)                |
//! | `from_vec`     | O(n)                |
//! | indexed read   | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::{Ascending, PriorityQueue};
//!
//! let mut max_first = PriorityQueue::new();
//! max_first.push(3);
//! max_first.push(7);
//! max_first.push(5);
//! assert_eq!(max_first.peek(), Some(&7));
//!
//! let mut min_first = PriorityQueue::with_order(Ascending);
//! min_first.extend([3, 7, 5]);
//! assert_eq!(min_first.pop(), Some(3));
//! ```

use std::fmt;
use std::ops::Index;

use log::trace;

use crate::error::QueueError;
use crate::order::{Descending, Direction, Order};

/// A binary heap that yields its highest-priority element first
///
/// The comparator `O` is fixed at construction. With the default
/// [`Descending`] the queue behaves as a max-heap; with
/// [`Ascending`](crate::Ascending) it behaves as a min-heap.
///
/// Elements of equal priority leave the queue in an unspecified order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, O = Descending> {
    /// Heap-ordered storage; index 0 is the root
    data: Vec<T>,
    order: O,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty max-first queue
    ///
    /// Use [`with_order`](Self::with_order) for any other ordering.
    pub fn new() -> Self {
        Self::with_order(Descending)
    }

    /// Creates an empty max-first queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(Descending, capacity)
    }
}

impl<T: Ord, O: Order + Default> PriorityQueue<T, O> {
    /// Builds a queue from an unordered vector in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with_order(O::default(), data)
    }
}

impl<T: Ord> PriorityQueue<T, Direction> {
    /// Creates a queue whose order is chosen at runtime
    ///
    /// `ascending = false` yields the maximum first, `true` the minimum.
    /// `starting_values` are inserted one at a time.
    pub fn configured<I>(ascending: bool, starting_values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_order_and_values(Direction::from_ascending(ascending), starting_values)
    }
}

impl<T: Ord, O: Order> PriorityQueue<T, O> {
    /// Creates an empty queue with the given comparator
    pub fn with_order(order: O) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty queue with the given comparator and room for
    /// `capacity` elements
    pub fn with_capacity_and_order(order: O, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Creates a queue with the given comparator and pushes every value
    pub fn with_order_and_values<I>(order: O, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::with_order(order);
        queue.extend(values);
        queue
    }

    /// Builds a queue from an unordered vector using bottom-up heapify
    pub fn from_vec_with_order(order: O, data: Vec<T>) -> Self {
        let mut queue = Self { data, order };
        queue.rebuild();
        queue
    }

    /// Returns the comparator this queue was built with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n), plus amortized storage growth.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the highest-priority element
    ///
    /// Returns `None` if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Consumes the queue and returns its elements in priority order
    ///
    /// Index 0 of the result is the element `pop` would have returned first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Swaps the element at `index` with its parent while `Order::outranks`
    /// prefers the child
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order.outranks(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Swaps the element at `index` down with its higher-ranked child while
    /// `Order::outranks` prefers that child
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut best = left;
            if right < len && self.order.outranks(&self.data[right], &self.data[left]) {
                best = right;
            }

            if self.order.outranks(&self.data[best], &self.data[index]) {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }

    /// Restores the heap property over the whole storage
    fn rebuild(&mut self) {
        let len = self.data.len();
        trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, O> PriorityQueue<T, O> {
    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Discards every element
    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            trace!("clearing {} elements", self.data.len());
        }
        self.data.clear();
    }

    /// Returns the element at `index` in storage order, if any
    ///
    /// Storage order is heap-array order, not sorted order: only index 0 is
    /// guaranteed to be the highest-priority element.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the element at `index` in storage order
    ///
    /// # Errors
    /// Returns [`QueueError::IndexOutOfBounds`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, QueueError> {
        self.data.get(index).ok_or(QueueError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Returns the underlying storage in heap-array order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the queue and returns the storage in heap-array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the number of elements the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl<T, O: Default> Default for PriorityQueue<T, O> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            order: O::default(),
        }
    }
}

/// Bounds-checked positional read in storage order
///
/// # Panics
/// Panics with the [`QueueError`] message if `index >= len()`.
impl<T, O> Index<usize> for PriorityQueue<T, O> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Storage order, for debugging. Not sorted.
impl<T: fmt::Display, O> fmt::Display for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: Ord, O: Order + Default> From<Vec<T>> for PriorityQueue<T, O> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord, O: Order + Default> FromIterator<T> for PriorityQueue<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, O: Order> Extend<T> for PriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}
