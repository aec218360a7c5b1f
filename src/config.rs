//! Construction options
//!
//! [`QueueOptions`] collects the two settings a queue can be built with and
//! produces a [`PriorityQueue`] whose order is chosen at runtime.
//!
//! ```rust
//! use rust_priority_queue::QueueOptions;
//!
//! let mut queue = QueueOptions::new()
//!     .ascending(true)
//!     .starting_values(vec![5, 1, 3])
//!     .build();
//! assert_eq!(queue.pop(), Some(1));
//! ```

use log::debug;

use crate::order::Direction;
use crate::priority_queue::PriorityQueue;

/// Options for building a [`PriorityQueue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueOptions<T> {
    /// Yield the minimum first instead of the maximum (default `false`)
    pub ascending: bool,
    /// Values pushed one at a time when the queue is built (default empty)
    pub starting_values: Vec<T>,
}

impl<T> Default for QueueOptions<T> {
    fn default() -> Self {
        Self {
            ascending: false,
            starting_values: Vec::new(),
        }
    }
}

impl<T> QueueOptions<T> {
    /// Creates options with the defaults: descending, no starting values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the minimum is yielded first
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Replaces the starting values
    pub fn starting_values<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.starting_values = values.into_iter().collect();
        self
    }

    /// The order these options select
    pub fn direction(&self) -> Direction {
        Direction::from_ascending(self.ascending)
    }
}

impl<T: Ord> QueueOptions<T> {
    /// Builds the queue
    pub fn build(self) -> PriorityQueue<T, Direction> {
        debug!(
            "building priority queue: ascending={}, starting_values={}",
            self.ascending,
            self.starting_values.len()
        );
        PriorityQueue::configured(self.ascending, self.starting_values)
    }
}

impl<T: Ord> From<QueueOptions<T>> for PriorityQueue<T, Direction> {
    fn from(options: QueueOptions<T>) -> Self {
        options.build()
    }
}
