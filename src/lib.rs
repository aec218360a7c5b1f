//! Binary Heap Priority Queue for Rust
//!
//! This crate provides [`PriorityQueue`], an array-backed binary heap that
//! always yields its highest-priority element first. "Highest" is decided by
//! an [`Order`] fixed when the queue is built:
//!
//! - [`Descending`] (default): the maximum element comes out first
//! - [`Ascending`]: the minimum element comes out first
//! - [`Direction`]: either of the above, picked at runtime
//!
//! The queue is a plain single-owner container meant to be embedded in
//! schedulers, graph searches and event simulators. It does no locking; wrap
//! it in a mutex to share it between threads.
//!
//! # Features
//!
//! - O(log n) `push` and `pop`, O(1) `peek`
//! - O(n) bulk construction with [`PriorityQueue::from_vec`]
//! - Bounds-checked positional reads over the heap array
//! - An explicitly named draining iterator, [`PriorityQueue::drain_sorted`]
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::configured(false, vec![5, 1, 3, 2, 4]);
//! assert_eq!(queue.peek(), Some(&5));
//! assert_eq!(queue.pop(), Some(5));
//! assert_eq!(queue.pop(), Some(4));
//!
//! let mut queue = PriorityQueue::configured(true, vec![5, 1, 3, 2, 4]);
//! assert_eq!(queue.drain_sorted().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! assert!(queue.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod iter;
pub mod order;
pub mod priority_queue;

// Re-export the main types for convenience
pub use config::QueueOptions;
pub use error::QueueError;
pub use iter::{DrainSorted, IntoSorted, Iter};
pub use order::{Ascending, Descending, Direction, Order};
pub use priority_queue::PriorityQueue;
