//! Error type for priority queue operations
//!
//! Empty-queue queries are not errors: `pop` and `peek` return `None`.
//! The only failure is reading a position that does not exist.

use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// A positional read was past the end of the storage
    IndexOutOfBounds {
        /// The requested position
        index: usize,
        /// The number of elements at the time of the read
        len: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "index {} out of bounds for priority queue of length {}",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}
