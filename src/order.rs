//! Ordering strategies for [`PriorityQueue`](crate::PriorityQueue)
//!
//! The queue never compares elements directly. Every comparison on the sift
//! path goes through [`Order::outranks`], which answers a single question:
//! should `a` leave the queue before `b`?
//!
//! Two zero-sized strategies are provided for static dispatch:
//!
//! - [`Descending`]: the maximum element is yielded first (the default)
//! - [`Ascending`]: the minimum element is yielded first
//!
//! [`Direction`] carries the same choice as a runtime value, for callers that
//! only learn the order from configuration (for example an `ascending: bool`).
//!
//! The trait is sealed: the queue relies on every strategy being a strict weak
//! ordering consistent with `T: Ord`, which user implementations could break.

/// Comparator fixed for the lifetime of a queue.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Order: sealed::Sealed + Clone {
    /// Returns true if `a` has strictly higher priority than `b`.
    ///
    /// Equal elements never outrank each other.
    fn outranks<T: Ord + ?Sized>(&self, a: &T, b: &T) -> bool;

    /// Returns true if the minimum element is yielded first.
    fn is_ascending(&self) -> bool;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Ascending {}
    impl Sealed for super::Descending {}
    impl Sealed for super::Direction {}
}

/// Max-first ordering: `pop` returns the largest element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl Order for Descending {
    #[inline]
    fn outranks<T: Ord + ?Sized>(&self, a: &T, b: &T) -> bool {
        a > b
    }

    #[inline]
    fn is_ascending(&self) -> bool {
        false
    }
}

/// Min-first ordering: `pop` returns the smallest element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl Order for Ascending {
    #[inline]
    fn outranks<T: Ord + ?Sized>(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn is_ascending(&self) -> bool {
        true
    }
}

/// Ordering chosen at runtime.
///
/// Costs one branch per comparison compared to [`Ascending`] and
/// [`Descending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Maximum first
    #[default]
    Descending,
    /// Minimum first
    Ascending,
}

impl Direction {
    /// Maps an `ascending` flag to a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }
}

impl Order for Direction {
    #[inline]
    fn outranks<T: Ord + ?Sized>(&self, a: &T, b: &T) -> bool {
        match self {
            Direction::Descending => Descending.outranks(a, b),
            Direction::Ascending => Ascending.outranks(a, b),
        }
    }

    #[inline]
    fn is_ascending(&self) -> bool {
        matches!(self, Direction::Ascending)
    }
}

impl From<Ascending> for Direction {
    fn from(_: Ascending) -> Self {
        Direction::Ascending
    }
}

impl From<Descending> for Direction {
    fn from(_: Descending) -> Self {
        Direction::Descending
    }
}
