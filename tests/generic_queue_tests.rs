//! Generic tests for the priority queue across every ordering strategy
//!
//! These tests are written against `PriorityQueue<_, O>` for any `O: Order`
//! and then instantiated for the static strategies and the runtime
//! `Direction`, so each scenario checks both the max-first and min-first
//! behaviour.

use rust_priority_queue::{Ascending, Descending, Direction, Order, PriorityQueue, QueueError};

// Test helpers that work with any ordering

/// Sorts `values` into the order the queue should yield them
fn expected_order<O: Order>(order: &O, mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    if !order.is_ascending() {
        values.reverse();
    }
    values
}

/// Test that an empty queue reports absence instead of failing
fn test_empty_queue<O: Order>(order: O) {
    let mut queue: PriorityQueue<String, O> = PriorityQueue::with_order(order);
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.get(0), None);
}

/// Test that starting values come out fully sorted
fn test_starting_values<O: Order>(order: O) {
    let input = vec![5, 1, 3, 2, 4];
    let expected = expected_order(&order, input.clone());

    let mut queue = PriorityQueue::with_order_and_values(order, input);
    let mut popped = Vec::new();
    while let Some(value) = queue.pop() {
        popped.push(value);
    }
    assert_eq!(popped, expected);
}

/// Test that bulk construction and one-by-one insertion agree on pop order
fn test_heapify_matches_push<O: Order>(order: O) {
    let input: Vec<i32> = (0..64).map(|i| (i * 37) % 23 - 11).collect();

    let pushed = PriorityQueue::with_order_and_values(order.clone(), input.clone());
    let heapified = PriorityQueue::from_vec_with_order(order, input);

    assert_eq!(pushed.len(), heapified.len());
    assert_eq!(pushed.peek(), heapified.peek());
    assert_eq!(pushed.into_sorted_vec(), heapified.into_sorted_vec());
}

/// Test that peek always agrees with the next pop
fn test_peek_matches_pop<O: Order>(order: O) {
    let mut queue = PriorityQueue::with_order_and_values(order, vec![7, 3, 9, 1, 9, 4]);
    while !queue.is_empty() {
        let peeked = queue.peek().copied();
        assert_eq!(queue.pop(), peeked);
    }
}

/// Test with duplicate priorities
fn test_duplicate_priorities<O: Order>(order: O) {
    let mut queue = PriorityQueue::with_order(order.clone());
    queue.push((5, "a"));
    queue.push((5, "b"));
    queue.push((5, "c"));
    queue.push((1, "d"));
    queue.push((9, "e"));

    let first = queue.pop().map(|(p, _)| p);
    let last_priority = if order.is_ascending() { 9 } else { 1 };
    assert_eq!(first, Some(if order.is_ascending() { 1 } else { 9 }));

    // Items with the same priority can come in any order
    let mut seen = std::collections::HashSet::new();
    for _ in 0..3 {
        if let Some((priority, item)) = queue.pop() {
            assert_eq!(priority, 5);
            assert!(seen.insert(item));
        }
    }
    assert_eq!(seen.len(), 3);
    assert_eq!(queue.pop().map(|(p, _)| p), Some(last_priority));
}

/// Test that clear is idempotent and leaves a usable queue
fn test_clear<O: Order>(order: O) {
    let mut queue = PriorityQueue::with_order(order);
    queue.clear();
    assert!(queue.is_empty());

    queue.extend(0..50);
    assert_eq!(queue.len(), 50);
    queue.clear();
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.pop(), None);
    queue.clear();
    assert_eq!(queue.len(), 0);

    queue.push(12);
    assert_eq!(queue.peek(), Some(&12));
}

/// Test that positional reads follow storage order with the root at 0
fn test_positional_reads<O: Order>(order: O) {
    let queue = PriorityQueue::with_order_and_values(order.clone(), vec![4, 9, 2, 7]);
    let expected_root = if order.is_ascending() { 2 } else { 9 };

    assert_eq!(queue[0], expected_root);
    assert_eq!(queue.at(0), Ok(&expected_root));

    let mut storage: Vec<i32> = (0..queue.len()).map(|i| queue[i]).collect();
    storage.sort();
    assert_eq!(storage, vec![2, 4, 7, 9]);

    assert_eq!(
        queue.at(4),
        Err(QueueError::IndexOutOfBounds { index: 4, len: 4 })
    );
    assert_eq!(queue.get(4), None);
}

/// Test that a unique extreme inserted last comes straight back out
fn test_round_trip<O: Order>(order: O) {
    let mut queue = PriorityQueue::with_order_and_values(order.clone(), vec![10, -3, 44, 7]);
    let extreme = if order.is_ascending() { -100 } else { 100 };
    let len_before = queue.len();

    queue.push(extreme);
    assert_eq!(queue.pop(), Some(extreme));
    assert_eq!(queue.len(), len_before);
}

macro_rules! order_tests {
    ($module:ident, $order:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_queue() {
                test_empty_queue($order);
            }

            #[test]
            fn starting_values() {
                test_starting_values($order);
            }

            #[test]
            fn heapify_matches_push() {
                test_heapify_matches_push($order);
            }

            #[test]
            fn peek_matches_pop() {
                test_peek_matches_pop($order);
            }

            #[test]
            fn duplicate_priorities() {
                test_duplicate_priorities($order);
            }

            #[test]
            fn clear() {
                test_clear($order);
            }

            #[test]
            fn positional_reads() {
                test_positional_reads($order);
            }

            #[test]
            fn round_trip() {
                test_round_trip($order);
            }
        }
    };
}

order_tests!(descending, Descending);
order_tests!(ascending, Ascending);
order_tests!(direction_descending, Direction::Descending);
order_tests!(direction_ascending, Direction::Ascending);

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn scenario_a_default_is_max_first() {
    let mut queue = PriorityQueue::configured(false, vec![5, 1, 3, 2, 4]);
    for expected in [5, 4, 3, 2, 1] {
        assert_eq!(queue.pop(), Some(expected));
    }
    assert_eq!(queue.pop(), None);
}

#[test]
fn scenario_b_ascending_is_min_first() {
    let mut queue = PriorityQueue::configured(true, vec![5, 1, 3, 2, 4]);
    for expected in [1, 2, 3, 4, 5] {
        assert_eq!(queue.pop(), Some(expected));
    }
    assert_eq!(queue.pop(), None);
}

#[test]
fn scenario_c_empty_queue() {
    let mut queue: PriorityQueue<i32, Direction> =
        PriorityQueue::configured(false, Vec::new());
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.pop(), None);
}

#[test]
fn scenario_d_peek_tracks_root() {
    let mut queue = PriorityQueue::new();
    queue.push(10);
    queue.push(20);
    queue.push(5);

    assert_eq!(queue.peek(), Some(&20));
    assert_eq!(queue.pop(), Some(20));
    assert_eq!(queue.peek(), Some(&10));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_past_end_panics() {
    let queue = PriorityQueue::configured(false, vec![1, 2, 3]);
    let _value = queue[3];
}

#[test]
fn display_is_storage_order() {
    let queue: PriorityQueue<i32> = PriorityQueue::from_vec(vec![1, 2, 3]);
    // Heapify sifts the root down once: [1, 2, 3] -> [3, 2, 1]
    assert_eq!(queue.to_string(), "[3, 2, 1]");

    let rendered: Vec<String> = queue.iter().map(|v| v.to_string()).collect();
    assert_eq!(format!("[{}]", rendered.join(", ")), queue.to_string());
}

#[test]
fn drain_is_not_restartable() {
    let mut queue = PriorityQueue::configured(true, vec![3, 1, 2]);
    assert_eq!(queue.drain_sorted().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(queue.drain_sorted().next().is_none());
    assert!(queue.is_empty());
}

#[test]
fn queue_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PriorityQueue<i32>>();
    assert_send_sync::<PriorityQueue<String, Direction>>();
}
