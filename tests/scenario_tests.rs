//! End-to-end scenarios for the indexed queue with floating point priorities
//!
//! A single queue is carried through a fixed sequence of adds, removals and a
//! priority change, checking the minimum at each step. Both implementations
//! are driven through the same sequence.

use indexed_minpq::heap::BinaryHeapMinPriorityQueue;
use indexed_minpq::unsorted::UnsortedMinPriorityQueue;
use indexed_minpq::{IndexedMinPriorityQueue, MinPriorityQueue, OrderedF64, PqError};

fn p(value: f64) -> OrderedF64 {
    OrderedF64::new(value)
}

fn s(value: &str) -> String {
    value.to_string()
}

/// Adds "1".."6", "11" and "12" with matching priorities
fn seed<Q: MinPriorityQueue<String, OrderedF64>>(pq: &mut Q) {
    for (item, priority) in [
        ("1", 1.0),
        ("2", 2.0),
        ("3", 3.0),
        ("4", 4.0),
        ("5", 5.0),
        ("6", 6.0),
        ("11", 11.0),
        ("12", 12.0),
    ] {
        pq.add(s(item), p(priority)).unwrap();
    }
}

fn run_scenarios<Q: MinPriorityQueue<String, OrderedF64>>() {
    let mut pq = Q::new();

    // Seed, then check the minimum
    seed(&mut pq);
    assert_eq!(pq.len(), 8);
    assert_eq!(pq.peek_min(), Ok(&s("1")));

    // Smaller priorities take over the root
    pq.add(s("0"), p(0.0)).unwrap();
    assert_eq!(pq.peek_min(), Ok(&s("0")));
    pq.add(s("-1"), p(-0.1)).unwrap();
    assert_eq!(pq.peek_min(), Ok(&s("-1")));

    // Three removals come out in priority order
    assert_eq!(pq.remove_min(), Ok(s("-1")));
    assert_eq!(pq.remove_min(), Ok(s("0")));
    assert_eq!(pq.remove_min(), Ok(s("1")));
    assert_eq!(pq.len(), 7);

    // Lower "3" below everything, then drain
    pq.change_priority(&s("3"), p(0.1)).unwrap();
    let mut drained = Vec::new();
    while !pq.is_empty() {
        drained.push(pq.remove_min().unwrap());
    }
    assert_eq!(drained, vec!["3", "2", "4", "5", "6", "11", "12"]);
    assert_eq!(pq.remove_min(), Err(PqError::EmptyQueue));
}

#[test]
fn test_indexed_scenarios() {
    run_scenarios::<IndexedMinPriorityQueue<String, OrderedF64>>();
}

#[test]
fn test_unsorted_scenarios() {
    run_scenarios::<UnsortedMinPriorityQueue<String, OrderedF64>>();
}

#[test]
fn test_binary_heap_scenarios() {
    run_scenarios::<BinaryHeapMinPriorityQueue<String, OrderedF64>>();
}

#[test]
fn test_drain_priorities_are_non_decreasing() {
    let mut pq: IndexedMinPriorityQueue<String, OrderedF64> = IndexedMinPriorityQueue::new();
    seed(&mut pq);
    pq.add(s("0"), p(0.0)).unwrap();
    pq.add(s("-1"), p(-0.1)).unwrap();
    pq.change_priority("3", p(0.1)).unwrap();
    pq.change_priority("1", p(11.5)).unwrap();

    let sorted = pq.into_sorted_vec();
    assert_eq!(sorted.len(), 10);
    assert!(sorted.windows(2).all(|pair| pair[0].1 <= pair[1].1));
    assert_eq!(sorted[0].0, "-1");
    assert_eq!(sorted[sorted.len() - 1].0, "12");
}

#[test]
fn test_errors_leave_state_unchanged() {
    // Empty queue
    let mut pq: IndexedMinPriorityQueue<String, OrderedF64> = IndexedMinPriorityQueue::new();
    assert_eq!(pq.peek_min(), Err(PqError::EmptyQueue));
    assert_eq!(pq.remove_min(), Err(PqError::EmptyQueue));
    assert_eq!(pq.change_priority("3", p(0.1)), Err(PqError::NotFound));
    assert_eq!(pq.len(), 0);
    assert!(!pq.contains("3"));

    // Populated queue, absent item
    seed(&mut pq);
    let before: Vec<(String, OrderedF64)> = pq.iter().map(|(i, p)| (i.clone(), *p)).collect();

    assert_eq!(pq.change_priority("42", p(0.1)), Err(PqError::NotFound));
    assert_eq!(pq.priority("42"), Err(PqError::NotFound));
    assert_eq!(pq.add(s("5"), p(-10.0)), Err(PqError::DuplicateItem));

    let after: Vec<(String, OrderedF64)> = pq.iter().map(|(i, p)| (i.clone(), *p)).collect();
    assert_eq!(before, after);
    assert_eq!(pq.len(), 8);
    assert!(pq.contains("5"));
    assert!(!pq.contains("42"));
    assert_eq!(pq.priority("5"), Ok(&p(5.0)));
}

#[test]
fn test_peek_is_idempotent() {
    let mut pq: IndexedMinPriorityQueue<String, OrderedF64> = IndexedMinPriorityQueue::new();
    seed(&mut pq);

    for _ in 0..3 {
        assert_eq!(pq.peek_min(), Ok(&s("1")));
        assert_eq!(pq.len(), 8);
    }
    let peeked = pq.peek_min().cloned();
    assert_eq!(pq.remove_min(), peeked);
}
