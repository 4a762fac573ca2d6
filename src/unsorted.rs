//! Unsorted linear-scan priority queue
//!
//! A straightforward [`MinPriorityQueue`] that keeps its nodes in insertion
//! order and scans them on every query. It needs nothing beyond `PartialEq`
//! on items, which makes it a useful reference to check
//! [`IndexedMinPriorityQueue`](crate::indexed::IndexedMinPriorityQueue)
//! against, and a baseline for benchmarks.
//!
//! When several items share the lowest priority, the one added first wins.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(n)       |
//! | `contains`        | O(n)       |
//! | `peek_min`        | O(n)       |
//! | `remove_min`      | O(n)       |
//! | `change_priority` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::MinPriorityQueue;
//! use indexed_minpq::unsorted::UnsortedMinPriorityQueue;
//!
//! let mut pq = UnsortedMinPriorityQueue::new();
//! pq.add("three", 3).unwrap();
//! pq.add("one", 1).unwrap();
//! pq.add("two", 2).unwrap();
//!
//! assert_eq!(pq.peek_min(), Ok(&"one"));
//! assert_eq!(pq.remove_min(), Ok("one"));
//! assert_eq!(pq.remove_min(), Ok("two"));
//! assert_eq!(pq.remove_min(), Ok("three"));
//! assert!(pq.remove_min().is_err());
//! ```

use tracing::trace;

use crate::traits::{MinPriorityQueue, PqError};

/// A min-priority queue backed by an unordered vector
#[derive(Debug, Clone)]
pub struct UnsortedMinPriorityQueue<T, P> {
    /// (item, priority) pairs in insertion order
    data: Vec<(T, P)>,
}

impl<T: PartialEq, P: Ord> MinPriorityQueue<T, P> for UnsortedMinPriorityQueue<T, P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn add(&mut self, item: T, priority: P) -> Result<(), PqError> {
        if self.contains(&item) {
            trace!(len = self.data.len(), "add rejected: duplicate item");
            return Err(PqError::DuplicateItem);
        }
        self.data.push((item, priority));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }

    fn peek_min(&self) -> Result<&T, PqError> {
        let Some(index) = self.min_index() else {
            trace!(len = 0, "peek rejected: queue is empty");
            return Err(PqError::EmptyQueue);
        };
        Ok(&self.data[index].0)
    }

    fn remove_min(&mut self) -> Result<T, PqError> {
        let Some(index) = self.min_index() else {
            trace!(len = 0, "remove rejected: queue is empty");
            return Err(PqError::EmptyQueue);
        };
        // `remove` rather than `swap_remove` keeps insertion order for ties.
        Ok(self.data.remove(index).0)
    }

    fn change_priority(&mut self, item: &T, priority: P) -> Result<(), PqError> {
        let Some(index) = self.position_of(item) else {
            trace!(len = self.data.len(), "priority change rejected: item not found");
            return Err(PqError::NotFound);
        };
        self.data[index].1 = priority;
        Ok(())
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: PartialEq, P: Ord> UnsortedMinPriorityQueue<T, P> {
    /// Index of the first node holding `item`
    fn position_of(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|(candidate, _)| candidate == item)
    }

    /// Index of the earliest node with the lowest priority
    fn min_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, (_, priority)) in self.data.iter().enumerate() {
            match best {
                Some(current) if self.data[current].1 <= *priority => {}
                _ => best = Some(index),
            }
        }
        best
    }
}

impl<T: PartialEq, P: Ord> Default for UnsortedMinPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
