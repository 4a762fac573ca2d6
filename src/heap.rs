//! Priority queue over the standard library's binary heap
//!
//! [`BinaryHeapMinPriorityQueue`] implements [`MinPriorityQueue`] on top of
//! [`std::collections::BinaryHeap`], wrapping every node in [`Reverse`] to
//! turn the max-heap into a min-heap. `BinaryHeap` has no way to find or
//! reorder an element in place, so membership is a linear scan and
//! `change_priority` removes the node and adds it back with the new
//! priority.
//!
//! Nodes with equal priority come out in the order they were added. A node
//! whose priority was changed counts as freshly added.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity                          |
//! |-------------------|-------------------------------------|
//! | `add`             | O(n) duplicate scan, O(log n) push  |
//! | `contains`        | O(n)                                |
//! | `peek_min`        | O(1)                                |
//! | `remove_min`      | O(log n)                            |
//! | `change_priority` | O(n)                                |
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::MinPriorityQueue;
//! use indexed_minpq::heap::BinaryHeapMinPriorityQueue;
//!
//! let mut pq = BinaryHeapMinPriorityQueue::new();
//! pq.add("three", 3).unwrap();
//! pq.add("one", 1).unwrap();
//! pq.add("two", 2).unwrap();
//!
//! pq.change_priority(&"three", 0).unwrap();
//! assert_eq!(pq.remove_min(), Ok("three"));
//! assert_eq!(pq.remove_min(), Ok("one"));
//! assert_eq!(pq.peek_min(), Ok(&"two"));
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::mem;

use tracing::trace;

use crate::traits::{MinPriorityQueue, PqError};

/// A heap node, ordered by priority and then by insertion sequence
#[derive(Debug, Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
    seq: u64,
}

impl<T, P: Ord> Entry<T, P> {
    fn key(&self) -> (&P, u64) {
        (&self.priority, self.seq)
    }
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A min-priority queue backed by `std::collections::BinaryHeap`
#[derive(Debug, Clone)]
pub struct BinaryHeapMinPriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    /// Sequence number handed to the next pushed node
    next_seq: u64,
}

impl<T: PartialEq, P: Ord> MinPriorityQueue<T, P> for BinaryHeapMinPriorityQueue<T, P> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn add(&mut self, item: T, priority: P) -> Result<(), PqError> {
        if self.contains(&item) {
            trace!(len = self.heap.len(), "add rejected: duplicate item");
            return Err(PqError::DuplicateItem);
        }
        self.push(item, priority);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.heap.iter().any(|Reverse(entry)| entry.item == *item)
    }

    fn peek_min(&self) -> Result<&T, PqError> {
        match self.heap.peek() {
            Some(Reverse(entry)) => Ok(&entry.item),
            None => {
                trace!(len = 0, "peek rejected: queue is empty");
                Err(PqError::EmptyQueue)
            }
        }
    }

    fn remove_min(&mut self) -> Result<T, PqError> {
        match self.heap.pop() {
            Some(Reverse(entry)) => Ok(entry.item),
            None => {
                trace!(len = 0, "remove rejected: queue is empty");
                Err(PqError::EmptyQueue)
            }
        }
    }

    fn change_priority(&mut self, item: &T, priority: P) -> Result<(), PqError> {
        let mut entries = mem::take(&mut self.heap).into_vec();
        let Some(index) = entries.iter().position(|Reverse(entry)| entry.item == *item) else {
            // Still a valid heap, so rebuilding does not reorder it
            self.heap = BinaryHeap::from(entries);
            trace!(len = self.heap.len(), "priority change rejected: item not found");
            return Err(PqError::NotFound);
        };

        let Reverse(entry) = entries.swap_remove(index);
        self.heap = BinaryHeap::from(entries);
        self.push(entry.item, priority);
        trace!(len = self.heap.len(), "priority changed by re-adding item");
        Ok(())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P: Ord> BinaryHeapMinPriorityQueue<T, P> {
    fn push(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }
}

impl<T: PartialEq, P: Ord> Default for BinaryHeapMinPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
