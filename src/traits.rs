//! Common traits for min-priority queues
//!
//! This module defines the contract shared by every priority queue in this
//! crate:
//!
//! - [`MinPriorityQueue`]: add, membership, peek/remove of the minimum, and
//!   in-place priority changes for items already enqueued
//! - [`PqError`]: the three recoverable failures those operations can report
//!
//! Unlike `std::collections::BinaryHeap`, items and priorities are stored
//! separately. The item is the identity (it must be unique within a queue) and
//! the priority is the ordering key, which may change over the item's lifetime.

/// Error type for priority queue operations
///
/// Every operation that returns one of these leaves the queue exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PqError {
    /// The item is already enqueued
    #[error("priority queue already contains the item")]
    DuplicateItem,
    /// The queue holds no items
    #[error("priority queue is empty")]
    EmptyQueue,
    /// The item is not enqueued
    #[error("priority queue does not contain the item")]
    NotFound,
}

/// A min-priority queue with mutable priorities
///
/// Items are unique: adding an item that is already present fails with
/// [`PqError::DuplicateItem`]. The item with the lowest priority is always
/// the next one returned by [`remove_min`](MinPriorityQueue::remove_min).
/// When several items share the lowest priority, which one is returned is
/// implementation-defined.
///
/// # Example
///
/// ```rust
/// use indexed_minpq::{IndexedMinPriorityQueue, MinPriorityQueue, PqError};
///
/// let mut pq: IndexedMinPriorityQueue<&str, u32> = MinPriorityQueue::new();
/// pq.add("write", 3).unwrap();
/// pq.add("read", 1).unwrap();
/// pq.add("sync", 2).unwrap();
///
/// assert_eq!(pq.add("read", 9), Err(PqError::DuplicateItem));
///
/// pq.change_priority(&"write", 0).unwrap();
/// assert_eq!(pq.remove_min(), Ok("write"));
/// assert_eq!(pq.remove_min(), Ok("read"));
/// assert_eq!(pq.remove_min(), Ok("sync"));
/// assert_eq!(pq.remove_min(), Err(PqError::EmptyQueue));
/// ```
pub trait MinPriorityQueue<T, P: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Adds an item with the given priority
    ///
    /// # Errors
    /// Returns [`PqError::DuplicateItem`] if the item is already present.
    fn add(&mut self, item: T, priority: P) -> Result<(), PqError>;

    /// Returns true if the item is present
    fn contains(&self, item: &T) -> bool;

    /// Returns the item with the lowest priority without removing it
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if there is nothing to peek at.
    fn peek_min(&self) -> Result<&T, PqError>;

    /// Removes and returns the item with the lowest priority
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if there is nothing to remove.
    fn remove_min(&mut self) -> Result<T, PqError>;

    /// Replaces the priority of an item already in the queue
    ///
    /// The new priority may be lower or higher than the old one.
    ///
    /// # Errors
    /// Returns [`PqError::NotFound`] if the item is not present.
    fn change_priority(&mut self, item: &T, priority: P) -> Result<(), PqError>;

    /// Returns the number of items in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
