//! Indexed Min-Priority Queues for Rust
//!
//! This crate provides a binary min-heap priority queue whose items can have
//! their priority changed after they were enqueued, in either direction, in
//! O(log n). Items are their own handles: they are unique within a queue and
//! are looked up by value through an index from item to heap position.
//!
//! # Features
//!
//! - **IndexedMinPriorityQueue**: O(log n) add, remove-min and change-priority;
//!   O(1) peek and membership
//! - **UnsortedMinPriorityQueue**: linear-scan implementation of the same
//!   contract, used as a reference and a baseline
//! - **BinaryHeapMinPriorityQueue**: the same contract over
//!   `std::collections::BinaryHeap`, changing priorities by remove-then-re-add
//! - **OrderedF64**: totally ordered `f64` for floating point priorities
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::{F64MinPriorityQueue, PqError};
//!
//! let mut pq = F64MinPriorityQueue::new();
//! pq.add("1", 1.0.into()).unwrap();
//! pq.add("3", 3.0.into()).unwrap();
//! pq.add("0", 0.0.into()).unwrap();
//!
//! pq.change_priority(&"3", (-0.5).into()).unwrap();
//! assert_eq!(pq.remove_min(), Ok("3"));
//! assert_eq!(pq.remove_min(), Ok("0"));
//! assert_eq!(pq.remove_min(), Ok("1"));
//! assert_eq!(pq.peek_min(), Err(PqError::EmptyQueue));
//! ```

pub mod heap;
pub mod indexed;
pub mod priority;
pub mod traits;
pub mod unsorted;

// Re-export the main types for convenience
pub use indexed::IndexedMinPriorityQueue;
pub use priority::OrderedF64;
pub use traits::{MinPriorityQueue, PqError};

/// An [`IndexedMinPriorityQueue`] keyed by floating point priorities
pub type F64MinPriorityQueue<T> = IndexedMinPriorityQueue<T, OrderedF64>;
