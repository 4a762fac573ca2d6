//! Totally ordered floating point priorities
//!
//! `f64` is only `PartialOrd`, so it cannot be used directly as a queue
//! priority. [`OrderedF64`] wraps it with the IEEE 754 `totalOrder` relation
//! from [`f64::total_cmp`]:
//!
//! ```text
//! -NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < +NaN
//! ```
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::{F64MinPriorityQueue, OrderedF64};
//!
//! let mut pq = F64MinPriorityQueue::new();
//! pq.add("b", 2.5.into()).unwrap();
//! pq.add("a", OrderedF64::new(-0.1)).unwrap();
//! assert_eq!(pq.peek_min(), Ok(&"a"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An `f64` with a total order
///
/// Equality and hashing agree with the ordering: two values are equal exactly
/// when their bit patterns are equal, so `-0.0 != 0.0` and a NaN equals
/// itself.
#[derive(Clone, Copy, Default)]
pub struct OrderedF64(f64);

impl OrderedF64 {
    /// Wraps a float
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped float
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for OrderedF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for OrderedF64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<OrderedF64> for f64 {
    fn from(value: OrderedF64) -> Self {
        value.0
    }
}

impl fmt::Debug for OrderedF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for OrderedF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
