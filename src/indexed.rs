//! Indexed binary min-heap
//!
//! A binary min-heap stored in a `Vec`, paired with a hash map from each item
//! to its current position in that vector. The position map is what makes
//! arbitrary priority changes cheap: finding an item is O(1), and repairing
//! the heap after its priority moves in either direction is O(log n).
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(log n)   |
//! | `contains`        | O(1)       |
//! | `peek_min`        | O(1)       |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(log n)   |
//! | `priority`        | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_minpq::IndexedMinPriorityQueue;
//!
//! let mut pq = IndexedMinPriorityQueue::new();
//! pq.add("a".to_string(), 5).unwrap();
//! pq.add("b".to_string(), 3).unwrap();
//! pq.add("c".to_string(), 4).unwrap();
//!
//! // Lookups accept any borrowed form of the item.
//! pq.change_priority("a", 1).unwrap();
//! assert_eq!(pq.priority("a"), Ok(&1));
//!
//! assert_eq!(pq.remove_min().as_deref(), Ok("a"));
//! assert_eq!(pq.remove_min().as_deref(), Ok("b"));
//! assert_eq!(pq.remove_min().as_deref(), Ok("c"));
//! assert!(pq.is_empty());
//! ```

use crate::traits::{MinPriorityQueue, PqError};
use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use tracing::{debug, trace};

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// One heap slot: an item and its current priority
#[derive(Debug, Clone)]
struct Node<T, P> {
    item: T,
    priority: P,
}

/// A binary min-heap whose items can have their priority changed in place
///
/// Items are unique and act as their own handles: `contains`,
/// `change_priority` and `priority` look an item up by value. The item type is
/// cloned once on `add`, because it is held both by its heap slot and by the
/// position map.
///
/// The position map uses `S` as its hasher, [`FxBuildHasher`] by default.
pub struct IndexedMinPriorityQueue<T, P, S = FxBuildHasher> {
    /// Heap-ordered slots; the minimum is at index 0
    nodes: Vec<Node<T, P>>,
    /// Item -> index into `nodes`
    positions: HashMap<T, usize, S>,
}

impl<T, P> IndexedMinPriorityQueue<T, P> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }

    /// Creates an empty queue with room for `capacity` items before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<T, P, S> IndexedMinPriorityQueue<T, P, S> {
    /// Creates an empty queue whose position map uses the given hasher
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty queue with the given capacity and position map hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns how many items the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the item with the lowest priority without removing it
    pub fn peek_min(&self) -> Result<&T, PqError> {
        self.peek_min_with_priority().map(|(item, _)| item)
    }

    /// Returns the item with the lowest priority, together with that priority
    pub fn peek_min_with_priority(&self) -> Result<(&T, &P), PqError> {
        match self.nodes.first() {
            Some(node) => Ok((&node.item, &node.priority)),
            None => {
                trace!("peek rejected: queue is empty");
                Err(PqError::EmptyQueue)
            }
        }
    }

    /// Iterates over `(item, priority)` pairs in heap order
    ///
    /// The first pair is the minimum; the order of the rest is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.nodes.iter().map(|node| (&node.item, &node.priority))
    }

    /// Removes every item, keeping the allocated capacity
    pub fn clear(&mut self) {
        if !self.nodes.is_empty() {
            debug!(discarded = self.nodes.len(), "clearing priority queue");
        }
        self.nodes.clear();
        self.positions.clear();
    }
}

impl<T, P, S> IndexedMinPriorityQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: Ord,
    S: BuildHasher,
{
    /// Adds an item with the given priority
    ///
    /// # Errors
    /// Returns [`PqError::DuplicateItem`] if the item is already present; the
    /// queue is left unchanged.
    pub fn add(&mut self, item: T, priority: P) -> Result<(), PqError> {
        if self.positions.contains_key(&item) {
            trace!(len = self.nodes.len(), "add rejected: duplicate item");
            return Err(PqError::DuplicateItem);
        }

        let index = self.nodes.len();
        self.positions.insert(item.clone(), index);
        self.nodes.push(Node { item, priority });
        self.swim(index);
        Ok(())
    }

    /// Returns true if the item is present
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(item)
    }

    /// Returns the current priority of an item
    ///
    /// # Errors
    /// Returns [`PqError::NotFound`] if the item is not present.
    pub fn priority<Q>(&self, item: &Q) -> Result<&P, PqError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.positions.get(item) {
            Some(&index) => Ok(&self.nodes[index].priority),
            None => {
                trace!(len = self.nodes.len(), "priority lookup rejected: item not found");
                Err(PqError::NotFound)
            }
        }
    }

    /// Removes and returns the item with the lowest priority
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if there is nothing to remove.
    pub fn remove_min(&mut self) -> Result<T, PqError> {
        self.remove_min_with_priority().map(|(item, _)| item)
    }

    /// Removes the item with the lowest priority, returning it with its priority
    ///
    /// # Errors
    /// Returns [`PqError::EmptyQueue`] if there is nothing to remove.
    pub fn remove_min_with_priority(&mut self) -> Result<(T, P), PqError> {
        match self.pop_root() {
            Some(node) => Ok((node.item, node.priority)),
            None => {
                trace!("remove rejected: queue is empty");
                Err(PqError::EmptyQueue)
            }
        }
    }

    /// Replaces the priority of an item already in the queue
    ///
    /// The node is first swum toward the root and then sunk toward the
    /// leaves; at most one of the two moves it.
    ///
    /// # Errors
    /// Returns [`PqError::NotFound`] if the item is not present; the queue is
    /// left unchanged.
    pub fn change_priority<Q>(&mut self, item: &Q, priority: P) -> Result<(), PqError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&index) = self.positions.get(item) else {
            trace!(len = self.nodes.len(), "priority change rejected: item not found");
            return Err(PqError::NotFound);
        };

        self.nodes[index].priority = priority;
        let swum = self.swim(index);
        let settled = self.sink(swum);
        trace!(from = index, to = settled, "priority changed");
        Ok(())
    }

    /// Consumes the queue, returning its contents in non-decreasing priority order
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut sorted = Vec::with_capacity(self.nodes.len());
        while let Some(node) = self.pop_root() {
            sorted.push((node.item, node.priority));
        }
        sorted
    }

    /// Detaches the root, moving the last node into its slot and sinking it
    fn pop_root(&mut self) -> Option<Node<T, P>> {
        if self.nodes.is_empty() {
            return None;
        }

        let root = self.nodes.swap_remove(0);
        self.positions.remove(&root.item);
        if !self.nodes.is_empty() {
            self.reindex(0);
            self.sink(0);
        }
        Some(root)
    }

    /// Moves the node at `index` up while it is strictly smaller than its
    /// parent. Returns its final index.
    fn swim(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let up = parent(index);
            if self.nodes[index].priority < self.nodes[up].priority {
                self.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the node at `index` down while it is strictly larger than its
    /// smaller child (the left one on ties). Returns its final index.
    fn sink(&mut self, mut index: usize) -> usize {
        let len = self.nodes.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }
            let right = right_child(index);
            let child = if right < len && self.nodes[right].priority < self.nodes[left].priority {
                right
            } else {
                left
            };

            if self.nodes[index].priority > self.nodes[child].priority {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
        index
    }

    /// Exchanges two slots and rewrites both position entries
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    /// Points the position entry of the node at `index` back at `index`
    fn reindex(&mut self, index: usize) {
        let node = &self.nodes[index];
        let position = self.positions.get_mut(&node.item);
        debug_assert!(position.is_some(), "heap node at {index} has no position entry");
        if let Some(position) = position {
            *position = index;
        }
    }
}

impl<T, P, S> MinPriorityQueue<T, P> for IndexedMinPriorityQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: Ord,
    S: BuildHasher + Default,
{
    fn new() -> Self {
        Self::with_hasher(S::default())
    }

    fn add(&mut self, item: T, priority: P) -> Result<(), PqError> {
        Self::add(self, item, priority)
    }

    fn contains(&self, item: &T) -> bool {
        Self::contains(self, item)
    }

    fn peek_min(&self) -> Result<&T, PqError> {
        Self::peek_min(self)
    }

    fn remove_min(&mut self) -> Result<T, PqError> {
        Self::remove_min(self)
    }

    fn change_priority(&mut self, item: &T, priority: P) -> Result<(), PqError> {
        Self::change_priority(self, item, priority)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

impl<T, P, S: Default> Default for IndexedMinPriorityQueue<T, P, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Clone, P: Clone, S: Clone> Clone for IndexedMinPriorityQueue<T, P, S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            positions: self.positions.clone(),
        }
    }
}

impl<T: fmt::Debug, P: fmt::Debug, S> fmt::Debug for IndexedMinPriorityQueue<T, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinPriorityQueue")
            .field("nodes", &self.nodes)
            .finish()
    }
}
