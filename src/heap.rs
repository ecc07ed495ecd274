//! Indexed binary min-heap.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::mem;

use super::{Error, Result};

/// A heap slot: an item together with its current priority.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityNode<T, P = f64> {
    /// The queued item.
    pub item: T,
    /// Its priority; smaller comes out first.
    pub priority: P,
}

/// Array-backed min-priority queue whose items can be reprioritized.
///
/// Alongside the heap array it keeps a map from each item to its current
/// position, so [`contains`](#method.contains) is O(1) and
/// [`change_priority`](#method.change_priority) is O(log n). Items are
/// unique: adding one that is already queued is an error.
///
/// # Examples
///
/// ```
/// use graph_algos::IndexedMinHeap;
///
/// let mut queue = IndexedMinHeap::new();
/// queue.add("b", 2.0).unwrap();
/// queue.add("a", 3.0).unwrap();
/// queue.change_priority(&"a", 1.0).unwrap();
///
/// assert_eq!(Ok("a"), queue.remove_min());
/// assert_eq!(Ok("b"), queue.remove_min());
/// assert!(queue.is_empty());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedMinHeap<T: Hash + Eq, P = f64> {
    nodes: Vec<PriorityNode<T, P>>,
    indices: HashMap<T, usize>,
}
// Invariant: self.indices[&self.nodes[i].item] == i for every slot i

impl<T: Hash + Eq + Debug, P: Debug> Debug for IndexedMinHeap<T, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "IndexedMinHeap(")?;
        formatter.debug_list()
            .entries(self.nodes.iter().map(|node| (&node.item, &node.priority)))
            .finish()?;
        write!(formatter, ")")
    }
}

impl<T: Hash + Eq, P> Default for IndexedMinHeap<T, P> {
    fn default() -> Self {
        IndexedMinHeap {
            nodes: Vec::new(),
            indices: HashMap::new(),
        }
    }
}

impl<T: Hash + Eq + Clone, P: PartialOrd + Copy> IndexedMinHeap<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            nodes: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// The number of queued items.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the queue devoid of items?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Is `item` currently queued?
    pub fn contains(&self, item: &T) -> bool {
        self.indices.contains_key(item)
    }

    /// The current priority of `item`, if it is queued.
    pub fn priority(&self, item: &T) -> Option<P> {
        self.indices.get(item).map(|&index| self.nodes[index].priority)
    }

    /// Queues `item` with the given priority.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateItem`] if `item` is already queued; the queue is
    /// left untouched.
    pub fn add(&mut self, item: T, priority: P) -> Result<()> {
        if self.indices.contains_key(&item) {
            return Err(Error::DuplicateItem);
        }

        let index = self.nodes.len();
        self.indices.insert(item.clone(), index);
        self.nodes.push(PriorityNode { item, priority });
        self.percolate_up(index);
        Ok(())
    }

    /// Returns the item with the smallest priority without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there are no items.
    pub fn peek_min(&self) -> Result<&T> {
        self.nodes.first()
            .map(|node| &node.item)
            .ok_or(Error::EmptyQueue)
    }

    /// Returns the smallest priority in the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there are no items.
    pub fn peek_min_priority(&self) -> Result<P> {
        self.nodes.first()
            .map(|node| node.priority)
            .ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// Ties between equal priorities are broken arbitrarily.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there are no items.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyQueue);
        }

        // The last slot moves into the root.
        let min = self.nodes.swap_remove(0);
        self.indices.remove(&min.item);

        if let Some(root) = self.nodes.first() {
            if let Some(index) = self.indices.get_mut(&root.item) {
                *index = 0;
            }
            self.percolate_down(0);
        }

        Ok(min.item)
    }

    /// Replaces the priority of a queued item and restores heap order.
    ///
    /// A smaller priority moves the item towards the root, a larger one
    /// towards the leaves, and an equal one does nothing.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchItem`] if `item` is not queued.
    pub fn change_priority(&mut self, item: &T, priority: P) -> Result<()> {
        let index = *self.indices.get(item).ok_or(Error::NoSuchItem)?;
        let old = mem::replace(&mut self.nodes[index].priority, priority);

        if priority < old {
            self.percolate_up(index);
        } else if old < priority {
            self.percolate_down(index);
        }

        Ok(())
    }

    // HELPERS

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !(self.nodes[index].priority < self.nodes[parent].priority) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        let len = self.nodes.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len { break; }

            let child = if right < len
                && self.nodes[right].priority < self.nodes[left].priority {
                right
            } else {
                left
            };

            if !(self.nodes[child].priority < self.nodes[index].priority) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }

    // Every reordering of slots goes through here, so the index map
    // never disagrees with the array once this returns.
    fn swap(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        for index in [a, b] {
            if let Some(slot) = self.indices.get_mut(&self.nodes[index].item) {
                *slot = index;
            }
        }
    }
}
