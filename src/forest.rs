use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use super::{Error, Result};

/// Union-by-size forest with path compression over arbitrary items.
///
/// Each item registered with [`make_set`](#method.make_set) owns one slot
/// in a parent-pointer array. Sets are named by the index of their root
/// slot, which is what [`find_set`](#method.find_set) returns.
///
/// # Examples
///
/// ```
/// use graph_algos::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new();
/// for city in &["Oslo", "Bergen", "Tromsø"] {
///     forest.make_set(*city).unwrap();
/// }
///
/// assert_eq!(Ok(true), forest.union(&"Oslo", &"Bergen"));
/// assert_eq!(Ok(false), forest.union(&"Bergen", &"Oslo"));
/// assert_eq!(forest.find_set(&"Oslo"), forest.find_set(&"Bergen"));
/// assert_ne!(forest.find_set(&"Oslo"), forest.find_set(&"Tromsø"));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisjointSetForest<T: Hash + Eq> {
    entries: Vec<Cell<Entry>>,
    indices: HashMap<T, usize>,
    set_count: usize,
}
// Invariant: self.entries.len() == self.indices.len()

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Entry {
    Root { size: usize },
    Link(usize),
}

impl<T: Hash + Eq> Debug for DisjointSetForest<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "DisjointSetForest(")?;
        formatter.debug_list()
            .entries(self.entries.iter().map(Cell::get))
            .finish()?;
        write!(formatter, ")")
    }
}

impl<T: Hash + Eq> Default for DisjointSetForest<T> {
    fn default() -> Self {
        DisjointSetForest {
            entries: Vec::new(),
            indices: HashMap::new(),
            set_count: 0,
        }
    }
}

impl<T: Hash + Eq> DisjointSetForest<T> {
    /// Creates a forest with no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of items in all the sets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the forest devoid of items?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Has `item` been registered?
    pub fn contains(&self, item: &T) -> bool {
        self.indices.contains_key(item)
    }

    /// Registers `item` in a new singleton set.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateItem`] if `item` is already registered.
    pub fn make_set(&mut self, item: T) -> Result<()> {
        if self.indices.contains_key(&item) {
            return Err(Error::DuplicateItem);
        }

        self.indices.insert(item, self.entries.len());
        self.entries.push(Cell::new(Entry::Root { size: 1 }));
        self.set_count += 1;
        Ok(())
    }

    /// Finds the index of the root of `item`’s set.
    ///
    /// Every slot on the way to the root is repointed straight at it.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if `item` was never registered.
    pub fn find_set(&self, item: &T) -> Result<usize> {
        let start = self.index_of(item)?;
        Ok(self.find_root(start))
    }

    /// Joins the sets of the two given items.
    ///
    /// Returns `true` if the sets were different and have been merged,
    /// `false` if they were already the same. The root of the smaller set
    /// goes under the root of the larger; on a tie `b`’s root goes under
    /// `a`’s.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if either item was never registered. Nothing
    /// is changed in that case.
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;

        let a = self.find_root(a);
        let b = self.find_root(b);

        if a == b { return Ok(false); }

        let size_a = self.size(a);
        let size_b = self.size(b);
        let size = size_a + size_b;

        if size_a < size_b {
            self.set_entry(a, Entry::Link(b));
            self.set_entry(b, Entry::Root { size });
        } else {
            self.set_entry(b, Entry::Link(a));
            self.set_entry(a, Entry::Root { size });
        }

        self.set_count -= 1;
        log::trace!("merged sets {} and {} into a set of {}", a, b, size);
        Ok(true)
    }

    /// Determines whether two items are in the same set.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if either item was never registered.
    pub fn equiv(&self, a: &T, b: &T) -> Result<bool> {
        Ok(self.find_set(a)? == self.find_set(b)?)
    }

    /// The number of items in `item`’s set.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownItem`] if `item` was never registered.
    pub fn set_size(&self, item: &T) -> Result<usize> {
        let root = self.find_set(item)?;
        Ok(self.size(root))
    }

    // HELPERS

    fn index_of(&self, item: &T) -> Result<usize> {
        self.indices.get(item).copied().ok_or(Error::UnknownItem)
    }

    fn find_root(&self, start: usize) -> usize {
        let mut root = start;
        while let Entry::Link(parent) = self.entry(root) {
            root = parent;
        }

        let mut element = start;
        while let Entry::Link(parent) = self.entry(element) {
            self.set_entry(element, Entry::Link(root));
            element = parent;
        }

        root
    }

    fn size(&self, root: usize) -> usize {
        match self.entry(root) {
            Entry::Root { size } => size,
            Entry::Link(_) => unreachable!("size: non-root"),
        }
    }

    fn entry(&self, index: usize) -> Entry {
        self.entries[index].get()
    }

    fn set_entry(&self, index: usize, entry: Entry) {
        self.entries[index].set(entry);
    }
}
