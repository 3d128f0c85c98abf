//! Hash set over [`HashMap`].
//!
//! Every element is a key mapped to the unit value, so membership,
//! insertion and removal are exactly the map's key operations.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::HashSet;
//!
//! let mut set = HashSet::new();
//! assert!(set.add("x")?);
//! assert!(!set.add("x")?);
//! assert!(set.contains(&"x"));
//! assert_eq!(set.len(), 1);
//! # Ok::<(), strata::CollectionError>(())
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::cursor::Cursor;
use crate::error::CollectionError;
use crate::skeletal::collection::write_sequence;
use crate::skeletal::{Collection, Entry, Map, Set, set};

use super::hash_map::{DefaultHashBuilder, HashEntryCursor, HashMap};

/// A set of distinct elements backed by a [`HashMap`] with unit values.
#[derive(Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    map: HashMap<T, (), S>,
}

impl<T> HashSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Creates an empty set with room for `capacity` buckets.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }
}

impl<T, S> HashSet<T, S> {
    /// Creates an empty set hashing with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    /// The elements in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.map.keys()
    }
}

/// Cursor over a [`HashSet`].
#[derive(Debug, Clone)]
pub struct SetCursor(HashEntryCursor);

impl<T, S> Cursor<HashSet<T, S>> for SetCursor {
    type Item = T;

    fn has_next(&self, set: &HashSet<T, S>) -> bool {
        self.0.has_next(&set.map)
    }

    fn next<'a>(&mut self, set: &'a HashSet<T, S>) -> Result<&'a T, CollectionError> {
        self.0.next(&set.map).map(Entry::key)
    }

    fn remove(&mut self, set: &mut HashSet<T, S>) -> Result<T, CollectionError> {
        self.0.remove(&mut set.map).map(Entry::into_key)
    }
}

impl<T, S> Collection for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;
    type Cursor = SetCursor;

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    fn cursor(&self) -> SetCursor {
        SetCursor(self.map.entry_cursor())
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.map.contains_key(element)
    }

    fn add(&mut self, element: T) -> Result<bool, CollectionError> {
        Ok(self.map.put(element, ())?.is_none())
    }

    fn remove_element(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        Ok(self.map.remove_entry(element).is_some())
    }

    fn remove_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        O: Collection<Item = T>,
        T: PartialEq,
    {
        set::remove_all(self, other)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.map.clear()
    }
}

impl<T, S> Set for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for HashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for HashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}
