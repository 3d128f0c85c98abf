//! Resizable array list.
//!
//! This module provides [`ArrayList`], a list backed by one contiguous
//! store that grows geometrically.
//!
//! # Overview
//!
//! - O(1) `get` and `set`
//! - amortized O(1) `add` at the end
//! - O(n) `add_at` and `remove_at` (the suffix is shifted by one)
//! - O(n) `remove_all`/`retain_all` in one compaction pass
//!
//! The store never shrinks on its own; [`ArrayList::trim_to_size`] releases
//! unused slots explicitly.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add(1)?;
//! list.add(2)?;
//! list.add(3)?;
//! assert_eq!(list.remove_at(1)?, 2);
//! assert_eq!(list.as_slice(), &[1, 3]);
//! assert_eq!(list.len(), 2);
//! # Ok::<(), strata::CollectionError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::bounds;
use crate::error::{CapacityOverflow, CollectionError};
use crate::growth;
use crate::skeletal::collection::write_sequence;
use crate::skeletal::{Collection, IndexCursor, List};

/// Capacity allocated by the first growth of an empty list.
const DEFAULT_CAPACITY: usize = 10;

// =============================================================================
// ArrayList Definition
// =============================================================================

/// A list backed by a contiguous, geometrically growing store.
///
/// # Time Complexity
///
/// | Operation     | Complexity     |
/// |---------------|----------------|
/// | `get`/`set`   | O(1)           |
/// | `add`         | amortized O(1) |
/// | `add_at`      | O(n)           |
/// | `remove_at`   | O(n)           |
/// | `contains`    | O(n)           |
/// | `remove_all`  | O(n * m)       |
#[derive(Clone)]
pub struct ArrayList<T> {
    /// Live elements occupy `[0, len)`; spare capacity is unused.
    elements: Vec<T>,
    /// Structural version for fail-fast cursors.
    modification_count: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list without allocating.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            modification_count: 0,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`growth::max_capacity_for`]`::<T>()`;
    /// [`ArrayList::try_with_capacity`] reports that as an error instead.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(list) => list,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityOverflow`] when `capacity` exceeds the
    /// addressable maximum for `T`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        let maximum = growth::max_capacity_for::<T>();
        if capacity > maximum {
            return Err(CapacityOverflow {
                required: capacity,
                maximum,
            }
            .into());
        }
        Ok(Self {
            elements: Vec::with_capacity(capacity),
            modification_count: 0,
        })
    }

    /// Number of elements the store can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Grows the store so it can hold at least `minimum` elements.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityOverflow`] when `minimum` exceeds the
    /// addressable maximum for `T`.
    pub fn ensure_capacity(&mut self, minimum: usize) -> Result<(), CollectionError> {
        self.grow(minimum)
    }

    /// Shrinks the store to the current length.
    pub fn trim_to_size(&mut self) {
        if self.elements.capacity() > self.elements.len() {
            self.bump_modification_count();
            self.elements.shrink_to_fit();
        }
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Borrowing iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the list, returning its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element matching `predicate` in one compaction pass.
    /// Returns `true` if anything was removed.
    pub fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.batch_remove(predicate)
    }

    /// Sorts the elements with `compare`, preserving the order of equal
    /// elements.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.elements.sort_by(compare);
        self.bump_modification_count();
    }

    fn grow(&mut self, minimum: usize) -> Result<(), CollectionError> {
        let capacity = self.elements.capacity();
        if minimum <= capacity {
            return Ok(());
        }
        let minimum = if capacity == 0 {
            minimum.max(DEFAULT_CAPACITY)
        } else {
            minimum
        };
        let new_capacity =
            growth::grow_capacity(capacity, minimum, growth::max_capacity_for::<T>())?;
        tracing::trace!(
            from = capacity,
            to = new_capacity,
            "growing array list store"
        );
        self.elements
            .reserve_exact(new_capacity - self.elements.len());
        Ok(())
    }

    /// Keeps the elements for which `remove` is false, writing survivors
    /// forward over the removed ones and dropping the vacated tail.
    fn batch_remove<P>(&mut self, mut remove: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(|element| !remove(element));
        let removed = before - self.elements.len();
        if removed > 0 {
            self.modification_count = self.modification_count.wrapping_add(removed);
        }
        removed > 0
    }

    #[inline]
    const fn bump_modification_count(&mut self) {
        self.modification_count = self.modification_count.wrapping_add(1);
    }
}

// =============================================================================
// Contract Implementations
// =============================================================================

impl<T> Collection for ArrayList<T> {
    type Item = T;
    type Cursor = IndexCursor;

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn cursor(&self) -> IndexCursor {
        IndexCursor::start(self)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(element)
    }

    fn to_vec(&self) -> Result<Vec<T>, CollectionError>
    where
        T: Clone,
    {
        Ok(self.elements.clone())
    }

    fn add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.grow(growth::required_capacity(self.elements.len(), 1)?)?;
        self.bump_modification_count();
        self.elements.push(element);
        Ok(true)
    }

    fn add_all<I>(&mut self, elements: I) -> Result<bool, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = elements.into_iter().collect();
        self.grow(growth::required_capacity(
            self.elements.len(),
            incoming.len(),
        )?)?;
        self.bump_modification_count();
        let modified = !incoming.is_empty();
        self.elements.extend(incoming);
        Ok(modified)
    }

    fn remove_element(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        match self.elements.iter().position(|candidate| candidate == element) {
            Some(index) => {
                self.bump_modification_count();
                self.elements.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        O: Collection<Item = T>,
        T: PartialEq,
    {
        Ok(self.batch_remove(|element| other.contains(element)))
    }

    fn retain_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        O: Collection<Item = T>,
        T: PartialEq,
    {
        Ok(self.batch_remove(|element| !other.contains(element)))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.bump_modification_count();
        self.elements.clear();
        Ok(())
    }
}

impl<T> List for ArrayList<T> {
    type ListCursor = IndexCursor;

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        bounds::check_index(index, self.elements.len())?;
        Ok(&self.elements[index])
    }

    fn list_cursor(&self, index: usize) -> Result<IndexCursor, CollectionError> {
        IndexCursor::new(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        bounds::check_index(index, self.elements.len())?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        bounds::check_position(index, self.elements.len())?;
        self.grow(growth::required_capacity(self.elements.len(), 1)?)?;
        self.bump_modification_count();
        self.elements.insert(index, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        bounds::check_index(index, self.elements.len())?;
        self.bump_modification_count();
        Ok(self.elements.remove(index))
    }

    #[inline]
    fn modification_count(&self) -> usize {
        self.modification_count
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|candidate| candidate == element)
    }

    fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().rposition(|candidate| candidate == element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            modification_count: 0,
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.bump_modification_count();
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, &self.elements)
    }
}

static_assertions::assert_impl_all!(ArrayList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, ListCursor};
    use rstest::rstest;

    #[rstest]
    fn test_new_does_not_allocate() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.capacity(), 0);
    }

    #[rstest]
    fn test_first_growth_uses_default_capacity() {
        let mut list = ArrayList::new();
        list.add(1).unwrap();
        assert!(list.capacity() >= DEFAULT_CAPACITY);
    }

    #[rstest]
    fn test_growth_is_geometric() {
        let mut list = ArrayList::with_capacity(10);
        for value in 0..10 {
            list.add(value).unwrap();
        }
        assert_eq!(list.capacity(), 10);
        list.add(10).unwrap();
        assert!(list.capacity() >= 15);
    }

    #[rstest]
    fn test_ensure_capacity_overflow() {
        let mut list: ArrayList<u64> = ArrayList::new();
        let result = list.ensure_capacity(usize::MAX);
        assert!(matches!(result, Err(CollectionError::CapacityOverflow(_))));
    }

    #[rstest]
    fn test_trim_to_size() {
        let mut list = ArrayList::with_capacity(32);
        list.add(1).unwrap();
        list.trim_to_size();
        assert_eq!(list.capacity(), 1);
    }

    #[rstest]
    fn test_batch_remove_counts_structural_changes() {
        let mut list: ArrayList<i32> = (0..10).collect();
        let before = list.modification_count();
        assert!(list.remove_if(|value| value % 2 == 0));
        assert_eq!(list.as_slice(), &[1, 3, 5, 7, 9]);
        assert_eq!(list.modification_count(), before + 5);
        assert!(!list.remove_if(|value| *value > 100));
        assert_eq!(list.modification_count(), before + 5);
    }

    #[rstest]
    fn test_display() {
        let list: ArrayList<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "[1, 2, 3]");
        assert_eq!(format!("{:?}", ArrayList::<i32>::new()), "[]");
    }

    #[rstest]
    fn test_cursor_add_and_set() {
        let mut list: ArrayList<i32> = vec![1, 3].into();
        let mut cursor = list.list_cursor(0).unwrap();
        assert_eq!(cursor.next(&list), Ok(&1));
        cursor.add(&mut list, 2).unwrap();
        assert_eq!(cursor.next(&list), Ok(&3));
        assert_eq!(cursor.set(&mut list, 30), Ok(3));
        assert_eq!(list.as_slice(), &[1, 2, 30]);
    }
}
