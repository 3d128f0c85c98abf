//! The collection contract and its default behaviour.

use std::fmt;

use crate::cursor::{Cursor, CursorIter};
use crate::error::CollectionError;
use crate::growth;

/// A group of elements that can be counted and traversed.
///
/// Implementors supply two primitives, [`Collection::len`] and
/// [`Collection::cursor`]; every other operation has a default written only
/// in terms of those (plus the cursor's `remove`). Mutating defaults fail
/// with [`CollectionError::Unsupported`] until the implementor overrides
/// [`Collection::add`] or provides a cursor that can remove.
///
/// # Examples
///
/// ```rust
/// use strata::prelude::*;
/// use strata::mutable::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add_all([1, 2, 3, 4])?;
/// assert!(list.contains(&3));
/// list.retain_all(&ArrayList::from(vec![2, 4]))?;
/// assert_eq!(list.describe(), "[2, 4]");
/// # Ok::<(), strata::CollectionError>(())
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// The cursor produced by [`Collection::cursor`].
    type Cursor: Cursor<Self, Item = Self::Item>;

    /// Number of elements held.
    fn len(&self) -> usize;

    /// Creates a cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements through [`Collection::cursor`].
    fn elements(&self) -> CursorIter<'_, Self, Self::Cursor>
    where
        Self: Sized,
    {
        CursorIter::new(self, self.cursor())
    }

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.elements().any(|candidate| candidate == element)
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    fn contains_all<O>(&self, other: &O) -> bool
    where
        Self: Sized,
        O: Collection<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        other.elements().all(|element| self.contains(element))
    }

    /// Copies the elements into a vector.
    ///
    /// [`Collection::len`] only sizes the initial buffer; the element count
    /// comes from draining the cursor, and the buffer grows with the shared
    /// growth policy if the cursor yields more than announced.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityOverflow`] if the buffer cannot grow.
    fn to_vec(&self) -> Result<Vec<Self::Item>, CollectionError>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        let mut snapshot = Vec::with_capacity(self.len());
        for element in self.elements() {
            if snapshot.len() == snapshot.capacity() {
                let minimum = growth::required_capacity(snapshot.len(), 1)?;
                let capacity = growth::next_capacity(snapshot.capacity(), minimum)?;
                snapshot.reserve_exact(capacity - snapshot.len());
            }
            snapshot.push(element.clone());
        }
        Ok(snapshot)
    }

    /// Adds `element`, returning `true` if the collection changed.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] unless overridden.
    fn add(&mut self, element: Self::Item) -> Result<bool, CollectionError> {
        let _ = element;
        Err(CollectionError::unsupported("add"))
    }

    /// Adds every element produced by `elements`.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of [`Collection::add`].
    fn add_all<I>(&mut self, elements: I) -> Result<bool, CollectionError>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        let mut modified = false;
        for element in elements {
            modified |= self.add(element)?;
        }
        Ok(modified)
    }

    /// Removes the first element equal to `element`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] if the cursor cannot remove and a
    /// match is found.
    fn remove_element(&mut self, element: &Self::Item) -> Result<bool, CollectionError>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        let mut cursor = self.cursor();
        while cursor.has_next(self) {
            if cursor.next(self)? == element {
                cursor.remove(self)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Removes every element also contained in `other`.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures, [`CollectionError::Unsupported`] included.
    fn remove_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        Self: Sized,
        O: Collection<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        remove_where(self, |element| other.contains(element))
    }

    /// Keeps only the elements also contained in `other`.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures, [`CollectionError::Unsupported`] included.
    fn retain_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        Self: Sized,
        O: Collection<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        remove_where(self, |element| !other.contains(element))
    }

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures, [`CollectionError::Unsupported`] included.
    fn clear(&mut self) -> Result<(), CollectionError>
    where
        Self: Sized,
    {
        remove_where(self, |_| true).map(|_| ())
    }

    /// Renders the elements as `[a, b, c]`.
    fn describe(&self) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        let mut rendered = String::new();
        let _ = write_sequence(&mut rendered, self.elements());
        rendered
    }
}

/// Removes, through the collection's own cursor, every element matching
/// `predicate`. Returns `true` if anything was removed.
///
/// # Errors
///
/// Propagates cursor failures.
pub fn remove_where<C, P>(collection: &mut C, mut predicate: P) -> Result<bool, CollectionError>
where
    C: Collection,
    P: FnMut(&C::Item) -> bool,
{
    let mut modified = false;
    let mut cursor = collection.cursor();
    while cursor.has_next(collection) {
        if predicate(cursor.next(collection)?) {
            cursor.remove(collection)?;
            modified = true;
        }
    }
    Ok(modified)
}

/// Writes `elements` as `[a, b, c]`.
///
/// # Errors
///
/// Propagates the writer's error.
pub fn write_sequence<W, I>(writer: &mut W, elements: I) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    writer.write_char('[')?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            writer.write_str(", ")?;
        }
        write!(writer, "{element}")?;
    }
    writer.write_char(']')
}
