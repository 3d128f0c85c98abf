//! The list contract and the index-based default cursor.

use crate::bounds;
use crate::cursor::{Cursor, ListCursor, check_modification};
use crate::error::CollectionError;

use super::Collection;

/// An ordered collection with positional access.
///
/// Implementors supply [`List::get`] and [`List::list_cursor`]. Lists that
/// can change supply [`List::set`], [`List::add_at`] and [`List::remove_at`],
/// and bump [`List::modification_count`] on every structural change so that
/// [`IndexCursor`] can fail fast.
pub trait List: Collection {
    /// The bidirectional cursor produced by [`List::list_cursor`].
    type ListCursor: ListCursor<Self, Item = Self::Item>;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] outside `[0, len)`.
    fn get(&self, index: usize) -> Result<&Self::Item, CollectionError>;

    /// Creates a list cursor whose first `next` returns the element at
    /// `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] outside `[0, len]`.
    fn list_cursor(&self, index: usize) -> Result<Self::ListCursor, CollectionError>;

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] unless overridden.
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item, CollectionError> {
        let _ = (index, element);
        Err(CollectionError::unsupported("set"))
    }

    /// Inserts `element` at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] unless overridden.
    fn add_at(&mut self, index: usize, element: Self::Item) -> Result<(), CollectionError> {
        let _ = (index, element);
        Err(CollectionError::unsupported("add_at"))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] unless overridden.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item, CollectionError> {
        let _ = index;
        Err(CollectionError::unsupported("remove_at"))
    }

    /// Structural version, bumped on every structural modification.
    fn modification_count(&self) -> usize {
        0
    }

    /// Index of the first element equal to `element`.
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        let mut cursor = self.list_cursor(0).ok()?;
        while cursor.has_next(self) {
            if cursor.next(self).ok()? == element {
                return cursor.previous_index(self);
            }
        }
        None
    }

    /// Index of the last element equal to `element`.
    fn last_index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        let mut cursor = self.list_cursor(self.len()).ok()?;
        while cursor.has_previous(self) {
            if cursor.previous(self).ok()? == element {
                return Some(cursor.next_index(self));
            }
        }
        None
    }

    /// Pairwise equality with any other list; stops at the first mismatch.
    fn list_eq<O>(&self, other: &O) -> bool
    where
        Self: Sized,
        O: List<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.len() == other.len()
            && self
                .elements()
                .zip(other.elements())
                .all(|(left, right)| left == right)
    }
}

/// Cursor built purely from [`List::get`], [`List::set`], [`List::add_at`],
/// [`List::remove_at`] and [`List::modification_count`].
///
/// Works for any [`List`]; whether `remove`/`set`/`add` succeed depends on
/// which of those primitives the list overrides.
#[derive(Debug, Clone)]
pub struct IndexCursor {
    cursor: usize,
    last_returned: Option<usize>,
    expected_modification_count: usize,
}

impl IndexCursor {
    /// Creates a cursor over `list` positioned before `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] outside `[0, len]`.
    pub fn new<C: List + ?Sized>(list: &C, index: usize) -> Result<Self, CollectionError> {
        bounds::check_position(index, list.len())?;
        Ok(Self {
            cursor: index,
            last_returned: None,
            expected_modification_count: list.modification_count(),
        })
    }

    /// Creates a cursor over `list` positioned before the first element.
    pub fn start<C: List + ?Sized>(list: &C) -> Self {
        Self {
            cursor: 0,
            last_returned: None,
            expected_modification_count: list.modification_count(),
        }
    }
}

impl<C: List + ?Sized> Cursor<C> for IndexCursor {
    type Item = C::Item;

    fn has_next(&self, collection: &C) -> bool {
        self.cursor != collection.len()
    }

    fn next<'a>(&mut self, collection: &'a C) -> Result<&'a Self::Item, CollectionError> {
        check_modification(
            self.expected_modification_count,
            collection.modification_count(),
        )?;
        if self.cursor >= collection.len() {
            return Err(CollectionError::NoSuchElement);
        }
        let element = collection
            .get(self.cursor)
            .map_err(|_| CollectionError::ConcurrentModification)?;
        self.last_returned = Some(self.cursor);
        self.cursor += 1;
        Ok(element)
    }

    fn remove(&mut self, collection: &mut C) -> Result<Self::Item, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("remove without next"))?;
        check_modification(
            self.expected_modification_count,
            collection.modification_count(),
        )?;
        let removed = collection.remove_at(last)?;
        if last < self.cursor {
            self.cursor -= 1;
        }
        self.last_returned = None;
        self.expected_modification_count = collection.modification_count();
        Ok(removed)
    }
}

impl<C: List + ?Sized> ListCursor<C> for IndexCursor {
    fn has_previous(&self, _collection: &C) -> bool {
        self.cursor != 0
    }

    fn previous<'a>(&mut self, collection: &'a C) -> Result<&'a Self::Item, CollectionError> {
        check_modification(
            self.expected_modification_count,
            collection.modification_count(),
        )?;
        let index = self
            .cursor
            .checked_sub(1)
            .ok_or(CollectionError::NoSuchElement)?;
        let element = collection
            .get(index)
            .map_err(|_| CollectionError::ConcurrentModification)?;
        self.cursor = index;
        self.last_returned = Some(index);
        Ok(element)
    }

    fn next_index(&self, _collection: &C) -> usize {
        self.cursor
    }

    fn set(&mut self, collection: &mut C, element: Self::Item) -> Result<Self::Item, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("set without next or previous"))?;
        check_modification(
            self.expected_modification_count,
            collection.modification_count(),
        )?;
        let replaced = collection.set(last, element)?;
        self.expected_modification_count = collection.modification_count();
        Ok(replaced)
    }

    fn add(&mut self, collection: &mut C, element: Self::Item) -> Result<(), CollectionError> {
        check_modification(
            self.expected_modification_count,
            collection.modification_count(),
        )?;
        collection.add_at(self.cursor, element)?;
        self.cursor += 1;
        self.last_returned = None;
        self.expected_modification_count = collection.modification_count();
        Ok(())
    }
}
