//! External iteration protocol.
//!
//! A [`Cursor`] is a short-lived traversal position over a container. Unlike
//! [`Iterator`], it does not hold a borrow of the container between steps:
//! every step takes the container as an argument. This is what allows a
//! cursor to remove the element it just produced, and what makes the
//! fail-fast diagnostic observable: a structural modification performed
//! through any other path between two steps is reported as
//! [`CollectionError::ConcurrentModification`] on the next step.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::ArrayList;
//!
//! let mut list: ArrayList<i32> = (1..=5).collect();
//! let mut cursor = list.cursor();
//! while cursor.has_next(&list) {
//!     if *cursor.next(&list)? % 2 == 0 {
//!         cursor.remove(&mut list)?;
//!     }
//! }
//! assert_eq!(list.as_slice(), &[1, 3, 5]);
//! # Ok::<(), strata::CollectionError>(())
//! ```

use crate::error::CollectionError;

/// A forward cursor over the container `C`.
pub trait Cursor<C: ?Sized> {
    /// The element type produced by the cursor.
    type Item;

    /// Returns `true` if another call to [`Cursor::next`] may produce an
    /// element.
    fn has_next(&self, collection: &C) -> bool;

    /// Produces the next element.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::NoSuchElement`] when the traversal is exhausted.
    /// - [`CollectionError::ConcurrentModification`] when `collection` was
    ///   structurally modified outside this cursor.
    fn next<'a>(&mut self, collection: &'a C) -> Result<&'a Self::Item, CollectionError>;

    /// Removes and returns the element produced by the last call to `next`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Unsupported`] when the cursor has no removal
    ///   primitive (the default).
    /// - [`CollectionError::IllegalState`] without a preceding `next`, or
    ///   when called twice for one `next`.
    /// - [`CollectionError::ConcurrentModification`] as for `next`.
    fn remove(&mut self, collection: &mut C) -> Result<Self::Item, CollectionError> {
        let _ = collection;
        Err(CollectionError::unsupported("Cursor::remove"))
    }
}

/// A bidirectional cursor over a list, positioned between elements.
pub trait ListCursor<C: ?Sized>: Cursor<C> {
    /// Returns `true` if [`ListCursor::previous`] may produce an element.
    fn has_previous(&self, collection: &C) -> bool;

    /// Produces the previous element and moves the cursor backwards.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Cursor::next`].
    fn previous<'a>(&mut self, collection: &'a C) -> Result<&'a Self::Item, CollectionError>;

    /// Index of the element a subsequent `next` would return.
    fn next_index(&self, collection: &C) -> usize;

    /// Index of the element a subsequent `previous` would return, or `None`
    /// at the start of the list.
    fn previous_index(&self, collection: &C) -> Option<usize> {
        self.next_index(collection).checked_sub(1)
    }

    /// Replaces the element last produced by `next` or `previous`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] by default; otherwise
    /// [`CollectionError::IllegalState`] when nothing was produced since the
    /// last `remove`/`add`.
    fn set(&mut self, collection: &mut C, element: Self::Item) -> Result<Self::Item, CollectionError> {
        let _ = (collection, element);
        Err(CollectionError::unsupported("ListCursor::set"))
    }

    /// Inserts `element` immediately before the cursor position.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] by default.
    fn add(&mut self, collection: &mut C, element: Self::Item) -> Result<(), CollectionError> {
        let _ = (collection, element);
        Err(CollectionError::unsupported("ListCursor::add"))
    }
}

/// Runs a [`ListCursor`] backwards as a forward [`Cursor`].
#[derive(Debug, Clone)]
pub struct Descending<K>(K);

impl<K> Descending<K> {
    /// Wraps a list cursor, normally one positioned at the end of the list.
    pub const fn new(cursor: K) -> Self {
        Self(cursor)
    }
}

impl<C: ?Sized, K: ListCursor<C>> Cursor<C> for Descending<K> {
    type Item = K::Item;

    fn has_next(&self, collection: &C) -> bool {
        self.0.has_previous(collection)
    }

    fn next<'a>(&mut self, collection: &'a C) -> Result<&'a Self::Item, CollectionError> {
        self.0.previous(collection)
    }

    fn remove(&mut self, collection: &mut C) -> Result<Self::Item, CollectionError> {
        self.0.remove(collection)
    }
}

/// Drives a cursor as a standard [`Iterator`] over a shared borrow.
///
/// The shared borrow rules out structural modification while the adapter
/// lives, so the cursor cannot observe one.
pub struct CursorIter<'a, C: ?Sized, K> {
    collection: &'a C,
    cursor: K,
}

impl<'a, C: ?Sized, K> CursorIter<'a, C, K> {
    /// Creates an adapter stepping `cursor` over `collection`.
    pub const fn new(collection: &'a C, cursor: K) -> Self {
        Self { collection, cursor }
    }
}

impl<'a, C: ?Sized, K> Iterator for CursorIter<'a, C, K>
where
    K: Cursor<C>,
    K::Item: 'a,
{
    type Item = &'a K::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next(self.collection) {
            return None;
        }
        self.cursor.next(self.collection).ok()
    }
}

/// Compares a captured structural version against the live one.
pub(crate) fn check_modification(expected: usize, actual: usize) -> Result<(), CollectionError> {
    if expected == actual {
        Ok(())
    } else {
        tracing::debug!(expected, actual, "structural modification outside cursor");
        Err(CollectionError::ConcurrentModification)
    }
}
