//! Queue and deque contracts.
//!
//! Both contracts come in two flavours for each operation: a probing form
//! that reports absence or refusal with `Option`/`bool`
//! (`offer`, `poll`, `peek`), and an asserting form that fails with a
//! [`CollectionError`] (`add_first`, `remove_first`, `get_first`).

use crate::cursor::{Cursor, CursorIter};
use crate::error::CollectionError;

use super::Collection;

/// A collection ordered for removal at its head.
pub trait Queue: Collection {
    /// Inserts `element` if possible, returning `false` when refused.
    fn offer(&mut self, element: Self::Item) -> bool;

    /// Removes and returns the head, or `None` when empty.
    fn poll(&mut self) -> Option<Self::Item>;

    /// Returns the head without removing it, or `None` when empty.
    fn peek(&self) -> Option<&Self::Item>;

    /// Returns the head without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn element(&self) -> Result<&Self::Item, CollectionError> {
        self.peek().ok_or(CollectionError::NoSuchElement)
    }

    /// Removes and returns the head.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn remove_head(&mut self) -> Result<Self::Item, CollectionError> {
        self.poll().ok_or(CollectionError::NoSuchElement)
    }
}

/// Implements [`Collection::add`] on top of [`Queue::offer`].
///
/// # Errors
///
/// [`CollectionError::IllegalState`] when the queue refuses the element.
pub fn add_via_offer<Q: Queue + ?Sized>(
    queue: &mut Q,
    element: Q::Item,
) -> Result<bool, CollectionError> {
    if queue.offer(element) {
        Ok(true)
    } else {
        Err(CollectionError::illegal_state("queue full"))
    }
}

/// A queue supporting insertion and removal at both ends.
///
/// # Examples
///
/// ```rust
/// use strata::prelude::*;
/// use strata::mutable::LinkedList;
///
/// let mut stack = LinkedList::new();
/// stack.push(1)?;
/// stack.push(2)?;
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.peek_first(), Some(&1));
/// # Ok::<(), strata::CollectionError>(())
/// ```
pub trait Deque: Queue {
    /// The cursor produced by [`Deque::descending_cursor`].
    type DescendingCursor: Cursor<Self, Item = Self::Item>;

    /// Inserts `element` at the front.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityOverflow`] if the deque cannot grow.
    fn add_first(&mut self, element: Self::Item) -> Result<(), CollectionError>;

    /// Inserts `element` at the back.
    ///
    /// # Errors
    ///
    /// [`CollectionError::CapacityOverflow`] if the deque cannot grow.
    fn add_last(&mut self, element: Self::Item) -> Result<(), CollectionError>;

    /// Removes and returns the first element, or `None` when empty.
    fn poll_first(&mut self) -> Option<Self::Item>;

    /// Removes and returns the last element, or `None` when empty.
    fn poll_last(&mut self) -> Option<Self::Item>;

    /// Returns the first element, or `None` when empty.
    fn peek_first(&self) -> Option<&Self::Item>;

    /// Returns the last element, or `None` when empty.
    fn peek_last(&self) -> Option<&Self::Item>;

    /// Creates a cursor running from the last element to the first.
    fn descending_cursor(&self) -> Self::DescendingCursor;

    /// Inserts at the front, returning `false` when refused.
    fn offer_first(&mut self, element: Self::Item) -> bool {
        self.add_first(element).is_ok()
    }

    /// Inserts at the back, returning `false` when refused.
    fn offer_last(&mut self, element: Self::Item) -> bool {
        self.add_last(element).is_ok()
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn remove_first(&mut self) -> Result<Self::Item, CollectionError> {
        self.poll_first().ok_or(CollectionError::NoSuchElement)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn remove_last(&mut self) -> Result<Self::Item, CollectionError> {
        self.poll_last().ok_or(CollectionError::NoSuchElement)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn get_first(&self) -> Result<&Self::Item, CollectionError> {
        self.peek_first().ok_or(CollectionError::NoSuchElement)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn get_last(&self) -> Result<&Self::Item, CollectionError> {
        self.peek_last().ok_or(CollectionError::NoSuchElement)
    }

    /// Removes the first element equal to `element`, scanning from the
    /// front.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures.
    fn remove_first_occurrence(&mut self, element: &Self::Item) -> Result<bool, CollectionError>
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

    /// Removes the last element equal to `element`, scanning from the back.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures.
    fn remove_last_occurrence(&mut self, element: &Self::Item) -> Result<bool, CollectionError>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        let mut cursor = self.descending_cursor();
        while cursor.has_next(self) {
            if cursor.next(self)? == element {
                cursor.remove(self)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Pushes onto the stack formed by the front of the deque.
    ///
    /// # Errors
    ///
    /// As [`Deque::add_first`].
    fn push(&mut self, element: Self::Item) -> Result<(), CollectionError> {
        self.add_first(element)
    }

    /// Pops from the stack formed by the front of the deque.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NoSuchElement`] when empty.
    fn pop(&mut self) -> Result<Self::Item, CollectionError> {
        self.remove_first()
    }

    /// Iterates from the last element to the first.
    fn descending_elements(&self) -> CursorIter<'_, Self, Self::DescendingCursor>
    where
        Self: Sized,
    {
        CursorIter::new(self, self.descending_cursor())
    }
}
