//! Fixed-size list view over a mutable slice.
//!
//! [`FixedList`] supplies only the read and replace primitives of [`List`].
//! Everything that would change its length falls through to the skeletal
//! defaults and fails with [`CollectionError::Unsupported`].
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::FixedList;
//!
//! let mut backing = [3, 1, 2];
//! let mut list = FixedList::new(&mut backing);
//! assert_eq!(list.set(0, 0)?, 3);
//! assert!(list.add(4).is_err());
//! assert_eq!(list.index_of(&2), Some(2));
//! assert_eq!(backing, [0, 1, 2]);
//! # Ok::<(), strata::CollectionError>(())
//! ```

use std::fmt;

use crate::bounds;
use crate::error::CollectionError;
use crate::skeletal::collection::write_sequence;
use crate::skeletal::{Collection, IndexCursor, List};

/// A list whose length is fixed by the slice it views.
pub struct FixedList<'a, T> {
    slots: &'a mut [T],
}

impl<'a, T> FixedList<'a, T> {
    /// Wraps `slots`.
    pub const fn new(slots: &'a mut [T]) -> Self {
        Self { slots }
    }

    /// The viewed slice.
    pub fn as_slice(&self) -> &[T] {
        &*self.slots
    }
}

impl<T> Collection for FixedList<'_, T> {
    type Item = T;
    type Cursor = IndexCursor;

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn cursor(&self) -> IndexCursor {
        IndexCursor::start(self)
    }
}

impl<T> List for FixedList<'_, T> {
    type ListCursor = IndexCursor;

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        bounds::check_index(index, self.slots.len())?;
        Ok(&self.slots[index])
    }

    fn list_cursor(&self, index: usize) -> Result<IndexCursor, CollectionError> {
        IndexCursor::new(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        bounds::check_index(index, self.slots.len())?;
        Ok(std::mem::replace(&mut self.slots[index], element))
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedList<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FixedList<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.slots.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, ListCursor};
    use rstest::rstest;

    #[rstest]
    fn test_size_changes_are_unsupported() {
        let mut backing = [1, 2, 3];
        let mut list = FixedList::new(&mut backing);
        assert_eq!(
            list.add(4),
            Err(CollectionError::Unsupported { operation: "add" })
        );
        assert_eq!(
            list.remove_at(0),
            Err(CollectionError::Unsupported { operation: "remove_at" })
        );
        assert_eq!(
            list.remove_element(&2),
            Err(CollectionError::Unsupported { operation: "remove_at" })
        );
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_cursor_set_writes_through() {
        let mut backing = [1, 2, 3];
        let mut list = FixedList::new(&mut backing);
        let mut cursor = list.list_cursor(0).unwrap();
        while cursor.has_next(&list) {
            let doubled = cursor.next(&list).unwrap() * 2;
            cursor.set(&mut list, doubled).unwrap();
        }
        assert_eq!(list.to_string(), "[2, 4, 6]");
        assert_eq!(list.last_index_of(&4), Some(1));
    }

    #[rstest]
    fn test_clear_on_empty_view_succeeds() {
        let mut backing: [i32; 0] = [];
        let mut list = FixedList::new(&mut backing);
        assert_eq!(list.clear(), Ok(()));
    }
}
