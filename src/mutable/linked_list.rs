//! Doubly linked list and deque.
//!
//! [`LinkedList`] keeps its nodes in a [`Slab`] arena and links them by arena
//! key, so every link and unlink is O(1) and no node is ever addressed
//! through a raw pointer. Positional access walks from whichever end is
//! nearer the requested index.
//!
//! The list implements [`List`], [`Queue`] and [`Deque`]: it can serve as a
//! sequence, a FIFO queue and a LIFO stack at once.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add_last(2)?;
//! list.add_first(1)?;
//! list.add_at(2, 3)?;
//! assert_eq!(list.get(1)?, &2);
//! assert_eq!(list.poll_last(), Some(3));
//! assert_eq!(list.to_string(), "[1, 2]");
//! # Ok::<(), strata::CollectionError>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use slab::Slab;

use crate::bounds;
use crate::cursor::{Cursor, Descending, ListCursor, check_modification};
use crate::error::CollectionError;
use crate::skeletal::collection::write_sequence;
use crate::skeletal::{Collection, Deque, List, Queue};

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    prev: Option<usize>,
    next: Option<usize>,
}

// =============================================================================
// LinkedList Definition
// =============================================================================

/// A doubly linked list over an arena of nodes.
///
/// # Time Complexity
///
/// | Operation                    | Complexity      |
/// |------------------------------|-----------------|
/// | `add_first`/`add_last`       | O(1)            |
/// | `poll_first`/`poll_last`     | O(1)            |
/// | `get`/`set`/`add_at`         | O(min(i, n - i))|
/// | cursor `remove`/`add`        | O(1)            |
/// | `contains`                   | O(n)            |
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    first: Option<usize>,
    last: Option<usize>,
    modification_count: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            first: None,
            last: None,
            modification_count: 0,
        }
    }

    /// Borrowing iterator from first to last; also runs backwards.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.first,
            back: self.last,
            remaining: self.nodes.len(),
        }
    }

    // =========================================================================
    // Linking primitives
    // =========================================================================

    fn link_first(&mut self, item: T) {
        let key = self.nodes.insert(Node {
            item,
            prev: None,
            next: self.first,
        });
        match self.first {
            Some(first) => self.nodes[first].prev = Some(key),
            None => self.last = Some(key),
        }
        self.first = Some(key);
        self.bump_modification_count();
    }

    fn link_last(&mut self, item: T) {
        let key = self.nodes.insert(Node {
            item,
            prev: self.last,
            next: None,
        });
        match self.last {
            Some(last) => self.nodes[last].next = Some(key),
            None => self.first = Some(key),
        }
        self.last = Some(key);
        self.bump_modification_count();
    }

    /// Inserts `item` immediately before the node `successor`.
    fn link_before(&mut self, item: T, successor: usize) {
        let predecessor = self.nodes[successor].prev;
        let key = self.nodes.insert(Node {
            item,
            prev: predecessor,
            next: Some(successor),
        });
        self.nodes[successor].prev = Some(key);
        match predecessor {
            Some(predecessor) => self.nodes[predecessor].next = Some(key),
            None => self.first = Some(key),
        }
        self.bump_modification_count();
    }

    fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.first = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.last = node.prev,
        }
        self.bump_modification_count();
        node.item
    }

    /// Key of the node at `index`, walking from the nearer end.
    fn node_at(&self, index: usize) -> Option<usize> {
        let len = self.nodes.len();
        if index >= len {
            return None;
        }
        if index < (len >> 1) {
            let mut key = self.first;
            for _ in 0..index {
                key = key.and_then(|current| self.nodes[current].next);
            }
            key
        } else {
            let mut key = self.last;
            for _ in index + 1..len {
                key = key.and_then(|current| self.nodes[current].prev);
            }
            key
        }
    }

    fn node_for(&self, index: usize) -> Result<usize, CollectionError> {
        let length = self.nodes.len();
        bounds::check_index(index, length)?;
        self.node_at(index)
            .ok_or(CollectionError::IndexOutOfBounds { index, length })
    }

    fn find_first(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut key = self.first;
        while let Some(current) = key {
            if self.nodes[current].item == *element {
                return Some(current);
            }
            key = self.nodes[current].next;
        }
        None
    }

    #[inline]
    const fn bump_modification_count(&mut self) {
        self.modification_count = self.modification_count.wrapping_add(1);
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Bidirectional cursor over a [`LinkedList`].
///
/// Holds the key of the node a subsequent `next` would return, so cursor
/// insertion and removal cost O(1).
#[derive(Debug, Clone)]
pub struct LinkedCursor {
    next: Option<usize>,
    next_index: usize,
    last_returned: Option<usize>,
    expected_modification_count: usize,
}

impl<T> Cursor<LinkedList<T>> for LinkedCursor {
    type Item = T;

    fn has_next(&self, list: &LinkedList<T>) -> bool {
        self.next_index < list.len()
    }

    fn next<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, CollectionError> {
        check_modification(self.expected_modification_count, list.modification_count)?;
        if !self.has_next(list) {
            return Err(CollectionError::NoSuchElement);
        }
        let key = self.next.ok_or(CollectionError::ConcurrentModification)?;
        let node = list
            .nodes
            .get(key)
            .ok_or(CollectionError::ConcurrentModification)?;
        self.last_returned = Some(key);
        self.next = node.next;
        self.next_index += 1;
        Ok(&node.item)
    }

    fn remove(&mut self, list: &mut LinkedList<T>) -> Result<T, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("remove without next or previous"))?;
        check_modification(self.expected_modification_count, list.modification_count)?;
        let following = list
            .nodes
            .get(last)
            .ok_or(CollectionError::ConcurrentModification)?
            .next;
        let item = list.unlink(last);
        if self.next == Some(last) {
            // Removed after `previous`: the cursor was parked on this node.
            self.next = following;
        } else {
            self.next_index -= 1;
        }
        self.last_returned = None;
        self.expected_modification_count = list.modification_count;
        Ok(item)
    }
}

impl<T> ListCursor<LinkedList<T>> for LinkedCursor {
    fn has_previous(&self, _list: &LinkedList<T>) -> bool {
        self.next_index > 0
    }

    fn previous<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, CollectionError> {
        check_modification(self.expected_modification_count, list.modification_count)?;
        if self.next_index == 0 {
            return Err(CollectionError::NoSuchElement);
        }
        let key = match self.next {
            Some(next) => list
                .nodes
                .get(next)
                .ok_or(CollectionError::ConcurrentModification)?
                .prev,
            None => list.last,
        }
        .ok_or(CollectionError::ConcurrentModification)?;
        let node = list
            .nodes
            .get(key)
            .ok_or(CollectionError::ConcurrentModification)?;
        self.next = Some(key);
        self.last_returned = Some(key);
        self.next_index -= 1;
        Ok(&node.item)
    }

    fn next_index(&self, _list: &LinkedList<T>) -> usize {
        self.next_index
    }

    fn set(&mut self, list: &mut LinkedList<T>, element: T) -> Result<T, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("set without next or previous"))?;
        check_modification(self.expected_modification_count, list.modification_count)?;
        let node = list
            .nodes
            .get_mut(last)
            .ok_or(CollectionError::ConcurrentModification)?;
        Ok(std::mem::replace(&mut node.item, element))
    }

    fn add(&mut self, list: &mut LinkedList<T>, element: T) -> Result<(), CollectionError> {
        check_modification(self.expected_modification_count, list.modification_count)?;
        self.last_returned = None;
        match self.next {
            Some(next) => list.link_before(element, next),
            None => list.link_last(element),
        }
        self.next_index += 1;
        self.expected_modification_count = list.modification_count;
        Ok(())
    }
}

// =============================================================================
// Contract Implementations
// =============================================================================

impl<T> Collection for LinkedList<T> {
    type Item = T;
    type Cursor = LinkedCursor;

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn cursor(&self) -> LinkedCursor {
        LinkedCursor {
            next: self.first,
            next_index: 0,
            last_returned: None,
            expected_modification_count: self.modification_count,
        }
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_first(element).is_some()
    }

    fn add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.link_last(element);
        Ok(true)
    }

    fn remove_element(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        match self.find_first(element) {
            Some(key) => {
                self.unlink(key);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.nodes.clear();
        self.first = None;
        self.last = None;
        self.bump_modification_count();
        Ok(())
    }
}

impl<T> List for LinkedList<T> {
    type ListCursor = LinkedCursor;

    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let key = self.node_for(index)?;
        Ok(&self.nodes[key].item)
    }

    fn list_cursor(&self, index: usize) -> Result<LinkedCursor, CollectionError> {
        bounds::check_position(index, self.nodes.len())?;
        Ok(LinkedCursor {
            next: self.node_at(index),
            next_index: index,
            last_returned: None,
            expected_modification_count: self.modification_count,
        })
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        let key = self.node_for(index)?;
        Ok(std::mem::replace(&mut self.nodes[key].item, element))
    }

    fn add_at(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        bounds::check_position(index, self.nodes.len())?;
        if index == self.nodes.len() {
            self.link_last(element);
        } else {
            let successor = self.node_for(index)?;
            self.link_before(element, successor);
        }
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        let key = self.node_for(index)?;
        Ok(self.unlink(key))
    }

    #[inline]
    fn modification_count(&self) -> usize {
        self.modification_count
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == element)
    }

    fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|candidate| candidate == element)
    }
}

impl<T> Queue for LinkedList<T> {
    fn offer(&mut self, element: T) -> bool {
        self.link_last(element);
        true
    }

    fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    fn peek(&self) -> Option<&T> {
        self.peek_first()
    }
}

impl<T> Deque for LinkedList<T> {
    type DescendingCursor = Descending<LinkedCursor>;

    fn add_first(&mut self, element: T) -> Result<(), CollectionError> {
        self.link_first(element);
        Ok(())
    }

    fn add_last(&mut self, element: T) -> Result<(), CollectionError> {
        self.link_last(element);
        Ok(())
    }

    fn poll_first(&mut self) -> Option<T> {
        let first = self.first?;
        Some(self.unlink(first))
    }

    fn poll_last(&mut self) -> Option<T> {
        let last = self.last?;
        Some(self.unlink(last))
    }

    fn peek_first(&self) -> Option<&T> {
        self.first
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.item)
    }

    fn peek_last(&self) -> Option<&T> {
        self.last
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.item)
    }

    fn descending_cursor(&self) -> Descending<LinkedCursor> {
        Descending::new(LinkedCursor {
            next: None,
            next_index: self.nodes.len(),
            last_returned: None,
            expected_modification_count: self.modification_count,
        })
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.poll_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.poll_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.link_last(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(LinkedList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> LinkedList<i32> {
        (1..=6).collect()
    }

    #[rstest]
    #[case(0, 1)]
    #[case(2, 3)]
    #[case(3, 4)]
    #[case(5, 6)]
    fn test_node_at_walks_from_nearer_end(#[case] index: usize, #[case] expected: i32) {
        let list = sample();
        assert_eq!(list.get(index), Ok(&expected));
    }

    #[rstest]
    fn test_arena_keys_are_reused() {
        let mut list = sample();
        let capacity = list.nodes.capacity();
        list.poll_first();
        list.add_last(7).unwrap();
        assert_eq!(list.nodes.capacity(), capacity);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    fn test_cursor_remove_after_previous() {
        let mut list = sample();
        let mut cursor = list.list_cursor(3).unwrap();
        assert_eq!(cursor.previous(&list), Ok(&3));
        assert_eq!(cursor.remove(&mut list), Ok(3));
        assert_eq!(cursor.next_index(&list), 2);
        assert_eq!(cursor.next(&list), Ok(&4));
        assert_eq!(list.to_string(), "[1, 2, 4, 5, 6]");
    }

    #[rstest]
    fn test_cursor_add_at_end() {
        let mut list = sample();
        let mut cursor = list.list_cursor(6).unwrap();
        cursor.add(&mut list, 7).unwrap();
        assert!(!cursor.has_next(&list));
        assert_eq!(cursor.previous(&list), Ok(&7));
        assert_eq!(list.peek_last(), Some(&7));
    }

    #[rstest]
    fn test_iter_both_ends() {
        let list = sample();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    }

    #[rstest]
    fn test_clear_resets_links() {
        let mut list = sample();
        list.clear().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.peek_first(), None);
        assert_eq!(list.peek_last(), None);
        list.add(1).unwrap();
        assert_eq!(list.peek_first(), list.peek_last());
    }
}
