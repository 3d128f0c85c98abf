//! Circular-buffer deque.
//!
//! [`ArrayDeque`] stores its elements in a power-of-two slot buffer addressed
//! by a `head` and a `tail` index, both reduced by masking. Live elements
//! occupy `head..tail` (wrapping); every other slot is empty. When an
//! insertion makes `head` meet `tail` the buffer is full and doubles, with
//! the live range copied to the start of the new buffer.
//!
//! Interior removal shifts whichever side of the removed slot is shorter and
//! reports the side it moved as [`Shifted`], which is how cursors stay
//! positioned while they delete.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::ArrayDeque;
//!
//! let mut deque = ArrayDeque::with_capacity(8);
//! for value in 1..=9 {
//!     deque.add_last(value)?;
//! }
//! assert_eq!(deque.capacity(), 16);
//! assert_eq!(deque.poll_first(), Some(1));
//! assert_eq!(deque.poll_last(), Some(9));
//! # Ok::<(), strata::CollectionError>(())
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::bounds;
use crate::cursor::{Cursor, check_modification};
use crate::error::{CapacityOverflow, CollectionError};
use crate::growth;
use crate::skeletal::collection::write_sequence;
use crate::skeletal::{Collection, Deque, Queue};

/// Smallest buffer ever allocated.
const MIN_CAPACITY: usize = 8;

/// Buffer size of [`ArrayDeque::new`].
const DEFAULT_CAPACITY: usize = 16;

/// Which side of a deleted slot moved to close the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shifted {
    /// Elements between the head and the slot moved one step toward the
    /// tail; the head advanced.
    Front,
    /// Elements between the slot and the tail moved one step toward the
    /// head; the tail retreated.
    Back,
}

// =============================================================================
// ArrayDeque Definition
// =============================================================================

/// A double-ended queue over a growable circular buffer.
///
/// # Time Complexity
///
/// | Operation                  | Complexity           |
/// |----------------------------|----------------------|
/// | `add_first`/`add_last`     | amortized O(1)       |
/// | `poll_first`/`poll_last`   | O(1)                 |
/// | `get`                      | O(1)                 |
/// | `remove_at`/cursor remove  | O(min(i, n - i))     |
#[derive(Clone)]
pub struct ArrayDeque<T> {
    elements: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    modification_count: usize,
}

impl<T> ArrayDeque<T> {
    /// Creates an empty deque with 16 slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with `capacity` rounded up to a power of two,
    /// and at least 8, slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let largest = largest_slot_count::<T>();
        let slots = capacity
            .max(MIN_CAPACITY)
            .checked_next_power_of_two()
            .map_or(largest, |slots| slots.min(largest));
        Self {
            elements: empty_slots(slots),
            head: 0,
            tail: 0,
            modification_count: 0,
        }
    }

    /// Number of slots in the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.elements.len() - 1
    }

    /// Returns the element `index` positions from the front.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let length = self.len();
        bounds::check_index(index, length)?;
        self.elements[(self.head + index) & self.mask()]
            .as_ref()
            .ok_or(CollectionError::IndexOutOfBounds { index, length })
    }

    /// Removes and returns the element `index` positions from the front.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] outside `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        bounds::check_index(index, self.len())?;
        let slot = (self.head + index) & self.mask();
        self.delete(slot).map(|(element, _)| element)
    }

    /// Borrowing iterator from front to back; also runs backwards.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            elements: &self.elements,
            head: self.head,
            tail: self.tail,
        }
    }

    /// Structural version, bumped on every insertion and removal.
    #[inline]
    pub const fn modification_count(&self) -> usize {
        self.modification_count
    }

    /// Buffer size after the next doubling, checked before anything is
    /// stored so a failed doubling loses nothing.
    fn doubled_capacity(&self) -> Result<usize, CapacityOverflow> {
        let current = self.elements.len();
        let maximum = largest_slot_count::<T>();
        current
            .checked_mul(2)
            .filter(|doubled| *doubled <= maximum)
            .ok_or(CapacityOverflow {
                required: current.saturating_mul(2),
                maximum,
            })
    }

    /// Reallocates at `capacity` slots with the live range rotated to the
    /// start of the new buffer. Called only when the buffer is full.
    fn grow_to(&mut self, capacity: usize) {
        let old_capacity = self.elements.len();
        let mut slots = std::mem::take(&mut self.elements).into_vec();
        slots.rotate_left(self.head);
        slots.resize_with(capacity, || None);
        self.elements = slots.into_boxed_slice();
        self.head = 0;
        self.tail = old_capacity;
        tracing::debug!(
            from = old_capacity,
            to = capacity,
            "doubled deque buffer"
        );
    }

    /// Removes the element in `slot`, closing the gap from the shorter side.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if `slot` lies outside
    /// the live range.
    pub fn delete(&mut self, slot: usize) -> Result<(T, Shifted), CollectionError> {
        let mask = self.mask();
        if slot > mask {
            return Err(CollectionError::ConcurrentModification);
        }
        let front = slot.wrapping_sub(self.head) & mask;
        let back = self.tail.wrapping_sub(slot) & mask;
        if front >= self.len() {
            return Err(CollectionError::ConcurrentModification);
        }
        let removed = self.elements[slot]
            .take()
            .ok_or(CollectionError::ConcurrentModification)?;
        self.modification_count = self.modification_count.wrapping_add(1);
        if front < back {
            let mut current = slot;
            while current != self.head {
                let previous = current.wrapping_sub(1) & mask;
                self.elements[current] = self.elements[previous].take();
                current = previous;
            }
            self.head = (self.head + 1) & mask;
            Ok((removed, Shifted::Front))
        } else {
            let last = self.tail.wrapping_sub(1) & mask;
            let mut current = slot;
            while current != last {
                let following = (current + 1) & mask;
                self.elements[current] = self.elements[following].take();
                current = following;
            }
            self.tail = last;
            Ok((removed, Shifted::Back))
        }
    }

    fn first_slot_where<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<usize> {
        let mask = self.mask();
        let mut slot = self.head;
        while slot != self.tail {
            if self.elements[slot].as_ref().is_some_and(&mut predicate) {
                return Some(slot);
            }
            slot = (slot + 1) & mask;
        }
        None
    }

    fn last_slot_where<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<usize> {
        let mask = self.mask();
        let mut slot = self.tail;
        while slot != self.head {
            slot = slot.wrapping_sub(1) & mask;
            if self.elements[slot].as_ref().is_some_and(&mut predicate) {
                return Some(slot);
            }
        }
        None
    }
}

fn empty_slots<T>(count: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(count).collect()
}

/// Largest power-of-two slot count addressable for `T`.
const fn largest_slot_count<T>() -> usize {
    let maximum = growth::max_capacity_for::<Option<T>>();
    if maximum >= growth::MAX_CAPACITY {
        1 << (usize::BITS - 2)
    } else {
        1 << (usize::BITS - 1 - maximum.leading_zeros())
    }
}

// =============================================================================
// Cursors
// =============================================================================

/// Front-to-back cursor over an [`ArrayDeque`].
#[derive(Debug, Clone)]
pub struct DequeCursor {
    cursor: usize,
    fence: usize,
    last_returned: Option<usize>,
    expected_modification_count: usize,
}

impl<T> Cursor<ArrayDeque<T>> for DequeCursor {
    type Item = T;

    fn has_next(&self, _deque: &ArrayDeque<T>) -> bool {
        self.cursor != self.fence
    }

    fn next<'a>(&mut self, deque: &'a ArrayDeque<T>) -> Result<&'a T, CollectionError> {
        check_modification(self.expected_modification_count, deque.modification_count)?;
        if self.cursor == self.fence {
            return Err(CollectionError::NoSuchElement);
        }
        let element = deque.elements[self.cursor]
            .as_ref()
            .ok_or(CollectionError::ConcurrentModification)?;
        self.last_returned = Some(self.cursor);
        self.cursor = (self.cursor + 1) & deque.mask();
        Ok(element)
    }

    fn remove(&mut self, deque: &mut ArrayDeque<T>) -> Result<T, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("remove without next"))?;
        check_modification(self.expected_modification_count, deque.modification_count)?;
        let (element, shifted) = deque.delete(last)?;
        if shifted == Shifted::Back {
            // The unvisited elements moved one slot toward the head.
            self.cursor = self.cursor.wrapping_sub(1) & deque.mask();
            self.fence = deque.tail;
        }
        self.last_returned = None;
        self.expected_modification_count = deque.modification_count;
        Ok(element)
    }
}

/// Back-to-front cursor over an [`ArrayDeque`].
#[derive(Debug, Clone)]
pub struct DescendingDequeCursor {
    cursor: usize,
    fence: usize,
    last_returned: Option<usize>,
    expected_modification_count: usize,
}

impl<T> Cursor<ArrayDeque<T>> for DescendingDequeCursor {
    type Item = T;

    fn has_next(&self, _deque: &ArrayDeque<T>) -> bool {
        self.cursor != self.fence
    }

    fn next<'a>(&mut self, deque: &'a ArrayDeque<T>) -> Result<&'a T, CollectionError> {
        check_modification(self.expected_modification_count, deque.modification_count)?;
        if self.cursor == self.fence {
            return Err(CollectionError::NoSuchElement);
        }
        let slot = self.cursor.wrapping_sub(1) & deque.mask();
        let element = deque.elements[slot]
            .as_ref()
            .ok_or(CollectionError::ConcurrentModification)?;
        self.cursor = slot;
        self.last_returned = Some(slot);
        Ok(element)
    }

    fn remove(&mut self, deque: &mut ArrayDeque<T>) -> Result<T, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("remove without next"))?;
        check_modification(self.expected_modification_count, deque.modification_count)?;
        let (element, shifted) = deque.delete(last)?;
        if shifted == Shifted::Front {
            // The unvisited elements moved one slot toward the tail.
            self.cursor = (self.cursor + 1) & deque.mask();
            self.fence = deque.head;
        }
        self.last_returned = None;
        self.expected_modification_count = deque.modification_count;
        Ok(element)
    }
}

// =============================================================================
// Contract Implementations
// =============================================================================

impl<T> Collection for ArrayDeque<T> {
    type Item = T;
    type Cursor = DequeCursor;

    #[inline]
    fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask()
    }

    fn cursor(&self) -> DequeCursor {
        DequeCursor {
            cursor: self.head,
            fence: self.tail,
            last_returned: None,
            expected_modification_count: self.modification_count,
        }
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.first_slot_where(|candidate| candidate == element)
            .is_some()
    }

    fn add(&mut self, element: T) -> Result<bool, CollectionError> {
        self.add_last(element)?;
        Ok(true)
    }

    fn remove_element(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        self.remove_first_occurrence(element)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        let mask = self.mask();
        let mut slot = self.head;
        while slot != self.tail {
            self.elements[slot] = None;
            slot = (slot + 1) & mask;
        }
        self.head = 0;
        self.tail = 0;
        self.modification_count = self.modification_count.wrapping_add(1);
        Ok(())
    }
}

impl<T> Queue for ArrayDeque<T> {
    fn offer(&mut self, element: T) -> bool {
        self.offer_last(element)
    }

    fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    fn peek(&self) -> Option<&T> {
        self.peek_first()
    }
}

impl<T> Deque for ArrayDeque<T> {
    type DescendingCursor = DescendingDequeCursor;

    fn add_first(&mut self, element: T) -> Result<(), CollectionError> {
        let mask = self.mask();
        let head = self.head.wrapping_sub(1) & mask;
        let doubled = if head == self.tail {
            Some(self.doubled_capacity()?)
        } else {
            None
        };
        self.elements[head] = Some(element);
        self.head = head;
        self.modification_count = self.modification_count.wrapping_add(1);
        if let Some(capacity) = doubled {
            self.grow_to(capacity);
        }
        Ok(())
    }

    fn add_last(&mut self, element: T) -> Result<(), CollectionError> {
        let mask = self.mask();
        let tail = (self.tail + 1) & mask;
        let doubled = if tail == self.head {
            Some(self.doubled_capacity()?)
        } else {
            None
        };
        self.elements[self.tail] = Some(element);
        self.tail = tail;
        self.modification_count = self.modification_count.wrapping_add(1);
        if let Some(capacity) = doubled {
            self.grow_to(capacity);
        }
        Ok(())
    }

    fn poll_first(&mut self) -> Option<T> {
        let element = self.elements[self.head].take()?;
        self.head = (self.head + 1) & self.mask();
        self.modification_count = self.modification_count.wrapping_add(1);
        Some(element)
    }

    fn poll_last(&mut self) -> Option<T> {
        let tail = self.tail.wrapping_sub(1) & self.mask();
        let element = self.elements[tail].take()?;
        self.tail = tail;
        self.modification_count = self.modification_count.wrapping_add(1);
        Some(element)
    }

    fn peek_first(&self) -> Option<&T> {
        self.elements[self.head].as_ref()
    }

    fn peek_last(&self) -> Option<&T> {
        self.elements[self.tail.wrapping_sub(1) & self.mask()].as_ref()
    }

    fn descending_cursor(&self) -> DescendingDequeCursor {
        DescendingDequeCursor {
            cursor: self.tail,
            fence: self.head,
            last_returned: None,
            expected_modification_count: self.modification_count,
        }
    }

    fn remove_first_occurrence(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        match self.first_slot_where(|candidate| candidate == element) {
            Some(slot) => self.delete(slot).map(|_| true),
            None => Ok(false),
        }
    }

    fn remove_last_occurrence(&mut self, element: &T) -> Result<bool, CollectionError>
    where
        T: PartialEq,
    {
        match self.last_slot_where(|candidate| candidate == element) {
            Some(slot) => self.delete(slot).map(|_| true),
            None => Ok(false),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over an [`ArrayDeque`].
pub struct Iter<'a, T> {
    elements: &'a [Option<T>],
    head: usize,
    tail: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let element = self.elements[self.head].as_ref();
        self.head = (self.head + 1) & (self.elements.len() - 1);
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail.wrapping_sub(self.head) & (self.elements.len() - 1);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail = self.tail.wrapping_sub(1) & (self.elements.len() - 1);
        self.elements[self.tail].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over an [`ArrayDeque`].
pub struct IntoIter<T>(ArrayDeque<T>);

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

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0.saturating_add(1));
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for ArrayDeque<T> {
    /// # Panics
    ///
    /// Panics if the buffer cannot grow; use [`Deque::add_last`] to observe
    /// the failure instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if let Err(error) = self.add_last(element) {
                panic!("{error}");
            }
        }
    }
}

impl<T> IntoIterator for ArrayDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ArrayDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(ArrayDeque<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
