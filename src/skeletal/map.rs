//! The map contract and its default behaviour.
//!
//! Every default is written against the entry cursor: lookups scan the
//! entries linearly and removals go through the cursor's `remove`. Hash maps
//! override the lookups with bucket addressing but keep the rest.

use std::fmt;

use crate::cursor::{Cursor, CursorIter};
use crate::error::CollectionError;

use super::views::{EntrySet, KeySet, ValueCollection};

/// A key/value pair stored by a [`Map`].
///
/// # Examples
///
/// ```rust
/// use strata::skeletal::Entry;
///
/// let mut entry = Entry::new("answer", 41);
/// assert_eq!(entry.set_value(42), 41);
/// assert_eq!(entry.to_string(), "answer=42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// The value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value.
    #[inline]
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, returning the previous one.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning the key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Consumes the entry, returning the value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the entry, returning both halves.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}={}", self.key, self.value)
    }
}

/// An association from keys to values.
///
/// Implementors supply [`Map::len`] and [`Map::entry_cursor`]. Maps that
/// can change override [`Map::put`] and provide an entry cursor that can
/// remove.
pub trait Map {
    /// The key type.
    type Key;

    /// The value type.
    type Value;

    /// The cursor produced by [`Map::entry_cursor`].
    type EntryCursor: Cursor<Self, Item = Entry<Self::Key, Self::Value>>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Creates a cursor over the entries.
    fn entry_cursor(&self) -> Self::EntryCursor;

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the entries through [`Map::entry_cursor`].
    fn entries(&self) -> CursorIter<'_, Self, Self::EntryCursor>
    where
        Self: Sized,
    {
        CursorIter::new(self, self.entry_cursor())
    }

    /// Returns `true` if an entry has a key equal to `key`.
    fn contains_key(&self, key: &Self::Key) -> bool
    where
        Self: Sized,
        Self::Key: PartialEq,
    {
        self.entries().any(|entry| entry.key() == key)
    }

    /// Returns `true` if an entry has a value equal to `value`.
    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self: Sized,
        Self::Value: PartialEq,
    {
        self.entries().any(|entry| entry.value() == value)
    }

    /// Returns the value mapped to `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>
    where
        Self: Sized,
        Self::Key: PartialEq,
    {
        self.entries()
            .find(|entry| entry.key() == key)
            .map(Entry::value)
    }

    /// Maps `key` to `value`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] unless overridden.
    fn put(
        &mut self,
        key: Self::Key,
        value: Self::Value,
    ) -> Result<Option<Self::Value>, CollectionError> {
        let _ = (key, value);
        Err(CollectionError::unsupported("put"))
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures, [`CollectionError::Unsupported`] included.
    fn remove(&mut self, key: &Self::Key) -> Result<Option<Self::Value>, CollectionError>
    where
        Self: Sized,
        Self::Key: PartialEq,
    {
        let mut cursor = self.entry_cursor();
        while cursor.has_next(self) {
            if cursor.next(self)?.key() == key {
                return cursor.remove(self).map(|entry| Some(entry.into_value()));
            }
        }
        Ok(None)
    }

    /// Puts every pair produced by `entries`.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of [`Map::put`].
    fn put_all<I>(&mut self, entries: I) -> Result<(), CollectionError>
    where
        Self: Sized,
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Propagates cursor failures, [`CollectionError::Unsupported`] included.
    fn clear(&mut self) -> Result<(), CollectionError>
    where
        Self: Sized,
    {
        let mut cursor = self.entry_cursor();
        while cursor.has_next(self) {
            cursor.next(self)?;
            cursor.remove(self)?;
        }
        Ok(())
    }

    /// A live set view over the keys.
    fn key_set(&mut self) -> KeySet<'_, Self>
    where
        Self: Sized,
    {
        KeySet::new(self)
    }

    /// A live collection view over the values.
    fn value_collection(&mut self) -> ValueCollection<'_, Self>
    where
        Self: Sized,
    {
        ValueCollection::new(self)
    }

    /// A live set view over the entries.
    fn entry_set(&mut self) -> EntrySet<'_, Self>
    where
        Self: Sized,
    {
        EntrySet::new(self)
    }

    /// Equal size, and every entry of `self` maps to an equal value in
    /// `other`.
    fn map_eq<O>(&self, other: &O) -> bool
    where
        Self: Sized,
        O: Map<Key = Self::Key, Value = Self::Value>,
        Self::Key: PartialEq,
        Self::Value: PartialEq,
    {
        self.len() == other.len()
            && self
                .entries()
                .all(|entry| other.get(entry.key()) == Some(entry.value()))
    }

    /// Renders the entries as `{k=v, ...}`.
    fn describe(&self) -> String
    where
        Self: Sized,
        Self::Key: fmt::Display,
        Self::Value: fmt::Display,
    {
        let mut rendered = String::new();
        let _ = write_entries(
            &mut rendered,
            self.entries().map(|entry| (entry.key(), entry.value())),
        );
        rendered
    }
}

/// Writes key/value pairs as `{k=v, ...}`.
///
/// # Errors
///
/// Propagates the writer's error.
pub fn write_entries<W, I, K, V>(writer: &mut W, entries: I) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator<Item = (K, V)>,
    K: fmt::Display,
    V: fmt::Display,
{
    writer.write_char('{')?;
    let mut first = true;
    for (key, value) in entries {
        if first {
            first = false;
        } else {
            writer.write_str(", ")?;
        }
        write!(writer, "{key}={value}")?;
    }
    writer.write_char('}')
}
