//! Live views over a [`Map`].
//!
//! A view holds a mutable borrow of its map and delegates every operation to
//! it: removing through a view removes from the map, and a view observes the
//! map's current contents. Views are plain borrows, so building one costs
//! nothing and there is nothing to cache between calls.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::HashMap;
//!
//! let mut map = HashMap::new();
//! map.put("a", 1)?;
//! map.put("b", 2)?;
//! map.key_set().remove_element(&"a")?;
//! assert!(!map.contains_key(&"a"));
//! assert_eq!(map.value_collection().to_vec()?, vec![2]);
//! # Ok::<(), strata::CollectionError>(())
//! ```

use crate::cursor::Cursor;
use crate::error::CollectionError;

use super::map::Entry;
use super::{Collection, Map, Set};

// =============================================================================
// KeySet
// =============================================================================

/// Set view over the keys of a map.
pub struct KeySet<'a, M> {
    map: &'a mut M,
}

impl<'a, M> KeySet<'a, M> {
    pub(crate) const fn new(map: &'a mut M) -> Self {
        Self { map }
    }
}

/// Cursor over a [`KeySet`].
pub struct KeyCursor<M: Map>(M::EntryCursor);

impl<'m, M: Map> Cursor<KeySet<'m, M>> for KeyCursor<M> {
    type Item = M::Key;

    fn has_next(&self, view: &KeySet<'m, M>) -> bool {
        self.0.has_next(&*view.map)
    }

    fn next<'a>(&mut self, view: &'a KeySet<'m, M>) -> Result<&'a M::Key, CollectionError> {
        self.0.next(&*view.map).map(Entry::key)
    }

    fn remove(&mut self, view: &mut KeySet<'m, M>) -> Result<M::Key, CollectionError> {
        self.0.remove(&mut *view.map).map(Entry::into_key)
    }
}

impl<M: Map> Collection for KeySet<'_, M> {
    type Item = M::Key;
    type Cursor = KeyCursor<M>;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn cursor(&self) -> Self::Cursor {
        KeyCursor(self.map.entry_cursor())
    }

    fn contains(&self, key: &M::Key) -> bool
    where
        Self::Item: PartialEq,
    {
        self.map.contains_key(key)
    }

    fn remove_element(&mut self, key: &M::Key) -> Result<bool, CollectionError>
    where
        Self::Item: PartialEq,
    {
        self.map.remove(key).map(|value| value.is_some())
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.map.clear()
    }
}

impl<M: Map> Set for KeySet<'_, M> {}

// =============================================================================
// ValueCollection
// =============================================================================

/// Collection view over the values of a map.
pub struct ValueCollection<'a, M> {
    map: &'a mut M,
}

impl<'a, M> ValueCollection<'a, M> {
    pub(crate) const fn new(map: &'a mut M) -> Self {
        Self { map }
    }
}

/// Cursor over a [`ValueCollection`].
pub struct ValueCursor<M: Map>(M::EntryCursor);

impl<'m, M: Map> Cursor<ValueCollection<'m, M>> for ValueCursor<M> {
    type Item = M::Value;

    fn has_next(&self, view: &ValueCollection<'m, M>) -> bool {
        self.0.has_next(&*view.map)
    }

    fn next<'a>(
        &mut self,
        view: &'a ValueCollection<'m, M>,
    ) -> Result<&'a M::Value, CollectionError> {
        self.0.next(&*view.map).map(Entry::value)
    }

    fn remove(&mut self, view: &mut ValueCollection<'m, M>) -> Result<M::Value, CollectionError> {
        self.0.remove(&mut *view.map).map(Entry::into_value)
    }
}

impl<M: Map> Collection for ValueCollection<'_, M> {
    type Item = M::Value;
    type Cursor = ValueCursor<M>;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn cursor(&self) -> Self::Cursor {
        ValueCursor(self.map.entry_cursor())
    }

    fn contains(&self, value: &M::Value) -> bool
    where
        Self::Item: PartialEq,
    {
        self.map.contains_value(value)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.map.clear()
    }
}

// =============================================================================
// EntrySet
// =============================================================================

/// Set view over the entries of a map.
pub struct EntrySet<'a, M> {
    map: &'a mut M,
}

impl<'a, M> EntrySet<'a, M> {
    pub(crate) const fn new(map: &'a mut M) -> Self {
        Self { map }
    }
}

/// Cursor over an [`EntrySet`].
pub struct EntryCursor<M: Map>(M::EntryCursor);

impl<'m, M: Map> Cursor<EntrySet<'m, M>> for EntryCursor<M> {
    type Item = Entry<M::Key, M::Value>;

    fn has_next(&self, view: &EntrySet<'m, M>) -> bool {
        self.0.has_next(&*view.map)
    }

    fn next<'a>(&mut self, view: &'a EntrySet<'m, M>) -> Result<&'a Self::Item, CollectionError> {
        self.0.next(&*view.map)
    }

    fn remove(&mut self, view: &mut EntrySet<'m, M>) -> Result<Self::Item, CollectionError> {
        self.0.remove(&mut *view.map)
    }
}

impl<M: Map> Collection for EntrySet<'_, M> {
    type Item = Entry<M::Key, M::Value>;
    type Cursor = EntryCursor<M>;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn cursor(&self) -> Self::Cursor {
        EntryCursor(self.map.entry_cursor())
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.map.clear()
    }
}

impl<M: Map> Set for EntrySet<'_, M> {}
