//! Separately chained hash map.
//!
//! [`HashMap`] hashes each key once, keeps the hash in the chain node and
//! routes it to a power-of-two bucket array by masking. Each bucket holds
//! the arena key of its chain head; chain nodes live in a [`Slab`] and link
//! forward by arena key.
//!
//! - `put` walks the target chain, replacing the value of an equal key or
//!   appending a new node at the chain tail.
//! - `remove` splices the matching node out, relinking its predecessor (or
//!   the bucket head) to its successor.
//! - Once the entry count exceeds the configured threshold the bucket
//!   array doubles and every chain is redistributed in order.
//!
//! Every mutation point is reported to the map's [`NodeHooks`] strategy.
//! Traversal follows the order the hooks keep, if any, and bucket order
//! otherwise; with [`LinkedOrder`] every cursor, view, iterator and
//! formatter sees entries eldest first.
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
//! assert_eq!(map.put("a", 3)?, Some(1));
//! assert_eq!(map.get(&"a"), Some(&3));
//! assert_eq!(map.len(), 2);
//! assert!(map.contains_value(&2));
//! # Ok::<(), strata::CollectionError>(())
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use slab::Slab;

use crate::config::{HashMapConfig, MAXIMUM_BUCKETS};
use crate::cursor::{Cursor, CursorIter, check_modification};
use crate::error::CollectionError;
use crate::skeletal::map::write_entries;
use crate::skeletal::{Entry, Map};

use super::hooks::{LinkedOrder, NoHooks, NodeHandle, NodeHooks};

/// Hash builder used when none is supplied.
///
/// `std`'s randomly keyed SipHash by default; the `fxhash` feature selects
/// `rustc_hash::FxBuildHasher` and the `ahash` feature selects
/// `ahash::RandomState`. Neither fast hasher resists hash flooding.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used when none is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used when none is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

#[derive(Debug, Clone)]
struct HashNode<K, V> {
    hash: u64,
    entry: Entry<K, V>,
    next: Option<usize>,
}

/// Folds the high half of `hash` into the low half, then masks.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn bucket_index(hash: u64, buckets: usize) -> usize {
    ((hash ^ (hash >> 32)) as usize) & (buckets - 1)
}

// =============================================================================
// HashMap Definition
// =============================================================================

/// A hash map with separate chaining and pluggable mutation hooks.
///
/// `S` builds the hasher; `H` observes mutations (see [`NodeHooks`]).
///
/// # Time Complexity
///
/// | Operation         | Expected | Worst |
/// |-------------------|----------|-------|
/// | `get`/`put`       | O(1)     | O(n)  |
/// | `remove`          | O(1)     | O(n)  |
/// | `contains_value`  | O(n)     | O(n)  |
/// | resize            | O(n)     | O(n)  |
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder, H = NoHooks> {
    buckets: Box<[Option<usize>]>,
    nodes: Slab<HashNode<K, V>>,
    hash_builder: S,
    hooks: H,
    config: HashMapConfig,
    threshold: usize,
    modification_count: usize,
}

impl<K, V> HashMap<K, V> {
    /// Creates an empty map with 16 buckets and load factor 0.75.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(HashMapConfig::new(), DefaultHashBuilder::default(), NoHooks)
    }

    /// Creates an empty map with room for `capacity` buckets.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(
            HashMapConfig::new().initial_capacity(capacity),
            DefaultHashBuilder::default(),
            NoHooks,
        )
    }

    /// Creates an empty map from `config`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IllegalArgument`] if `config` is rejected by
    /// [`HashMapConfig::validate`].
    pub fn with_config(config: HashMapConfig) -> Result<Self, CollectionError> {
        Self::with_parts(config, DefaultHashBuilder::default(), NoHooks)
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Creates an empty map hashing with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(HashMapConfig::new(), hash_builder, NoHooks)
    }
}

impl<K, V> HashMap<K, V, DefaultHashBuilder, LinkedOrder> {
    /// Creates an empty map that remembers insertion order.
    #[must_use]
    pub fn insertion_ordered() -> Self {
        Self::from_parts(
            HashMapConfig::new(),
            DefaultHashBuilder::default(),
            LinkedOrder::insertion_order(),
        )
    }

    /// Creates an empty map ordered from least to most recently accessed.
    #[must_use]
    pub fn access_ordered() -> Self {
        Self::from_parts(
            HashMapConfig::new(),
            DefaultHashBuilder::default(),
            LinkedOrder::access_order(),
        )
    }
}

impl<K, V, S, H: NodeHooks> HashMap<K, V, S, H> {
    /// Creates an empty map from every construction parameter.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IllegalArgument`] if `config` is rejected by
    /// [`HashMapConfig::validate`].
    pub fn with_parts(config: HashMapConfig, hash_builder: S, hooks: H) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self::from_parts(config, hash_builder, hooks))
    }

    fn from_parts(config: HashMapConfig, hash_builder: S, hooks: H) -> Self {
        let buckets = config.bucket_count();
        Self {
            buckets: vec![None; buckets].into_boxed_slice(),
            nodes: Slab::new(),
            hash_builder,
            hooks,
            threshold: config.threshold(buckets),
            config,
            modification_count: 0,
        }
    }

    /// Current number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The mutation hooks.
    #[inline]
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// The hash builder.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Structural version, bumped on every insertion, removal and clear,
    /// and on every access that reorders the traversal.
    #[inline]
    pub const fn modification_count(&self) -> usize {
        self.modification_count
    }

    /// Entries in traversal order.
    pub fn iter(&self) -> CursorIter<'_, Self, HashEntryCursor> {
        CursorIter::new(self, HashEntryCursor::start(self))
    }

    /// Keys in traversal order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(Entry::key)
    }

    /// Values in traversal order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(Entry::value)
    }

    /// First non-empty bucket at or after `start`, with its chain head.
    fn chain_from(&self, start: usize) -> Option<(usize, usize)> {
        self.buckets
            .iter()
            .enumerate()
            .skip(start)
            .find_map(|(bucket, head)| head.map(|node| (bucket, node)))
    }

    fn report_access(&mut self, slot: usize) {
        if self.hooks.after_node_access(NodeHandle(slot)) {
            self.modification_count = self.modification_count.wrapping_add(1);
        }
    }

    /// Splices the node `slot` out of its chain.
    fn unlink(&mut self, slot: usize) -> Option<Entry<K, V>> {
        let hash = self.nodes.get(slot)?.hash;
        let bucket = bucket_index(hash, self.buckets.len());
        let mut previous = None;
        let mut cursor = self.buckets[bucket];
        while let Some(current) = cursor {
            if current == slot {
                return Some(self.splice(bucket, previous, slot));
            }
            previous = Some(current);
            cursor = self.nodes[current].next;
        }
        None
    }

    fn splice(&mut self, bucket: usize, previous: Option<usize>, slot: usize) -> Entry<K, V> {
        let node = self.nodes.remove(slot);
        match previous {
            Some(previous) => self.nodes[previous].next = node.next,
            None => self.buckets[bucket] = node.next,
        }
        self.modification_count = self.modification_count.wrapping_add(1);
        self.hooks.after_node_removal(NodeHandle(slot));
        node.entry
    }

    /// Doubles the bucket array, keeping each chain's relative order.
    fn resize(&mut self) {
        let old_buckets = self.buckets.len();
        if old_buckets >= MAXIMUM_BUCKETS {
            self.threshold = usize::MAX;
            return;
        }
        let new_buckets = old_buckets << 1;
        let mut heads = vec![None; new_buckets].into_boxed_slice();
        let mut tails: Vec<Option<usize>> = vec![None; new_buckets];
        for bucket in 0..old_buckets {
            let mut cursor = self.buckets[bucket];
            while let Some(slot) = cursor {
                let node = &mut self.nodes[slot];
                cursor = node.next.take();
                let target = bucket_index(node.hash, new_buckets);
                match tails[target] {
                    Some(tail) => self.nodes[tail].next = Some(slot),
                    None => heads[target] = Some(slot),
                }
                tails[target] = Some(slot);
            }
        }
        self.buckets = heads;
        self.threshold = self.config.threshold(new_buckets);
        tracing::debug!(
            from = old_buckets,
            to = new_buckets,
            len = self.nodes.len(),
            "resized hash map buckets"
        );
    }
}

impl<K, V, S, H> HashMap<K, V, S, H>
where
    K: Eq + Hash,
    S: BuildHasher,
    H: NodeHooks,
{
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        let mut cursor = self.buckets[bucket_index(hash, self.buckets.len())];
        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            if node.hash == hash && node.entry.key().borrow() == key {
                return Some(slot);
            }
            cursor = node.next;
        }
        None
    }

    /// Returns the value mapped to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|slot| self.nodes[slot].entry.value())
    }

    /// Returns the key/value entry for `key`.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|slot| &self.nodes[slot].entry)
    }

    /// Returns `true` if some entry's key equals `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the value mapped to `key` for in-place mutation, reporting
    /// the access to the hooks.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.find(key)?;
        self.report_access(slot);
        Some(self.nodes[slot].entry.value_mut())
    }

    /// Returns the value mapped to `key`, reporting the read to the hooks.
    ///
    /// On an access-ordered map this moves the entry to the youngest
    /// position; [`get`](Self::get) borrows the map shared and never
    /// reorders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::prelude::*;
    /// use strata::mutable::HashMap;
    ///
    /// let mut cache = HashMap::access_ordered();
    /// cache.put("a", 1)?;
    /// cache.put("b", 2)?;
    /// assert_eq!(cache.access(&"a"), Some(&1));
    /// assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    /// # Ok::<(), strata::CollectionError>(())
    /// ```
    pub fn access<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.find(key)?;
        self.report_access(slot);
        Some(self.nodes[slot].entry.value())
    }

    /// Removes the entry for `key`, returning it whole.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        let bucket = bucket_index(hash, self.buckets.len());
        let mut previous = None;
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            if node.hash == hash && node.entry.key().borrow() == key {
                return Some(self.splice(bucket, previous, slot));
            }
            previous = Some(slot);
            cursor = node.next;
        }
        None
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        let bucket = bucket_index(hash, self.buckets.len());
        let mut tail = None;
        let mut cursor = self.buckets[bucket];
        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            if node.hash == hash && *node.entry.key() == key {
                let previous = self.nodes[slot].entry.set_value(value);
                self.report_access(slot);
                return Some(previous);
            }
            tail = Some(slot);
            cursor = node.next;
        }
        let slot = self.nodes.insert(HashNode {
            hash,
            entry: Entry::new(key, value),
            next: None,
        });
        match tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.buckets[bucket] = Some(slot),
        }
        self.modification_count = self.modification_count.wrapping_add(1);
        self.hooks.after_node_insertion(NodeHandle(slot));
        if self.nodes.len() > self.threshold {
            self.resize();
        }
        None
    }
}

impl<K, V, S> HashMap<K, V, S, LinkedOrder> {
    /// Entries from eldest to youngest, as [`iter`](Self::iter) yields
    /// them.
    pub fn ordered_entries(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.iter()
    }

    /// The eldest entry.
    pub fn eldest(&self) -> Option<&Entry<K, V>> {
        let handle = self.hooks.eldest()?;
        self.nodes.get(handle.0).map(|node| &node.entry)
    }

    /// Removes and returns the eldest entry.
    pub fn remove_eldest(&mut self) -> Option<Entry<K, V>> {
        let handle = self.hooks.eldest()?;
        self.unlink(handle.0)
    }
}

// =============================================================================
// Entry Cursor
// =============================================================================

/// Cursor over a [`HashMap`] in its traversal order.
///
/// Holds the arena key of the next node, plus its bucket when walking in
/// bucket order, so removing the previously returned node never disturbs
/// the traversal.
#[derive(Debug, Clone)]
pub struct HashEntryCursor {
    ordered: bool,
    bucket: usize,
    next: Option<usize>,
    last_returned: Option<usize>,
    expected_modification_count: usize,
}

impl HashEntryCursor {
    fn start<K, V, S, H: NodeHooks>(map: &HashMap<K, V, S, H>) -> Self {
        let ordered = map.hooks.keeps_order();
        let (bucket, next) = if ordered {
            (0, map.hooks.first().map(|handle| handle.0))
        } else {
            match map.chain_from(0) {
                Some((bucket, node)) => (bucket, Some(node)),
                None => (map.buckets.len(), None),
            }
        };
        Self {
            ordered,
            bucket,
            next,
            last_returned: None,
            expected_modification_count: map.modification_count,
        }
    }

    fn advance_in_buckets<K, V, S, H: NodeHooks>(
        &mut self,
        map: &HashMap<K, V, S, H>,
        chained: Option<usize>,
    ) {
        if chained.is_some() {
            self.next = chained;
            return;
        }
        match map.chain_from(self.bucket + 1) {
            Some((bucket, head)) => {
                self.bucket = bucket;
                self.next = Some(head);
            }
            None => {
                self.bucket = map.buckets.len();
                self.next = None;
            }
        }
    }
}

impl<K, V, S, H: NodeHooks> Cursor<HashMap<K, V, S, H>> for HashEntryCursor {
    type Item = Entry<K, V>;

    fn has_next(&self, _map: &HashMap<K, V, S, H>) -> bool {
        self.next.is_some()
    }

    fn next<'a>(&mut self, map: &'a HashMap<K, V, S, H>) -> Result<&'a Entry<K, V>, CollectionError> {
        check_modification(self.expected_modification_count, map.modification_count)?;
        let slot = self.next.ok_or(CollectionError::NoSuchElement)?;
        let node = map
            .nodes
            .get(slot)
            .ok_or(CollectionError::ConcurrentModification)?;
        self.last_returned = Some(slot);
        if self.ordered {
            self.next = map.hooks.successor(NodeHandle(slot)).map(|handle| handle.0);
        } else {
            self.advance_in_buckets(map, node.next);
        }
        Ok(&node.entry)
    }

    fn remove(&mut self, map: &mut HashMap<K, V, S, H>) -> Result<Entry<K, V>, CollectionError> {
        let last = self
            .last_returned
            .ok_or(CollectionError::illegal_state("remove without next"))?;
        check_modification(self.expected_modification_count, map.modification_count)?;
        let entry = map
            .unlink(last)
            .ok_or(CollectionError::ConcurrentModification)?;
        self.last_returned = None;
        self.expected_modification_count = map.modification_count;
        Ok(entry)
    }
}

// =============================================================================
// Map Implementation
// =============================================================================

impl<K, V, S, H> Map for HashMap<K, V, S, H>
where
    K: Eq + Hash,
    S: BuildHasher,
    H: NodeHooks,
{
    type Key = K;
    type Value = V;
    type EntryCursor = HashEntryCursor;

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn entry_cursor(&self) -> HashEntryCursor {
        HashEntryCursor::start(self)
    }

    fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.find(key).is_some()
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.nodes.iter().any(|(_, node)| node.entry.value() == value)
    }

    fn get(&self, key: &K) -> Option<&V>
    where
        K: PartialEq,
    {
        self.find(key).map(|slot| self.nodes[slot].entry.value())
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CollectionError> {
        Ok(self.insert(key, value))
    }

    fn remove(&mut self, key: &K) -> Result<Option<V>, CollectionError>
    where
        K: PartialEq,
    {
        Ok(self.remove_entry(key).map(Entry::into_value))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.nodes.clear();
        self.buckets.fill(None);
        self.modification_count = self.modification_count.wrapping_add(1);
        self.hooks.after_clear();
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S, H> Extend<(K, V)> for HashMap<K, V, S, H>
where
    K: Eq + Hash,
    S: BuildHasher,
    H: NodeHooks,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S, H> PartialEq for HashMap<K, V, S, H>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    H: NodeHooks,
{
    fn eq(&self, other: &Self) -> bool {
        self.map_eq(other)
    }
}

impl<K, V, S, H> Eq for HashMap<K, V, S, H>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
    H: NodeHooks,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S, H: NodeHooks> fmt::Debug for HashMap<K, V, S, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.iter().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S, H: NodeHooks> fmt::Display for HashMap<K, V, S, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(
            formatter,
            self.iter().map(|entry| (entry.key(), entry.value())),
        )
    }
}

static_assertions::assert_impl_all!(HashMap<String, i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
