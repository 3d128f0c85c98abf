//! Mutation call-outs for [`HashMap`](super::HashMap).
//!
//! A hash map notifies its [`NodeHooks`] strategy after every access,
//! insertion and removal of an entry, and after `clear`. The base map uses
//! [`NoHooks`], whose call-outs do nothing, and is traversed in bucket
//! order. [`LinkedOrder`] records the entries in insertion or access order
//! and supplies that order to every traversal of the map, which turns it
//! into an ordered map with an eldest entry.
//!
//! # Examples
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::HashMap;
//!
//! let mut cache = HashMap::access_ordered();
//! cache.put("a", 1)?;
//! cache.put("b", 2)?;
//! cache.put("a", 10)?;
//! assert_eq!(cache.eldest().map(|entry| *entry.key()), Some("b"));
//! assert_eq!(cache.remove_eldest().map(|entry| entry.into_pair()), Some(("b", 2)));
//! # Ok::<(), strata::CollectionError>(())
//! ```

/// Stable handle to a map entry, valid until that entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub(crate) usize);

/// Observer of hash map mutation points, and optionally the map's
/// traversal order.
///
/// Every method has a default: call-outs do nothing and no order is kept,
/// so the map falls back to bucket order.
pub trait NodeHooks {
    /// Called after an existing entry's value was read through a mutating
    /// path or replaced by `put`.
    ///
    /// Returns `true` if the access changed the traversal order; the map
    /// then counts it as a structural modification.
    fn after_node_access(&mut self, _node: NodeHandle) -> bool {
        false
    }

    /// Called after a new entry was linked into its chain.
    fn after_node_insertion(&mut self, _node: NodeHandle) {}

    /// Called after an entry was spliced out of its chain.
    fn after_node_removal(&mut self, _node: NodeHandle) {}

    /// Called after every entry was dropped at once.
    fn after_clear(&mut self) {}

    /// Whether the map should be traversed through [`first`](Self::first)
    /// and [`successor`](Self::successor) instead of bucket order.
    fn keeps_order(&self) -> bool {
        false
    }

    /// First entry of the kept order.
    fn first(&self) -> Option<NodeHandle> {
        None
    }

    /// Entry following `node` in the kept order.
    fn successor(&self, _node: NodeHandle) -> Option<NodeHandle> {
        None
    }
}

/// Hooks that ignore every call-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHooks;

impl NodeHooks for NoHooks {}

// =============================================================================
// LinkedOrder
// =============================================================================

/// Which event moves an entry to the young end of a [`LinkedOrder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderMode {
    /// Entries keep the position of their first insertion.
    #[default]
    Insertion,
    /// Replacing an entry's value moves it to the young end.
    Access,
}

#[derive(Debug, Clone, Copy)]
struct Links {
    before: Option<usize>,
    after: Option<usize>,
}

/// Hooks keeping a doubly linked order over the map's entries.
#[derive(Debug, Clone, Default)]
pub struct LinkedOrder {
    links: Vec<Option<Links>>,
    head: Option<usize>,
    tail: Option<usize>,
    mode: OrderMode,
}

impl LinkedOrder {
    /// Orders entries by first insertion.
    #[must_use]
    pub const fn insertion_order() -> Self {
        Self::with_mode(OrderMode::Insertion)
    }

    /// Orders entries from least to most recently accessed.
    #[must_use]
    pub const fn access_order() -> Self {
        Self::with_mode(OrderMode::Access)
    }

    const fn with_mode(mode: OrderMode) -> Self {
        Self {
            links: Vec::new(),
            head: None,
            tail: None,
            mode,
        }
    }

    /// The ordering mode.
    #[must_use]
    pub const fn mode(&self) -> OrderMode {
        self.mode
    }

    /// The oldest entry.
    #[must_use]
    pub fn eldest(&self) -> Option<NodeHandle> {
        self.head.map(NodeHandle)
    }

    /// The youngest entry.
    #[must_use]
    pub fn youngest(&self) -> Option<NodeHandle> {
        self.tail.map(NodeHandle)
    }

    /// Handles from eldest to youngest.
    pub fn handles(&self) -> Handles<'_> {
        Handles {
            order: self,
            next: self.eldest(),
        }
    }

    fn append(&mut self, slot: usize) {
        if self.links.len() <= slot {
            self.links.resize(slot + 1, None);
        }
        self.links[slot] = Some(Links {
            before: self.tail,
            after: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(links) = self.links[tail].as_mut() {
                    links.after = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    fn detach(&mut self, slot: usize) -> bool {
        let Some(Links { before, after }) = self.links.get_mut(slot).and_then(Option::take) else {
            return false;
        };
        match before {
            Some(before) => {
                if let Some(links) = self.links[before].as_mut() {
                    links.after = after;
                }
            }
            None => self.head = after,
        }
        match after {
            Some(after) => {
                if let Some(links) = self.links[after].as_mut() {
                    links.before = before;
                }
            }
            None => self.tail = before,
        }
        true
    }
}

impl NodeHooks for LinkedOrder {
    fn after_node_access(&mut self, node: NodeHandle) -> bool {
        if self.mode == OrderMode::Access && self.tail != Some(node.0) && self.detach(node.0) {
            self.append(node.0);
            return true;
        }
        false
    }

    fn after_node_insertion(&mut self, node: NodeHandle) {
        self.append(node.0);
    }

    fn after_node_removal(&mut self, node: NodeHandle) {
        self.detach(node.0);
    }

    fn after_clear(&mut self) {
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    fn keeps_order(&self) -> bool {
        true
    }

    fn first(&self) -> Option<NodeHandle> {
        self.eldest()
    }

    fn successor(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.links
            .get(node.0)
            .copied()
            .flatten()
            .and_then(|links| links.after)
            .map(NodeHandle)
    }
}

/// Iterator over the handles of a [`LinkedOrder`], eldest first.
pub struct Handles<'a> {
    order: &'a LinkedOrder,
    next: Option<NodeHandle>,
}

impl Iterator for Handles<'_> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        let current = self.next?;
        self.next = self.order.successor(current);
        Some(current)
    }
}
