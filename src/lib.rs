//! # strata
//!
//! Mutable in-memory collections built on shared skeletal contracts.
//!
//! ## Overview
//!
//! The crate is layered:
//!
//! - **Contracts** ([`skeletal`]): `Collection`, `List`, `Set`, `Map`,
//!   `Queue` and `Deque` traits. Each declares a handful of required
//!   primitives and supplies every other operation as a default written in
//!   terms of them.
//! - **Iteration** ([`cursor`]): cursors that take their container on each
//!   step, remove in place, and fail fast on concurrent modification.
//! - **Containers** ([`mutable`]): `ArrayList`, `LinkedList`, `HashMap`,
//!   `HashSet`, `ArrayDeque` and `FixedList`.
//! - **Leaf utilities**: the [`growth`] policy, [`bounds`] checks, hash map
//!   [`config`] and the shared [`error`] taxonomy.
//!
//! ## Feature Flags
//!
//! - `fxhash`: `HashMap`/`HashSet` hash with `rustc_hash::FxBuildHasher`
//! - `ahash`: `HashMap`/`HashSet` hash with `ahash::RandomState`
//!
//! Neither fast hasher resists hash flooding; enable them only for trusted
//! keys.
//!
//! ## Example
//!
//! ```rust
//! use strata::prelude::*;
//! use strata::mutable::{ArrayList, HashMap, LinkedList};
//!
//! let mut list = ArrayList::new();
//! list.add_all([1, 2, 3])?;
//! list.remove_at(1)?;
//! assert_eq!(list.to_string(), "[1, 3]");
//!
//! let mut map = HashMap::new();
//! map.put("a", 1)?;
//! map.put("a", 3)?;
//! assert_eq!(map.get(&"a"), Some(&3));
//!
//! let mut stack = LinkedList::new();
//! stack.push(1)?;
//! stack.push(2)?;
//! assert_eq!(stack.pop()?, 2);
//! # Ok::<(), strata::CollectionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the contract traits, which must be in scope to call
/// contract methods on any container.
///
/// # Usage
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::{Cursor, ListCursor};
    pub use crate::error::CollectionError;
    pub use crate::skeletal::{Collection, Deque, Entry, List, Map, Queue, Set};
}

pub mod bounds;
pub mod config;
pub mod cursor;
pub mod error;
pub mod growth;
pub mod mutable;
pub mod skeletal;

pub use error::{CapacityOverflow, CollectionError};
