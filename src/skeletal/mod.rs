//! Abstract contracts with default behaviour.
//!
//! Each contract is a trait whose required methods are a small set of
//! primitives; every other operation has a default expressed through those
//! primitives and the container's [`Cursor`](crate::cursor::Cursor). A
//! concrete container opts into the whole contract by supplying the
//! primitives, and overrides individual defaults where its layout allows
//! something faster.
//!
//! - [`Collection`]: counting, traversal, containment, bulk operations
//! - [`List`]: positional access, with [`IndexCursor`] as the default cursor
//! - [`Set`]: duplicate-free collections and the smaller-side
//!   [`set::remove_all`]
//! - [`Map`]: key/value associations with [`KeySet`], [`ValueCollection`]
//!   and [`EntrySet`] views
//! - [`Queue`] and [`Deque`]: head/tail access in probing and asserting
//!   forms
//!
//! Helpers such as [`collection::remove_where`] and
//! [`collection::write_sequence`] are public so concrete types can compose
//! them into their own overrides.

pub mod collection;
pub mod list;
pub mod map;
pub mod queue;
pub mod set;
pub mod views;

pub use collection::Collection;
pub use list::{IndexCursor, List};
pub use map::{Entry, Map};
pub use queue::{Deque, Queue};
pub use set::Set;
pub use views::{EntrySet, KeySet, ValueCollection};
