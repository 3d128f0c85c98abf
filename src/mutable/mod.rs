//! Concrete mutable containers.
//!
//! | Type            | Contracts                  | Storage                          |
//! |-----------------|----------------------------|----------------------------------|
//! | [`ArrayList`]   | `List`                     | contiguous, growth by half       |
//! | [`LinkedList`]  | `List`, `Queue`, `Deque`   | slab of doubly linked nodes      |
//! | [`HashMap`]     | `Map`                      | power-of-two buckets, chained    |
//! | [`HashSet`]     | `Set`                      | `HashMap<T, ()>`                 |
//! | [`ArrayDeque`]  | `Queue`, `Deque`           | power-of-two circular buffer     |
//! | [`FixedList`]   | `List` (read and replace)  | borrowed slice                   |
//!
//! Every container counts its structural modifications, and every cursor
//! it hands out fails with
//! [`CollectionError::ConcurrentModification`](crate::CollectionError::ConcurrentModification)
//! once that count moves underneath it.

mod array_deque;
mod array_list;
mod fixed_list;
mod hash_map;
mod hash_set;
pub mod hooks;
mod linked_list;

pub use array_deque::{ArrayDeque, DequeCursor, DescendingDequeCursor, Shifted};
pub use array_list::ArrayList;
pub use fixed_list::FixedList;
pub use hash_map::{DefaultHashBuilder, HashEntryCursor, HashMap};
pub use hash_set::{HashSet, SetCursor};
pub use hooks::{LinkedOrder, NoHooks, NodeHandle, NodeHooks, OrderMode};
pub use linked_list::{LinkedCursor, LinkedList};
