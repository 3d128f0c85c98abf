//! Property-based tests for the mutable containers.
//!
//! Each container is driven by a random operation sequence alongside a
//! standard library model, and must agree with the model after every step.

use proptest::prelude::*;
use std::collections::{HashMap as StdHashMap, VecDeque};
use strata::mutable::{ArrayDeque, ArrayList, HashMap, HashSet, LinkedList};
use strata::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

#[derive(Debug, Clone)]
enum DequeOp {
    AddFirst(i32),
    AddLast(i32),
    PollFirst,
    PollLast,
    RemoveFirstOccurrence(i32),
}

fn deque_op() -> impl Strategy<Value = DequeOp> {
    prop_oneof![
        any::<i32>().prop_map(DequeOp::AddFirst),
        any::<i32>().prop_map(DequeOp::AddLast),
        Just(DequeOp::PollFirst),
        Just(DequeOp::PollLast),
        (0..8i32).prop_map(DequeOp::RemoveFirstOccurrence),
    ]
}

#[derive(Debug, Clone)]
enum ListOp {
    Add(i32),
    AddAt(usize, i32),
    RemoveAt(usize),
    Set(usize, i32),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<i32>().prop_map(ListOp::Add),
        (0..64usize, any::<i32>()).prop_map(|(index, value)| ListOp::AddAt(index, value)),
        (0..64usize).prop_map(ListOp::RemoveAt),
        (0..64usize, any::<i32>()).prop_map(|(index, value)| ListOp::Set(index, value)),
    ]
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(u16, i32)>> {
    prop::collection::vec((0..200u16, any::<i32>()), 0..300)
}

/// Applies `op` to any list and to a `Vec` model, comparing the outcomes.
fn apply_list_op<L>(list: &mut L, model: &mut Vec<i32>, op: &ListOp) -> Result<(), TestCaseError>
where
    L: List<Item = i32>,
{
    match *op {
        ListOp::Add(value) => {
            prop_assert_eq!(list.add(value), Ok(true));
            model.push(value);
        }
        ListOp::AddAt(index, value) => {
            let result = list.add_at(index, value);
            if index <= model.len() {
                prop_assert_eq!(result, Ok(()));
                model.insert(index, value);
            } else {
                prop_assert!(result.is_err());
            }
        }
        ListOp::RemoveAt(index) => {
            let result = list.remove_at(index);
            if index < model.len() {
                prop_assert_eq!(result, Ok(model.remove(index)));
            } else {
                prop_assert!(result.is_err());
            }
        }
        ListOp::Set(index, value) => {
            let result = list.set(index, value);
            if index < model.len() {
                prop_assert_eq!(result, Ok(std::mem::replace(&mut model[index], value)));
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
    prop_assert_eq!(list.len(), model.len());
    Ok(())
}

// =============================================================================
// Deque agrees with VecDeque
// =============================================================================

proptest! {
    #[test]
    fn prop_array_deque_matches_vec_deque(ops in prop::collection::vec(deque_op(), 0..200)) {
        let mut deque = ArrayDeque::with_capacity(8);
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                DequeOp::AddFirst(value) => {
                    deque.add_first(value).unwrap();
                    model.push_front(value);
                }
                DequeOp::AddLast(value) => {
                    deque.add_last(value).unwrap();
                    model.push_back(value);
                }
                DequeOp::PollFirst => prop_assert_eq!(deque.poll_first(), model.pop_front()),
                DequeOp::PollLast => prop_assert_eq!(deque.poll_last(), model.pop_back()),
                DequeOp::RemoveFirstOccurrence(value) => {
                    let position = model.iter().position(|candidate| *candidate == value);
                    if let Some(position) = position {
                        model.remove(position);
                    }
                    prop_assert_eq!(deque.remove_first_occurrence(&value), Ok(position.is_some()));
                }
            }
            prop_assert_eq!(deque.len(), model.len());
            prop_assert_eq!(deque.peek_first(), model.front());
            prop_assert_eq!(deque.peek_last(), model.back());
        }
        prop_assert!(deque.iter().eq(model.iter()));
        prop_assert!(deque.capacity().is_power_of_two());
    }
}

proptest! {
    #[test]
    fn prop_linked_list_matches_vec_deque(ops in prop::collection::vec(deque_op(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                DequeOp::AddFirst(value) => {
                    list.add_first(value).unwrap();
                    model.push_front(value);
                }
                DequeOp::AddLast(value) => {
                    list.add_last(value).unwrap();
                    model.push_back(value);
                }
                DequeOp::PollFirst => prop_assert_eq!(list.poll_first(), model.pop_front()),
                DequeOp::PollLast => prop_assert_eq!(list.poll_last(), model.pop_back()),
                DequeOp::RemoveFirstOccurrence(value) => {
                    let position = model.iter().position(|candidate| *candidate == value);
                    if let Some(position) = position {
                        model.remove(position);
                    }
                    prop_assert_eq!(list.remove_first_occurrence(&value), Ok(position.is_some()));
                }
            }
        }
        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.descending_elements().eq(model.iter().rev()));
    }
}

// =============================================================================
// Lists agree with Vec
// =============================================================================

proptest! {
    #[test]
    fn prop_array_list_matches_vec(ops in prop::collection::vec(list_op(), 0..150)) {
        let mut list = ArrayList::new();
        let mut model = Vec::new();
        for op in &ops {
            apply_list_op(&mut list, &mut model, op)?;
        }
        prop_assert_eq!(list.as_slice(), model.as_slice());
    }
}

proptest! {
    #[test]
    fn prop_linked_list_positional_matches_vec(ops in prop::collection::vec(list_op(), 0..150)) {
        let mut list = LinkedList::new();
        let mut model = Vec::new();
        for op in &ops {
            apply_list_op(&mut list, &mut model, op)?;
        }
        prop_assert_eq!(list.to_vec(), Ok(model));
    }
}

proptest! {
    #[test]
    fn prop_cursor_removal_matches_retain(values in prop::collection::vec(0..10i32, 0..100)) {
        let mut list: ArrayList<i32> = values.iter().copied().collect();
        let mut linked: LinkedList<i32> = values.iter().copied().collect();
        let mut model = values;
        model.retain(|value| value % 3 != 0);

        let mut cursor = list.cursor();
        while cursor.has_next(&list) {
            if cursor.next(&list)? % 3 == 0 {
                cursor.remove(&mut list)?;
            }
        }
        let mut cursor = linked.cursor();
        while cursor.has_next(&linked) {
            if cursor.next(&linked)? % 3 == 0 {
                cursor.remove(&mut linked)?;
            }
        }
        prop_assert_eq!(list.as_slice(), model.as_slice());
        prop_assert!(linked.iter().eq(model.iter()));
    }
}

// =============================================================================
// HashMap agrees with std HashMap
// =============================================================================

proptest! {
    #[test]
    fn prop_hash_map_matches_std(entries in arbitrary_entries(), removals in prop::collection::vec(0..200u16, 0..100)) {
        let mut map = HashMap::new();
        let mut model = StdHashMap::new();
        for (key, value) in entries {
            prop_assert_eq!(map.put(key, value), Ok(model.insert(key, value)));
        }
        for key in removals {
            prop_assert_eq!(map.remove(&key), Ok(model.remove(&key)));
        }
        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
        prop_assert_eq!(map.iter().count(), model.len());
    }
}

proptest! {
    #[test]
    fn prop_put_is_idempotent(entries in arbitrary_entries(), key in 0..200u16, value in any::<i32>()) {
        let mut map: HashMap<u16, i32> = entries.into_iter().collect();
        map.put(key, value).unwrap();
        let once_len = map.len();
        let version = map.modification_count();
        prop_assert_eq!(map.put(key, value), Ok(Some(value)));
        prop_assert_eq!(map.len(), once_len);
        prop_assert_eq!(map.modification_count(), version);
    }
}

proptest! {
    #[test]
    fn prop_remove_then_get_is_none(entries in arbitrary_entries(), key in 0..200u16) {
        let mut map: HashMap<u16, i32> = entries.into_iter().collect();
        map.remove(&key).unwrap();
        prop_assert_eq!(map.get(&key), None);
        prop_assert!(!map.key_set().contains(&key));
    }
}

proptest! {
    #[test]
    fn prop_insertion_order_survives_resize(keys in prop::collection::vec(any::<u32>(), 0..200)) {
        let mut map = HashMap::insertion_ordered();
        let mut model: Vec<u32> = Vec::new();
        for key in keys {
            if map.put(key, ()).unwrap().is_none() {
                model.push(key);
            }
        }
        let order: Vec<u32> = map.ordered_entries().map(|entry| *entry.key()).collect();
        prop_assert_eq!(order, model);
    }
}

// =============================================================================
// HashSet laws
// =============================================================================

proptest! {
    #[test]
    fn prop_set_add_is_idempotent(values in prop::collection::vec(0..50u8, 0..100)) {
        let mut set = HashSet::new();
        for value in &values {
            set.add(*value).unwrap();
        }
        let size = set.len();
        for value in &values {
            prop_assert_eq!(set.add(*value), Ok(false));
        }
        prop_assert_eq!(set.len(), size);
        let distinct: std::collections::HashSet<u8> = values.into_iter().collect();
        prop_assert_eq!(size, distinct.len());
    }
}

proptest! {
    #[test]
    fn prop_set_remove_all_matches_difference(
        left in prop::collection::vec(0..40u8, 0..60),
        right in prop::collection::vec(0..40u8, 0..60)
    ) {
        let mut set: HashSet<u8> = left.iter().copied().collect();
        let other: ArrayList<u8> = right.iter().copied().collect();
        set.remove_all(&other)?;
        let mut expected: Vec<u8> = left.into_iter().filter(|value| !right.contains(value)).collect();
        expected.sort_unstable();
        expected.dedup();
        let mut actual: Vec<u8> = set.iter().copied().collect();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }
}
