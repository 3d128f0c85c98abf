//! Unit tests for LinkedList.

use rstest::rstest;
use strata::mutable::LinkedList;
use strata::prelude::*;

fn list_of(values: &[i32]) -> LinkedList<i32> {
    values.iter().copied().collect()
}

fn contents(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

// =============================================================================
// Stack and queue behaviour
// =============================================================================

#[rstest]
fn test_push_pop_is_lifo() {
    let mut stack = LinkedList::new();
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    stack.push(3).unwrap();
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(CollectionError::NoSuchElement));
}

#[rstest]
fn test_add_last_remove_first_is_fifo() {
    let mut queue = LinkedList::new();
    for value in 0..10 {
        queue.add_last(value).unwrap();
    }
    let drained: Vec<i32> = std::iter::from_fn(|| queue.remove_first().ok()).collect();
    assert_eq!(drained, (0..10).collect::<Vec<_>>());
}

#[rstest]
fn test_queue_contract() {
    let mut queue = LinkedList::new();
    assert!(queue.offer(1));
    assert!(queue.offer(2));
    assert_eq!(queue.peek(), Some(&1));
    assert_eq!(queue.element(), Ok(&1));
    assert_eq!(queue.poll(), Some(1));
    assert_eq!(queue.remove_head(), Ok(2));
    assert_eq!(queue.poll(), None);
    assert_eq!(queue.element(), Err(CollectionError::NoSuchElement));
}

#[rstest]
fn test_probe_and_assert_forms_on_empty() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.poll_first(), None);
    assert_eq!(list.poll_last(), None);
    assert_eq!(list.peek_first(), None);
    assert_eq!(list.peek_last(), None);
    assert_eq!(list.get_first(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.get_last(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.remove_first(), Err(CollectionError::NoSuchElement));
    assert_eq!(list.remove_last(), Err(CollectionError::NoSuchElement));
}

#[rstest]
fn test_offer_first_and_last() {
    let mut list = LinkedList::new();
    assert!(list.offer_last(2));
    assert!(list.offer_first(1));
    assert!(list.offer_last(3));
    assert_eq!(contents(&list), vec![1, 2, 3]);
}

// =============================================================================
// Positional operations
// =============================================================================

#[rstest]
#[case(0, vec![9, 1, 2, 3, 4])]
#[case(2, vec![1, 2, 9, 3, 4])]
#[case(3, vec![1, 2, 3, 9, 4])]
#[case(4, vec![1, 2, 3, 4, 9])]
fn test_add_at(#[case] index: usize, #[case] expected: Vec<i32>) {
    let mut list = list_of(&[1, 2, 3, 4]);
    list.add_at(index, 9).unwrap();
    assert_eq!(contents(&list), expected);
}

#[rstest]
#[case(0, 1, vec![2, 3, 4])]
#[case(1, 2, vec![1, 3, 4])]
#[case(3, 4, vec![1, 2, 3])]
fn test_remove_at(#[case] index: usize, #[case] removed: i32, #[case] expected: Vec<i32>) {
    let mut list = list_of(&[1, 2, 3, 4]);
    assert_eq!(list.remove_at(index), Ok(removed));
    assert_eq!(contents(&list), expected);
}

#[rstest]
fn test_positional_bounds() {
    let mut list = list_of(&[1, 2]);
    assert_eq!(
        list.get(2),
        Err(CollectionError::IndexOutOfBounds {
            index: 2,
            length: 2
        })
    );
    assert!(list.add_at(3, 0).is_err());
    assert!(list.remove_at(2).is_err());
    assert!(list.set(5, 0).is_err());
}

#[rstest]
fn test_set_replaces_in_place() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.set(2, 30), Ok(3));
    assert_eq!(list.peek_last(), Some(&30));
}

#[rstest]
fn test_index_of_both_ends() {
    let list = list_of(&[5, 6, 5, 6]);
    assert_eq!(list.index_of(&6), Some(1));
    assert_eq!(list.last_index_of(&6), Some(3));
    assert_eq!(list.last_index_of(&9), None);
}

// =============================================================================
// Occurrence removal
// =============================================================================

#[rstest]
fn test_remove_first_and_last_occurrence() {
    let mut list = list_of(&[1, 2, 1, 2, 1]);
    assert_eq!(list.remove_first_occurrence(&2), Ok(true));
    assert_eq!(contents(&list), vec![1, 1, 2, 1]);
    assert_eq!(list.remove_last_occurrence(&1), Ok(true));
    assert_eq!(contents(&list), vec![1, 1, 2]);
    assert_eq!(list.remove_last_occurrence(&7), Ok(false));
}

#[rstest]
fn test_remove_element_unlinks_first_match() {
    let mut list = list_of(&[3, 4, 3]);
    assert_eq!(list.remove_element(&3), Ok(true));
    assert_eq!(contents(&list), vec![4, 3]);
    assert_eq!(list.peek_first(), Some(&4));
}

// =============================================================================
// Cursors
// =============================================================================

#[rstest]
fn test_cursor_remove_every_other() {
    let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
    let mut cursor = list.cursor();
    let mut keep = true;
    while cursor.has_next(&list) {
        cursor.next(&list).unwrap();
        if !keep {
            cursor.remove(&mut list).unwrap();
        }
        keep = !keep;
    }
    assert_eq!(contents(&list), vec![1, 3, 5]);
}

#[rstest]
fn test_list_cursor_add_and_set() {
    let mut list = list_of(&[1, 3]);
    let mut cursor = list.list_cursor(1).unwrap();
    cursor.add(&mut list, 2).unwrap();
    assert_eq!(cursor.next_index(&list), 2);
    assert!(matches!(
        cursor.set(&mut list, 0),
        Err(CollectionError::IllegalState { .. })
    ));
    assert_eq!(cursor.next(&list), Ok(&3));
    assert_eq!(cursor.set(&mut list, 30), Ok(3));
    assert_eq!(contents(&list), vec![1, 2, 30]);
}

#[rstest]
fn test_descending_cursor_and_elements() {
    let mut list = list_of(&[1, 2, 3, 4]);
    assert_eq!(
        list.descending_elements().copied().collect::<Vec<_>>(),
        vec![4, 3, 2, 1]
    );
    let mut cursor = list.descending_cursor();
    while cursor.has_next(&list) {
        if *cursor.next(&list).unwrap() % 2 == 0 {
            cursor.remove(&mut list).unwrap();
        }
    }
    assert_eq!(contents(&list), vec![1, 3]);
}

#[rstest]
fn test_list_cursor_start_past_end_is_out_of_bounds() {
    let list = list_of(&[1]);
    assert!(matches!(
        list.list_cursor(2),
        Err(CollectionError::IndexOutOfBounds { index: 2, length: 1 })
    ));
}

// =============================================================================
// Standard traits
// =============================================================================

#[rstest]
fn test_into_iter_both_ends() {
    let list = list_of(&[1, 2, 3]);
    let mut iter = list.into_iter();
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.len(), 1);
}

#[rstest]
fn test_equality_and_display() {
    let left = list_of(&[1, 2]);
    let mut right = LinkedList::new();
    right.add_first(2).unwrap();
    right.add_first(1).unwrap();
    assert_eq!(left, right);
    assert_eq!(format!("{left}"), "[1, 2]");
    assert_eq!(format!("{left:?}"), "[1, 2]");
}
